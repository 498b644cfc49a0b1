use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::stats::{average, maximum, median, minimum, mode, range, standard_deviation};
use crate::validate::validate;

/// All descriptive statistics of one data set.
///
/// Serializes with camelCase keys; an absent mode becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average: f64,
    pub maximum: f64,
    pub median: f64,
    pub minimum: f64,
    pub mode: Option<Vec<f64>>,
    pub range: f64,
    pub standard_deviation: f64,
}

/// Compute every statistic of `data` at once.
pub fn summary<D>(data: &D) -> Result<Summary>
where
    D: Dataset + ?Sized,
{
    validate(data)?;

    Ok(Summary {
        average: average(data)?,
        maximum: maximum(data)?,
        median: median(data)?,
        minimum: minimum(data)?,
        mode: mode(data)?,
        range: range(data)?,
        standard_deviation: standard_deviation(data)?,
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average - {} > Max - {} > Median - {} > Min - {} > Mode - ",
            self.average, self.maximum, self.median, self.minimum
        )?;
        match &self.mode {
            Some(modes) => write!(f, "{:?}", modes)?,
            None => write!(f, "none")?,
        }
        write!(
            f,
            " > Range - {} > Std Dev - {:.4}",
            self.range, self.standard_deviation
        )
    }
}
