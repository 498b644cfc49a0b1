use log::trace;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::frequency::FrequencyTable;

/// Arithmetic mean.
pub fn average<D>(data: &D) -> Result<f64>
where
    D: Dataset + ?Sized,
{
    let values = data.numbers()?;
    let average = mean_of(&values);
    trace!("average of {} values: {}", values.len(), average);
    Ok(average)
}

/// Largest element.
pub fn maximum<D>(data: &D) -> Result<f64>
where
    D: Dataset + ?Sized,
{
    let values = data.numbers()?;
    let mut iter = values.iter().copied();
    // Validated data is non-empty; the first element seeds the reduction.
    let first = iter.next().unwrap_or_default();
    Ok(iter.fold(first, f64::max))
}

/// Smallest element.
pub fn minimum<D>(data: &D) -> Result<f64>
where
    D: Dataset + ?Sized,
{
    let values = data.numbers()?;
    let mut iter = values.iter().copied();
    let first = iter.next().unwrap_or_default();
    Ok(iter.fold(first, f64::min))
}

/// Middle value of a sorted copy of the data. For an even number of elements
/// this is the mean of the two middle values.
pub fn median<D>(data: &D) -> Result<f64>
where
    D: Dataset + ?Sized,
{
    let mut sorted = data.numbers()?.into_owned();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[middle]
    } else {
        midpoint(sorted[middle - 1], sorted[middle])
    };
    trace!("median of {} values: {}", sorted.len(), median);
    Ok(median)
}

/// Most frequent value(s), ascending.
///
/// Returns `Ok(None)` when no value is more representative than the others:
/// for a single element, and whenever every distinct value ties for the
/// highest count (e.g. `[1, 1, 1]` or `[1, 2, 1, 2]`). Several values are
/// returned when they share the highest count but others occur less often.
pub fn mode<D>(data: &D) -> Result<Option<Vec<f64>>>
where
    D: Dataset + ?Sized,
{
    let values = data.numbers()?;
    if values.len() == 1 {
        return Ok(None);
    }

    let table = FrequencyTable::from_values(&values);
    let max_count = table.max_count();
    let mut modes = table.values_with_count(max_count);

    if max_count * modes.len() == table.total() {
        trace!("no mode: all {} distinct values occur {} times", modes.len(), max_count);
        return Ok(None);
    }

    modes.sort_by(f64::total_cmp);
    trace!("mode of {} values: {:?}", values.len(), modes);
    Ok(Some(modes))
}

/// Difference between [maximum] and [minimum].
pub fn range<D>(data: &D) -> Result<f64>
where
    D: Dataset + ?Sized,
{
    Ok(maximum(data)? - minimum(data)?)
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn standard_deviation<D>(data: &D) -> Result<f64>
where
    D: Dataset + ?Sized,
{
    let values = data.numbers()?;
    let mean = average(data)?;
    let variance = mean_squared_deviation(&values, mean);
    let deviation = if variance.is_finite() {
        variance.sqrt()
    } else {
        // Squares overflowed: rescale so the largest magnitude is 1.
        let scale = values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
        let scaled = values.iter().map(|value| value / scale).collect::<Vec<_>>();
        mean_squared_deviation(&scaled, mean_of(&scaled)).sqrt() * scale
    };
    trace!("standard deviation of {} values: {}", values.len(), deviation);
    Ok(deviation)
}

/// Mean of a validated, non-empty slice. Falls back to summing pre-divided
/// values when the plain sum overflows.
fn mean_of(values: &[f64]) -> f64 {
    let count = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        sum / count
    } else {
        values.iter().map(|value| value / count).sum()
    }
}

fn midpoint(low: f64, high: f64) -> f64 {
    let sum = low + high;
    if sum.is_finite() {
        sum / 2.0
    } else {
        low / 2.0 + high / 2.0
    }
}

fn mean_squared_deviation(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64
}
