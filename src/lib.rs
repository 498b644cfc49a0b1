//! Descriptive statistics over numeric sequences.
//!
//! Every public function first runs the same validation gate (see
//! [validate()]) and fails with a [StatsError] before computing anything.
//!
//! ```
//! use descriptive_stats::{average, median, mode, summary};
//!
//! let data = [4.0, 2.0, 6.0, 1.0, 3.0, 7.0, 5.0, 3.0];
//! assert_eq!(average(&data).unwrap(), 3.875);
//! assert_eq!(median(&data).unwrap(), 3.5);
//! assert_eq!(mode(&data).unwrap(), Some(vec![3.0]));
//!
//! let summary = summary(&[42.0]).unwrap();
//! assert_eq!(summary.mode, None);
//! ```

pub mod dataset;
pub mod error;
mod frequency;
pub mod stats;
pub mod summary;
pub mod validate;
pub mod value;

pub use dataset::Dataset;
pub use error::{Result, StatsError};
pub use stats::{average, maximum, median, minimum, mode, range, standard_deviation};
pub use summary::{summary, Summary};
pub use validate::validate;
pub use value::Value;
