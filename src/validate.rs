use log::debug;

use crate::dataset::Dataset;
use crate::error::{Result, StatsError};

/// Confirm `data` is usable as a numeric data set.
///
/// Checks run in a fixed order: the input must be a sequence, then every
/// element must be a finite number, then the sequence must be non-empty.
/// The first failing check decides the error, so an empty non-sequence
/// reports [StatsError::NotASequence].
pub fn validate<D>(data: &D) -> Result<()>
where
    D: Dataset + ?Sized,
{
    data.numbers().map(|_| ())
}

pub(crate) fn reject(error: StatsError) -> StatsError {
    debug!("Rejecting input: {}", error);
    error
}

pub(crate) fn check_finite(index: usize, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(reject(StatsError::InvalidElement {
            index,
            found: value.to_string(),
        }))
    }
}

pub(crate) fn check_non_empty<T>(numbers: T) -> Result<T>
where
    T: AsRef<[f64]>,
{
    if numbers.as_ref().is_empty() {
        Err(reject(StatsError::EmptySequence))
    } else {
        Ok(numbers)
    }
}

/// Element and emptiness checks over values already known to be numeric.
pub(crate) fn collect_numbers<I>(values: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let numbers = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| check_finite(index, value))
        .collect::<Result<Vec<_>>>()?;
    check_non_empty(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_accepts_finite_numbers() {
        assert!(validate(&[1.0, -2.5, 0.0]).is_ok());
        assert!(validate(&vec![3_u8, 4, 5]).is_ok());
        assert!(validate(&Value::from(vec![1.0, 2.0])).is_ok());
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        let err = validate(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidElement {
                index: 1,
                found: "NaN".into()
            }
        );

        let err = validate(&[f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidElement { index: 0, .. }));

        let err = validate(&vec![2.0_f32, f32::INFINITY]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidElement { index: 1, .. }));
    }

    #[test]
    fn test_rejects_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(validate(&empty), Err(StatsError::EmptySequence));
        assert_eq!(validate(&Vec::<i64>::new()), Err(StatsError::EmptySequence));
    }

    #[test]
    fn test_check_order() {
        // Type check before anything else, even for "empty" text.
        let err = validate(&Value::from("")).unwrap_err();
        assert_eq!(err, StatsError::NotASequence { found: "text" });

        // Element check before emptiness check.
        let err = validate(&Value::from(vec![Value::Null])).unwrap_err();
        assert!(matches!(err, StatsError::InvalidElement { index: 0, .. }));

        // First invalid element wins.
        let list = Value::from(vec![Value::from(1.0), Value::from(true), Value::from(f64::NAN)]);
        let err = validate(&list).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidElement {
                index: 1,
                found: "true".into()
            }
        );

        let empty = Value::List(Vec::new());
        assert_eq!(validate(&empty), Err(StatsError::EmptySequence));
    }

    #[test]
    fn test_collect_numbers() {
        assert_eq!(collect_numbers(vec![1.0, 2.0]), Ok(vec![1.0, 2.0]));
        assert_eq!(collect_numbers(Vec::new()), Err(StatsError::EmptySequence));
    }
}
