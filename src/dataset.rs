use std::borrow::Cow;

use crate::error::Result;
use crate::validate;

/// Anything that can be validated into a sequence of finite numbers.
///
/// Implementations run the whole validation gate: sequence check, element
/// check, emptiness check, in that order. `f64` slices are handed back
/// borrowed, every other representation is converted into an owned copy.
/// Either way the caller's data is never modified.
pub trait Dataset {
    fn numbers(&self) -> Result<Cow<'_, [f64]>>;
}

impl Dataset for [f64] {
    fn numbers(&self) -> Result<Cow<'_, [f64]>> {
        for (index, &value) in self.iter().enumerate() {
            validate::check_finite(index, value)?;
        }
        validate::check_non_empty(self).map(Cow::Borrowed)
    }
}

macro_rules! impl_dataset_for_primitive {
    ($($ty:ty),*) => {
        $(
            impl Dataset for [$ty] {
                fn numbers(&self) -> Result<Cow<'_, [f64]>> {
                    validate::collect_numbers(self.iter().map(|&value| value as f64))
                        .map(Cow::Owned)
                }
            }
        )*
    };
}

impl_dataset_for_primitive!(f32, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl<T> Dataset for Vec<T>
where
    [T]: Dataset,
{
    fn numbers(&self) -> Result<Cow<'_, [f64]>> {
        self.as_slice().numbers()
    }
}

impl<T, const N: usize> Dataset for [T; N]
where
    [T]: Dataset,
{
    fn numbers(&self) -> Result<Cow<'_, [f64]>> {
        self[..].numbers()
    }
}

impl<D> Dataset for &D
where
    D: Dataset + ?Sized,
{
    fn numbers(&self) -> Result<Cow<'_, [f64]>> {
        (**self).numbers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_slice_is_borrowed() {
        let data = vec![1.5, 2.5];
        match data.numbers().unwrap() {
            Cow::Borrowed(numbers) => assert_eq!(numbers, &[1.5, 2.5]),
            Cow::Owned(_) => panic!("f64 data should not be copied"),
        }
    }

    #[test]
    fn test_integers_are_converted() {
        let data: [i64; 3] = [-4, 0, 9];
        assert_eq!(data.numbers().unwrap().as_ref(), &[-4.0, 0.0, 9.0]);

        let data: Vec<usize> = vec![7];
        assert_eq!(data.numbers().unwrap().as_ref(), &[7.0]);
    }

    #[test]
    fn test_reference_forwards() {
        let data = [2.0_f32, 4.0];
        let data_ref = &data;
        assert_eq!(data_ref.numbers().unwrap().as_ref(), &[2.0, 4.0]);
    }
}
