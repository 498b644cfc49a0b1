use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("Input is not a sequence of values. Found `{found}`.")]
    NotASequence { found: &'static str },
    #[error("Element at index {index} is not a finite number (non-numeric and NaN values are equally invalid). Found `{found}`.")]
    InvalidElement { index: usize, found: String },
    #[error("Input sequence is empty.")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, StatsError>;
