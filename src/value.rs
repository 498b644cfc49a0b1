use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::dataset::Dataset;
use crate::error::{Result, StatsError};
use crate::validate;

/// A dynamically typed input value.
///
/// Use this when the shape of the input is only known at runtime, e.g. when
/// it was deserialized from JSON or handed over by a foreign caller. Only a
/// [Value::List] of finite [Value::Number]s passes validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    // Last, so untagged deserialization tries the other shapes first.
    Null,
}

impl Value {
    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Number(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "{:?}", value),
            Value::List(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl Dataset for [Value] {
    fn numbers(&self) -> Result<Cow<'_, [f64]>> {
        let numbers = self
            .iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Number(value) => validate::check_finite(index, *value),
                other => Err(validate::reject(StatsError::InvalidElement {
                    index,
                    found: other.to_string(),
                })),
            })
            .collect::<Result<Vec<_>>>()?;
        validate::check_non_empty(numbers).map(Cow::Owned)
    }
}

impl Dataset for Value {
    fn numbers(&self) -> Result<Cow<'_, [f64]>> {
        match self {
            Value::List(elements) => elements.numbers(),
            other => Err(validate::reject(StatsError::NotASequence {
                found: other.kind(),
            })),
        }
    }
}
