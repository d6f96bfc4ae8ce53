use serde_json::Value;

use crate::errors::TaskError;
use crate::store::{Namespace, Pipe};

/// Read a data value as a numeric series. `null` entries become `NaN`.
pub(super) fn read_series(pipe: &Pipe, key: &str) -> Result<Vec<f64>, TaskError> {
    let value = pipe.get(Namespace::Data, key).ok_or_else(|| TaskError::MissingValue {
        namespace: Namespace::Data,
        key: key.to_string(),
    })?;

    let items = value.as_array().ok_or_else(|| TaskError::InvalidValue {
        key: key.to_string(),
        reason: "expected an array of numbers".into(),
    })?;

    items
        .iter()
        .map(|item| match item {
            Value::Null => Ok(f64::NAN),
            other => other.as_f64().ok_or_else(|| TaskError::InvalidValue {
                key: key.to_string(),
                reason: format!("non-numeric element {}", other),
            }),
        })
        .collect()
}

/// Serialize a series, writing non-finite values as `null`
pub(super) fn series_value(series: &[f64]) -> Value {
    Value::Array(
        series
            .iter()
            .map(|&x| serde_json::Number::from_f64(x).map_or(Value::Null, Value::Number))
            .collect(),
    )
}
