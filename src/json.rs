//! JSON interop for [`Value`] via serde_json.
//!
//! Canonical output rules: sorted keys (the `BTreeMap` in both value
//! types already guarantees this), integral numbers without a decimal
//! point, non-finite numbers rendered as null.

use thiserror::Error;

use crate::value::Value;

/// The crate's only fallible surface. Everything inside the matcher
/// and the rewrite drivers degrades to non-matching instead of
/// raising.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON document into a [`Value`].
pub fn from_json_str(input: &str) -> Result<Value, JsonError> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;
    Ok(Value::from(parsed))
}

/// Serialize to compact canonical JSON.
pub fn to_json_string(value: &Value) -> String {
    serde_json::Value::from(value.clone()).to_string()
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                // arbitrary-precision numbers are out of scope
                None => Value::Null,
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> serde_json::Value {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => {
                // Integral floats render without a decimal point.
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    serde_json::Value::from(n as i64)
                } else {
                    // from_f64 rejects NaN/infinity; those become null.
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(members) => serde_json::Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
