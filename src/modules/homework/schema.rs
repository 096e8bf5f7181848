use serde_json::Value;

use crate::modules::homework::model::{HomeworkRecord, StatusUpdate};

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("response is missing the '{key}' key")]
    MissingKey { key: String },
    #[error("'{key}' should be {expected}, got {actual}")]
    WrongType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Some legacy deployments wrap the statuses object in a single-element
/// array. Unwrap that shape here so validation only ever sees the candidate
/// object itself.
pub fn normalize_response(raw: Value) -> Value {
    match raw {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        other => other,
    }
}

/// Verify the decoded payload against the documented statuses shape and
/// produce the typed update. Extra keys are ignored.
pub fn check_response(response: &Value) -> Result<StatusUpdate, ValidationError> {
    let homeworks = require_key(response, "homeworks")?;
    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| wrong_type("homeworks", "an array", homeworks))?;

    let current_date = require_key(response, "current_date")?;
    let current_date = current_date
        .as_i64()
        .ok_or_else(|| wrong_type("current_date", "an integer", current_date))?;

    let homeworks = homeworks
        .iter()
        .map(check_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StatusUpdate {
        homeworks,
        current_date,
    })
}

fn check_record(record: &Value) -> Result<HomeworkRecord, ValidationError> {
    let name = require_key(record, "homework_name")?;
    let name = name
        .as_str()
        .ok_or_else(|| wrong_type("homework_name", "a string", name))?;

    let status = require_key(record, "status")?;
    let status = status
        .as_str()
        .ok_or_else(|| wrong_type("status", "a string", status))?;

    Ok(HomeworkRecord {
        homework_name: name.to_string(),
        status: status.to_string(),
    })
}

fn require_key<'a>(value: &'a Value, key: &str) -> Result<&'a Value, ValidationError> {
    value.get(key).ok_or_else(|| ValidationError::MissingKey {
        key: key.to_string(),
    })
}

fn wrong_type(key: &str, expected: &'static str, actual: &Value) -> ValidationError {
    ValidationError::WrongType {
        key: key.to_string(),
        expected,
        actual: json_type_name(actual),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
