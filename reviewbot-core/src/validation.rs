//! Response validation and message rendering
//!
//! The review API is consumed as untyped JSON first so that every way the
//! body can be wrong maps onto a specific [`ValidationError`] instead of a
//! generic deserialization failure. Checks run in a fixed order and stop at
//! the first problem.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{HomeworkRecord, HomeworkStatus, HomeworkStatuses};

/// Reasons a review API response or homework record is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value has the wrong JSON type
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// The API reported an error inside a successful response
    #[error("Review API reported an error: {0}")]
    Remote(String),

    /// A required key is absent
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// Status is not in the verdict table
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}

/// Checks a parsed response body and extracts the homework list
///
/// An empty `homeworks` array is valid. A missing `current_date` is
/// reported as `None` so the caller decides how to treat the cursor.
pub fn check_response(response: &Value) -> Result<HomeworkStatuses, ValidationError> {
    let body = response.as_object().ok_or_else(|| {
        ValidationError::Shape(format!("expected an object, got {}", type_name(response)))
    })?;

    if let Some(message) = remote_error(body) {
        return Err(ValidationError::Remote(message));
    }

    let homeworks = body
        .get("homeworks")
        .ok_or(ValidationError::MissingField("homeworks"))?;

    let entries = homeworks.as_array().ok_or_else(|| {
        ValidationError::Shape(format!(
            "'homeworks' must be an array, got {}",
            type_name(homeworks)
        ))
    })?;

    for entry in entries {
        check_homework(entry)?;
    }

    let current_date = match body.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or_else(|| {
            ValidationError::Shape(format!(
                "'current_date' must be an integer, got {}",
                type_name(value)
            ))
        })?),
    };

    let homeworks = entries
        .iter()
        .map(|entry| {
            serde_json::from_value::<HomeworkRecord>(entry.clone())
                .map_err(|e| ValidationError::Shape(format!("invalid homework record: {}", e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HomeworkStatuses {
        homeworks,
        current_date,
    })
}

/// Renders the notification text for one homework
pub fn render_message(homework: &HomeworkRecord) -> Result<String, ValidationError> {
    let (name, status) = homework.name_and_status()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn check_homework(entry: &Value) -> Result<(), ValidationError> {
    let record = entry.as_object().ok_or_else(|| {
        ValidationError::Shape(format!(
            "homework entry must be an object, got {}",
            type_name(entry)
        ))
    })?;

    match record.get("status") {
        None => Err(ValidationError::MissingField("status")),
        Some(Value::String(status)) => status.parse::<HomeworkStatus>().map(|_| ()),
        Some(other) => Err(ValidationError::UnknownStatus(other.to_string())),
    }
}

/// Extracts an error the API embedded in the body
///
/// Besides an explicit `error` key, the review API answers rejected
/// credentials with `{"code": ..., "message": ...}`.
fn remote_error(body: &Map<String, Value>) -> Option<String> {
    if let Some(error) = body.get("error") {
        return Some(describe(error));
    }

    let code = body.get("code")?;
    match body.get("message") {
        Some(message) => Some(format!("{} ({})", describe(message), describe(code))),
        None => Some(describe(code)),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
