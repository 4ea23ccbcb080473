use serde_json::Value;

use homework_common::error::PollError;
use homework_common::types::HomeworkRecord;

/// Result of validating a status API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckedResponse {
    /// The most recent homework record plus the server time to resume from.
    Latest {
        homework: HomeworkRecord,
        current_date: i64,
    },
    /// `homeworks` was empty: nothing changed since the last query.
    NoRecentChanges,
}

/// Validate a decoded API response and extract the current homework record.
///
/// The API returns records newest first, so only the first one is used.
pub fn check_response(response: &Value) -> Result<CheckedResponse, PollError> {
    let object = response.as_object().ok_or_else(|| {
        PollError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_type(response)
        ))
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;

    let list = match homeworks {
        Value::Array(list) => list,
        Value::Object(_) => {
            return Err(PollError::UnexpectedShape(
                "`homeworks` is an object, expected an array".to_string(),
            ));
        }
        other => {
            return Err(PollError::UnexpectedShape(format!(
                "`homeworks` is {}, expected an array",
                json_type(other)
            )));
        }
    };

    let Some(first) = list.first() else {
        return Ok(CheckedResponse::NoRecentChanges);
    };

    if !first.is_object() {
        return Err(PollError::MalformedResponse(format!(
            "homework record is {}, expected an object",
            json_type(first)
        )));
    }

    let homework: HomeworkRecord = serde_json::from_value(first.clone())
        .map_err(|e| PollError::MalformedResponse(format!("invalid homework record: {}", e)))?;

    let current_date = match object.get("current_date") {
        None => return Err(PollError::MissingField("current_date")),
        Some(value) => value.as_i64().ok_or_else(|| {
            PollError::MalformedResponse(format!(
                "`current_date` is {}, expected an integer",
                json_type(value)
            ))
        })?,
    };

    tracing::debug!(
        records = list.len(),
        current_date,
        "Validated homework status response"
    );

    Ok(CheckedResponse::Latest {
        homework,
        current_date,
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
