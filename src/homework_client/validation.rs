use serde_json::Value;

use crate::types::BotError;

/// A status answer whose shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiAnswer {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

/// Check the answer shape. Conditions are checked in a fixed order and only
/// the first violation is reported.
pub fn check_response(response: Value) -> Result<ApiAnswer, BotError> {
    let mut fields = match response {
        Value::Object(fields) => fields,
        other => {
            return Err(BotError::TypeMismatch(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            )))
        }
    };

    let homeworks = fields
        .remove("homeworks")
        .ok_or(BotError::MissingField("homeworks"))?;
    let current_date = fields
        .remove("current_date")
        .ok_or(BotError::MissingField("current_date"))?;

    let homeworks = match homeworks {
        Value::Array(items) => items,
        other => {
            return Err(BotError::TypeMismatch(format!(
                "`homeworks` must be an array, got {}",
                kind_of(&other)
            )))
        }
    };

    let current_date = current_date.as_i64().ok_or_else(|| {
        BotError::TypeMismatch(format!(
            "`current_date` must be an integer, got {}",
            kind_of(&current_date)
        ))
    })?;

    Ok(ApiAnswer {
        homeworks,
        current_date,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
