use serde_json::Value;
use tracing::{error, warn};

use crate::types::BotError;

/// Review states reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken for review by the reviewer.",
            Self::Rejected => "The work has been reviewed: the reviewer has comments.",
        }
    }
}

/// Turn one homework record into the notification text.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let Some(name) = non_empty_str(homework, "homework_name") else {
        warn!("Homework name is missing");
        return Err(BotError::MissingName);
    };

    let Some(code) = non_empty_str(homework, "status") else {
        error!(homework = name, "Homework status is missing");
        return Err(BotError::MissingStatus);
    };

    let Some(status) = HomeworkStatus::from_code(code) else {
        error!(homework = name, status = code, "Unknown homework status");
        return Err(BotError::UnknownStatus(code.to_string()));
    };

    Ok(format!(
        "Changed review status of \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}
