use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::types::BotError;

use super::types::{
    default_log_file, DEFAULT_ENDPOINT, DEFAULT_RETRY_PERIOD, DEFAULT_SENT_HISTORY,
    DEFAULT_TELEGRAM_API_URL,
};
use super::Config;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

impl Config {
    /// Load configuration from the process environment.
    /// Fails on the first required credential that is absent or blank.
    pub fn from_env() -> Result<Self, BotError> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            endpoint = %config.endpoint,
            retry_secs = config.retry_period.as_secs(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = required(&lookup, PRACTICUM_TOKEN)?;
        let telegram_token = required(&lookup, TELEGRAM_TOKEN)?;
        let telegram_chat_id = required(&lookup, TELEGRAM_CHAT_ID)?;

        let retry_secs = optional_parsed(&lookup, "RETRY_PERIOD", DEFAULT_RETRY_PERIOD.as_secs());
        let sent_history = optional_parsed(&lookup, "SENT_HISTORY_LIMIT", DEFAULT_SENT_HISTORY);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: optional(&lookup, "PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: optional(&lookup, "TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period: Duration::from_secs(retry_secs),
            sent_history,
        })
    }

    /// Path of the append-only log file. Read before anything else so that
    /// startup failures are logged too.
    pub fn log_file_from_env() -> PathBuf {
        optional(&|key: &str| env::var(key).ok(), "BOT_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_file)
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, BotError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, name) {
        Some(value) => Ok(value),
        None => {
            error!(severity = "CRITICAL", variable = name, "Missing required environment variable");
            Err(BotError::ConfigMissing(name))
        }
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn optional_parsed<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default + Copy,
{
    let Some(raw) = optional(lookup, name) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            warn!(variable = name, value = %raw, "Invalid value, using default");
            default
        }
    }
}
