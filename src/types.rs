use std::error::Error as StdError;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("required environment variable {0} is missing")]
    ConfigMissing(&'static str),

    #[error("endpoint {url} returned {status}")]
    ConnectionFailure {
        url: String,
        status: StatusCode,
        headers: HeaderMap,
    },

    #[error("request failed: {}", describe(.0))]
    SystemFault(#[from] reqwest::Error),

    #[error("unexpected response type: {0}")]
    TypeMismatch(String),

    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("homework name is missing from the response")]
    MissingName,

    #[error("homework status is missing from the response")]
    MissingStatus,

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error("message delivery failed: {0}")]
    Delivery(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Render an error together with its `source()` chain, joined by `": "`.
/// reqwest and hyper keep the actual cause (refused, timeout, decode
/// position) in the chain rather than in the top-level message.
pub fn describe(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
