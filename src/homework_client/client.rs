use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::Config;
use crate::types::{describe, BotError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw homework status answers, keyed by a watermark timestamp.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, BotError>;
}

#[derive(Clone)]
pub struct HomeworkClient {
    http: Client,
    endpoint: String,
    token: String,
}

#[derive(Serialize)]
struct StatusQuery {
    from_date: i64,
}

impl HomeworkClient {
    pub fn new(config: &Config) -> Result<Self, BotError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BotError::SystemFault)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }
}

#[async_trait]
impl StatusSource for HomeworkClient {
    /// Single GET against the status endpoint. No retries here; the poll
    /// loop re-invokes on its own schedule.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        let query = StatusQuery { from_date };
        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&query)
            .send()
            .await
            .map_err(|err| {
                error!(endpoint = %self.endpoint, error = %describe(&err), "Status API request failed");
                BotError::SystemFault(err)
            })?;

        if response.status() != StatusCode::OK {
            return Err(BotError::ConnectionFailure {
                url: response.url().to_string(),
                status: response.status(),
                headers: response.headers().clone(),
            });
        }

        debug!(from_date, "Status API answered");
        response.json::<Value>().await.map_err(BotError::SystemFault)
    }
}
