use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::types::{describe, BotError};

use super::Notifier;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram Bot API `sendMessage` sink.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: Client,
    api_url: String,
    token: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Result<Self, BotError> {
        let http = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(BotError::SystemFault)?;

        Ok(Self {
            http,
            api_url: config.telegram_api_url.clone(),
            token: config.telegram_token.clone(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            self.token,
            method
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        let body = SendMessageRequest { chat_id, text };
        // The request URL embeds the bot token, so it is stripped from errors.
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|err| BotError::Delivery(describe(&err.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            // Error pages from proxies are not always JSON.
            let description = response
                .text()
                .await
                .ok()
                .and_then(|raw| serde_json::from_str::<TelegramReply>(&raw).ok())
                .and_then(|reply| reply.description)
                .unwrap_or_else(|| "no description".to_string());
            return Err(BotError::Delivery(format!(
                "Telegram returned {status}: {description}"
            )));
        }

        let reply = response
            .json::<TelegramReply>()
            .await
            .map_err(|err| BotError::Delivery(describe(&err.without_url())))?;

        if !reply.ok {
            return Err(BotError::Delivery(format!(
                "Telegram rejected the message: {}",
                reply.description.unwrap_or_else(|| "no description".to_string())
            )));
        }

        Ok(())
    }
}
