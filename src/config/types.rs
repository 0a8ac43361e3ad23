use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_SENT_HISTORY: usize = 64;
pub const DEFAULT_LOG_FILE: &str = "main.log";

/// Immutable runtime configuration for the bot, built once at startup.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    pub sent_history: usize,
}

// Tokens stay out of Debug output so the config can be logged safely.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("sent_history", &self.sent_history)
            .finish_non_exhaustive()
    }
}

pub(super) fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}
