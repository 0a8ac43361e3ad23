mod telegram;

use async_trait::async_trait;

use crate::types::BotError;

pub use telegram::TelegramNotifier;

/// Outbound chat channel used to report status changes and failures.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError>;
}
