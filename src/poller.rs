use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::dedup::SentMessages;
use crate::homework_client::{check_response, parse_status, StatusSource};
use crate::notifier::Notifier;
use crate::types::BotError;

/// What a single poll cycle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Notified,
    Suppressed,
    NoHomework,
    Failed,
}

/// Polls the status source, turns the newest homework into a message and
/// forwards it through the notifier, skipping texts already sent.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    chat_id: String,
    retry_period: Duration,
    watermark: i64,
    sent: SentMessages,
}

impl<S, N> Poller<S, N>
where
    S: StatusSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, config: &Config, watermark: i64) -> Self {
        Self {
            source,
            notifier,
            chat_id: config.telegram_chat_id.clone(),
            retry_period: config.retry_period,
            watermark,
            sent: SentMessages::new(config.sent_history),
        }
    }

    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    /// Run until Ctrl-C is received.
    pub async fn run(&mut self) {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!(error = %err, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await;
    }

    /// Cycle forever, sleeping `retry_period` after every cycle regardless of
    /// its outcome. Only `shutdown` completing ends the loop.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(
            watermark = self.watermark,
            retry_secs = self.retry_period.as_secs(),
            "Polling started"
        );

        loop {
            let outcome = self.run_cycle().await;
            debug!(?outcome, watermark = self.watermark, "Cycle finished");

            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poller");
                    break;
                }
            }
        }
    }

    /// One fetch/validate/dispatch pass. Every stage error ends up here.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = format!("System fault: {err}");
                error!(error = ?err, "{message}");
                if let BotError::ConnectionFailure { headers, .. } = &err {
                    debug!(?headers, "Status API failure headers");
                }
                self.notify(message).await;
                CycleOutcome::Failed
            }
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome, BotError> {
        let response = self.source.fetch_statuses(self.watermark).await?;
        let answer = check_response(response)?;

        let outcome = match answer.homeworks.first() {
            Some(homework) => {
                let message = parse_status(homework)?;
                if self.notify(message).await {
                    CycleOutcome::Notified
                } else {
                    CycleOutcome::Suppressed
                }
            }
            None => {
                debug!("No homework information in the answer");
                CycleOutcome::NoHomework
            }
        };

        self.watermark = answer.current_date;
        Ok(outcome)
    }

    /// Deliver `message` unless it was already sent. Returns whether a
    /// delivery was attempted. Delivery failures are logged and swallowed.
    async fn notify(&mut self, message: String) -> bool {
        if self.sent.contains(&message) {
            debug!(message = %message, "Message already sent, skipping");
            return false;
        }

        match self.notifier.send_message(&self.chat_id, &message).await {
            Ok(()) => debug!(message = %message, "Message sent"),
            Err(err) => error!(error = %err, "Failed to send message"),
        }

        self.sent.record(message);
        debug!(history = self.sent.len(), "Recorded sent message");
        true
    }
}
