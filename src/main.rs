mod config;
mod dedup;
mod homework_client;
mod logging;
mod notifier;
mod poller;
#[cfg(test)]
mod test_support;
mod types;

use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};

use crate::config::Config;
use crate::homework_client::HomeworkClient;
use crate::notifier::TelegramNotifier;
use crate::poller::Poller;
use crate::types::BotError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let log_file = Config::log_file_from_env();
    if let Err(err) = logging::init(&log_file) {
        eprintln!("Failed to open log file {}: {err}", log_file.display());
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Homework status bot stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BotError> {
    let config = Config::from_env()?;
    let source = HomeworkClient::new(&config)?;
    let notifier = TelegramNotifier::new(&config)?;

    let mut poller = Poller::new(source, notifier, &config, Utc::now().timestamp());
    poller.run().await;

    info!(watermark = poller.watermark(), "Homework status bot stopped");
    Ok(())
}
