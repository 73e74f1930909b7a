// src/main.rs

//! menubot: campus cafeteria menu notifier.
//!
//! Fetches today's menus from the configured cafeteria pages and posts
//! them to a Slack webhook. Runs once and exits; scheduling is external
//! (cron or similar). Takes no arguments.

use std::env;

use chrono::Local;
use menubot::error::{AppError, Result};
use menubot::models::Config;
use menubot::pipeline;
use menubot::services::fetch;

/// Initialize logging from RUST_LOG, defaulting to info.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    log::info!("menubot starting...");

    let config = Config::load_or_default("data/config.toml");
    config.validate()?;

    let webhook_url = env::var(&config.slack.webhook_env).map_err(|_| {
        AppError::config(format!(
            "Environment variable {} is not set",
            config.slack.webhook_env
        ))
    })?;

    let client = fetch::create_client(&config.http)?;
    let today = Local::now().date_naive();

    pipeline::run(&config, &client, &webhook_url, today).await?;

    log::info!("Done!");

    Ok(())
}
