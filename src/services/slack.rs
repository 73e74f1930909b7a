// src/services/slack.rs

//! Slack webhook notifier.

use reqwest::Client;
use serde::Serialize;

use crate::error::Result;
use crate::services::blocks::Block;

/// Webhook request body: `{"blocks": [...]}`.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    blocks: &'a [Block],
}

/// Sends assembled block messages to an incoming webhook.
pub struct SlackNotifier {
    client: Client,
}

impl SlackNotifier {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// POST the blocks to the webhook and return the response status.
    ///
    /// Delivery failures are reported to the caller instead of being
    /// swallowed; a non-2xx status is returned as-is so the orchestrator
    /// can log it without aborting a run whose scraping already succeeded.
    pub async fn notify(&self, webhook_url: &str, blocks: &[Block]) -> Result<u16> {
        let response = self
            .client
            .post(webhook_url)
            .json(&WebhookPayload { blocks })
            .send()
            .await?;
        Ok(response.status().as_u16())
    }
}
