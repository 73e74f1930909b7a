// src/pipeline/mod.rs

//! Menu notification pipeline.
//!
//! Runs once per invocation: scrape every configured source in order,
//! assemble the Slack message, send it. Any scrape failure aborts the
//! run before anything is sent; a delivery failure is logged but does
//! not fail the run, since the scrape itself already succeeded.

use chrono::NaiveDate;
use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, MenuSource, SourceConfig};
use crate::services::blocks::build_blocks;
use crate::services::{BistroScraper, GalleryScraper, SlackNotifier};

/// Message heading for the given day.
fn heading_for(today: NaiveDate) -> String {
    format!("{} 메뉴 정보", today.format("%Y.%m.%d"))
}

/// Scrape all configured sources in declaration order.
async fn collect_sources(
    config: &Config,
    client: &Client,
    today: NaiveDate,
) -> Result<Vec<MenuSource>> {
    let gallery = GalleryScraper::new(client.clone());
    let bistro = BistroScraper::new(client.clone());

    let mut menus = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        log::info!("Fetching menu for {}", source.title());

        let items = match source {
            SourceConfig::Gallery {
                url, gallery_index, ..
            } => gallery.scrape(url, *gallery_index).await,
            SourceConfig::Bistro {
                endpoint,
                category,
                price,
                ..
            } => bistro.scrape(endpoint, *category, price, today).await,
        }
        .inspect_err(|e| log::error!("Failed to fetch {}: {}", source.title(), e))?;

        log::info!("  {} items", items.len());
        menus.push(MenuSource {
            title: source.title().to_string(),
            url: source.url().to_string(),
            items,
        });
    }
    Ok(menus)
}

/// Run the full pipeline: scrape, build blocks, notify.
pub async fn run(
    config: &Config,
    client: &Client,
    webhook_url: &str,
    today: NaiveDate,
) -> Result<()> {
    let menus = collect_sources(config, client, today).await?;
    let total_items: usize = menus.iter().map(|m| m.items.len()).sum();
    log::info!(
        "Collected {} items from {} sources",
        total_items,
        menus.len()
    );

    let blocks = build_blocks(&menus, &heading_for(today));
    log::info!("Sending {} blocks to Slack", blocks.len());

    let notifier = SlackNotifier::new(client.clone());
    let status = notifier.notify(webhook_url, &blocks).await?;
    if (200..300).contains(&status) {
        log::info!("Menu message delivered");
    } else {
        log::warn!("Webhook responded with status {}", status);
    }

    Ok(())
}
