// src/services/fetch.rs

//! HTTP fetch adapter.
//!
//! Thin wrapper around `reqwest` shared by both scrapers: plain GET for
//! static pages and form-encoded POST for the AJAX menu endpoint.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HOST, REFERER};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page with GET and return the raw body text.
pub async fn get_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    ensure_success(url, response.status().as_u16())?;
    Ok(response.text().await?)
}

/// POST a form-encoded body and return the raw response text.
///
/// `Host` and `Referer` are pinned to the endpoint origin; the menu
/// endpoint rejects requests without them.
pub async fn post_form(client: &Client, url: &str, fields: &[(&str, String)]) -> Result<String> {
    let origin = Url::parse(url).map_err(|e| AppError::parse(url, e))?;
    let host = origin
        .host_str()
        .ok_or_else(|| AppError::parse(url, "endpoint URL has no host"))?
        .to_string();
    let referer = format!("{}://{}/", origin.scheme(), host);

    let response = client
        .post(url)
        .header(HOST, host)
        .header(REFERER, referer)
        .form(fields)
        .send()
        .await?;
    ensure_success(url, response.status().as_u16())?;
    Ok(response.text().await?)
}

/// Reject non-2xx responses with a status error.
fn ensure_success(url: &str, status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(AppError::status(url, status))
}
