// src/services/bistro.rs

//! Dynamic (AJAX) menu extractor.
//!
//! The dormitory cafeterias publish their weekly menu through a
//! form-encoded POST endpoint returning JSON. Entries are tagged with a
//! `BISTRO_SEQ` category id; the payload carries no prices, so the
//! display price comes from the source configuration.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::MenuItem;
use crate::services::week::WeekDates;

/// Top-level shape of the weekly menu payload.
#[derive(Debug, Deserialize)]
struct CarteResponse {
    data: CarteData,
}

#[derive(Debug, Deserialize)]
struct CarteData {
    carte: Vec<CarteEntry>,
}

/// One menu entry from the payload. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CarteEntry {
    #[serde(rename = "BISTRO_SEQ")]
    bistro_seq: i64,

    #[serde(rename = "CARTE_CONT")]
    carte_cont: String,
}

/// Scraper for the weekly-carte AJAX endpoint.
pub struct BistroScraper {
    client: Client,
}

impl BistroScraper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch this week's menu and keep entries for `category`.
    ///
    /// `today` is injected so week boundaries are reproducible in tests.
    pub async fn scrape(
        &self,
        endpoint: &str,
        category: i64,
        price: &str,
        today: NaiveDate,
    ) -> Result<Vec<MenuItem>> {
        let week = WeekDates::compute(today);
        let fields = [
            ("startOfWeek", week.start_of_week),
            ("endOfWeek", week.end_of_week),
            ("mode", "next".to_string()),
            ("defaultDate", week.default_date),
            ("currentDate", week.current_date),
        ];

        let body = super::fetch::post_form(&self.client, endpoint, &fields).await?;
        parse_carte(&body, category, price)
    }
}

/// Decode the weekly payload and keep entries matching `category`.
///
/// A payload that is not JSON, or that lacks the `data.carte` shape,
/// fails with a parse error rather than silently yielding nothing.
pub fn parse_carte(body: &str, category: i64, price: &str) -> Result<Vec<MenuItem>> {
    let response: CarteResponse =
        serde_json::from_str(body).map_err(|e| AppError::parse("weekly carte payload", e))?;

    let items = response
        .data
        .carte
        .into_iter()
        .filter(|entry| entry.bistro_seq == category)
        .map(|entry| MenuItem {
            name: entry.carte_cont,
            price: price.to_string(),
            image_url: None,
        })
        .collect();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "data": {
            "carte": [
                {"BISTRO_SEQ": 1, "CARTE_CONT": "Bibimbap", "CARTE_SEQ": 10},
                {"BISTRO_SEQ": 2, "CARTE_CONT": "Udon", "CARTE_SEQ": 11},
                {"BISTRO_SEQ": 1, "CARTE_CONT": "Kimchi Stew", "CARTE_SEQ": 12}
            ]
        }
    }"#;

    #[test]
    fn keeps_matching_category_with_configured_price() {
        let items = parse_carte(PAYLOAD, 1, "6,200원").unwrap();
        assert_eq!(
            items,
            vec![
                MenuItem {
                    name: "Bibimbap".to_string(),
                    price: "6,200원".to_string(),
                    image_url: None,
                },
                MenuItem {
                    name: "Kimchi Stew".to_string(),
                    price: "6,200원".to_string(),
                    image_url: None,
                },
            ]
        );
    }

    #[test]
    fn other_category_filters_out_non_matching_entries() {
        let items = parse_carte(PAYLOAD, 3, "5,200원").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_carte("not json", 1, "6,200원").unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
    }

    #[test]
    fn missing_shape_is_a_parse_error() {
        let err = parse_carte(r#"{"data": {}}"#, 1, "6,200원").unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
    }
}
