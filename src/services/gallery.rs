// src/services/gallery.rs

//! Static menu extractor.
//!
//! Parses the thumbnail-gallery markup used by the campus cafeteria pages:
//! each `.thumbnails` container holds one cafeteria line, with `li` entries
//! carrying an `h3` name, an `img` thumbnail and a `.price` element.

use std::sync::OnceLock;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::MenuItem;
use crate::utils::resolve_url;

fn gallery_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".thumbnails").expect("valid selector"))
}

fn item_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("li").expect("valid selector"))
}

fn name_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("h3").expect("valid selector"))
}

fn image_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("img").expect("valid selector"))
}

fn price_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".price").expect("valid selector"))
}

/// Scraper for static gallery-style menu pages.
pub struct GalleryScraper {
    client: Client,
}

impl GalleryScraper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch a menu page and extract items from the gallery at `gallery_index`.
    ///
    /// Relative image sources are resolved against the page URL so the
    /// Slack image accessories get absolute URLs.
    pub async fn scrape(&self, url: &str, gallery_index: usize) -> Result<Vec<MenuItem>> {
        let html = super::fetch::get_text(&self.client, url).await?;
        let mut items = parse_gallery(&html, gallery_index);

        if let Ok(base) = Url::parse(url) {
            for item in &mut items {
                if let Some(src) = item.image_url.take() {
                    item.image_url = Some(resolve_url(&base, &src));
                }
            }
        }
        Ok(items)
    }
}

/// Extract menu items from the gallery at `gallery_index` (0-based).
///
/// A page with fewer galleries than `gallery_index + 1` yields an empty
/// list; a missing gallery is a "not found" result, not an error.
pub fn parse_gallery(html: &str, gallery_index: usize) -> Vec<MenuItem> {
    let document = Html::parse_document(html);

    let Some(gallery) = document.select(gallery_selector()).nth(gallery_index) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for entry in gallery.select(item_selector()) {
        let name = entry
            .select(name_selector())
            .next()
            .map(|h| normalize_name(&h.text().collect::<String>()))
            .unwrap_or_default();

        let image_url = entry
            .select(image_selector())
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
            .filter(|src| !src.is_empty());

        let price = entry
            .select(price_selector())
            .next()
            .map(|p| p.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        // Entries missing any field are decorations or sold-out slots
        if name.is_empty() || price.is_empty() {
            continue;
        }
        let Some(image_url) = image_url else {
            continue;
        };

        items.push(MenuItem {
            name,
            price,
            image_url: Some(image_url),
        });
    }
    items
}

/// Normalize a dish name: trim, keep the first line, strip `*` markers.
fn normalize_name(raw: &str) -> String {
    raw.trim()
        .lines()
        .next()
        .unwrap_or("")
        .replace('*', "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GALLERIES: &str = r#"
        <html><body>
          <ul class="thumbnails">
            <li>
              <h3>  *Kimchi Stew*
extra line</h3>
              <img src="/images/kimchi.jpg">
              <span class="price"> 6,000원 </span>
            </li>
            <li>
              <h3>No Image Special</h3>
              <span class="price">5,000원</span>
            </li>
            <li>
              <h3>No Price Special</h3>
              <img src="/images/mystery.jpg">
            </li>
          </ul>
          <ul class="thumbnails">
            <li>
              <h3>Bibimbap</h3>
              <img src="/images/bibimbap.jpg">
              <span class="price">5,500원</span>
            </li>
          </ul>
        </body></html>
    "#;

    #[test]
    fn extracts_complete_items_only() {
        let items = parse_gallery(TWO_GALLERIES, 0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Kimchi Stew");
        assert_eq!(items[0].price, "6,000원");
        assert_eq!(items[0].image_url.as_deref(), Some("/images/kimchi.jpg"));
    }

    #[test]
    fn normalizes_names() {
        assert_eq!(normalize_name("  *Kimchi Stew*\nextra line"), "Kimchi Stew");
        assert_eq!(normalize_name("Plain"), "Plain");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn selects_gallery_by_index() {
        let items = parse_gallery(TWO_GALLERIES, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bibimbap");
    }

    #[test]
    fn out_of_range_gallery_yields_empty() {
        assert!(parse_gallery(TWO_GALLERIES, 2).is_empty());
        assert!(parse_gallery("<html><body></body></html>", 0).is_empty());
    }

    #[test]
    fn preserves_document_order() {
        let html = r#"
            <ul class="thumbnails">
              <li><h3>First</h3><img src="a.jpg"><p class="price">1,000원</p></li>
              <li><h3>Second</h3><img src="b.jpg"><p class="price">2,000원</p></li>
            </ul>
        "#;
        let names: Vec<_> = parse_gallery(html, 0)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
