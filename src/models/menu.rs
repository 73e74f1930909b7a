// src/models/menu.rs

//! Menu data structures.

use serde::{Deserialize, Serialize};

/// A single menu entry extracted from a cafeteria page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Dish name (trimmed, first line only, asterisks stripped)
    pub name: String,

    /// Display price, e.g. "6,200원"
    pub price: String,

    /// Absolute image URL; `None` for sources without item images
    pub image_url: Option<String>,
}

/// One cafeteria's extracted menu for the current run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuSource {
    /// Display title, e.g. "신소재공학관 7층"
    pub title: String,

    /// Human-facing page URL, used for the Slack link button
    pub url: String,

    /// Extracted items in document order
    pub items: Vec<MenuItem>,
}
