// src/services/mod.rs

//! Scraping and notification services.

pub mod bistro;
pub mod blocks;
pub mod fetch;
pub mod gallery;
pub mod slack;
pub mod week;

pub use bistro::BistroScraper;
pub use gallery::GalleryScraper;
pub use slack::SlackNotifier;
pub use week::WeekDates;
