// src/models/mod.rs

//! Domain models for the menu notifier.

mod config;
mod menu;

// Re-export all public types
pub use config::{Config, HttpConfig, SlackConfig, SourceConfig};
pub use menu::{MenuItem, MenuSource};
