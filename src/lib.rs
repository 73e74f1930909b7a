// src/lib.rs

//! menubot library: campus cafeteria menu scraping and Slack notification.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
