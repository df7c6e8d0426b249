//! FOSDEM Schedule Scraper Core Library
//!
//! This crate fetches the FOSDEM 2021 schedule events page and turns its
//! big events table into structured data.
//!
//! # Features
//! - Extract one [`Event`] per table row (section headers are skipped)
//! - Normalize relative links in every cell to absolute URLs
//! - Compute absolute start/end timestamps from the day marker and the
//!   `HH:MM` offset cells
//! - Render the sorted list as a static HTML page, or experimentally as
//!   Markdown or CSV

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, FosdemClient};
pub use config::ScheduleConfig;
pub use error::{Result, ScheduleError};
pub use export::ExportFormat;
pub use scraper::ScheduleScraper;
pub use types::Event;
