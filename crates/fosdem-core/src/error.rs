//! Error types for the FOSDEM schedule scraper.
//!
//! A failed fetch (transport error or non-2xx status) surfaces as a typed
//! error rather than terminating the process; callers decide whether the
//! run ends there.

use thiserror::Error;

/// Error type for schedule scraping operations
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("status code error: {status} for {url}")]
    StatusError { status: u16, url: String },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),
}

/// Result type alias for schedule scraping operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
