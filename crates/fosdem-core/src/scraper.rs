//! Main schedule scraper API.
//!
//! Combines the HTTP client with the schedule parser: one call fetches
//! the events page and returns the extracted events, sorted by start
//! time.

use crate::client::{ClientConfig, FosdemClient};
use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::parser::{parse_schedule, sort_by_start};
use crate::types::Event;

/// High-level scraper for the FOSDEM schedule
///
/// # Example
/// ```no_run
/// use fosdem_core::ScheduleScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ScheduleScraper::new()?;
///     let events = scraper.fetch_schedule().await?;
///     println!("{} events", events.len());
///     Ok(())
/// }
/// ```
pub struct ScheduleScraper {
    client: FosdemClient,
    config: ScheduleConfig,
}

impl ScheduleScraper {
    /// Create a scraper with the default FOSDEM 2021 configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ScheduleConfig::default())
    }

    /// Create a scraper with a custom schedule configuration.
    ///
    /// The HTTP client fetches from the configuration's base URL, which
    /// is how tests point the scraper at a local server.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ScheduleConfig) -> Result<Self> {
        let client = FosdemClient::with_config(ClientConfig {
            base_url: config.base_url.clone(),
            ..ClientConfig::default()
        })?;
        Ok(Self { client, config })
    }

    /// Create a scraper from a pre-configured client.
    pub fn with_client(client: FosdemClient, config: ScheduleConfig) -> Self {
        Self { client, config }
    }

    /// The active schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Fetch the schedule page and return its events, sorted by start time.
    ///
    /// # Errors
    /// - `ScheduleError::HttpError` / `ScheduleError::StatusError` - fetch failed
    /// - `ScheduleError::ParseError` - document could not be processed
    pub async fn fetch_schedule(&self) -> Result<Vec<Event>> {
        let html = self.client.fetch(&self.config.schedule_path).await?;
        let mut events = parse_schedule(&html, &self.config)?;
        sort_by_start(&mut events);
        Ok(events)
    }
}
