//! HTTP client for fosdem.org.
//!
//! One page, one GET. The schedule is fetched exactly once per run, so
//! there is no retry, backoff, or rate limiting here; a non-success
//! status is reported as a typed error and ends the run upstream.

use std::time::Duration;

use crate::config::FOSDEM_BASE_URL;
use crate::error::{Result, ScheduleError};

/// User-Agent sent with the schedule request
const USER_AGENT: &str = concat!("fosdem-schedule/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site to fetch from and to absolutize links against
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: FOSDEM_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the schedule page
pub struct FosdemClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL joined with the fetched path
    base_url: String,
}

impl FosdemClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch HTML content from a site path.
    ///
    /// # Arguments
    /// * `path` - Path relative to the base URL (e.g. "/2021/schedule/events/")
    ///
    /// # Errors
    /// - `ScheduleError::HttpError` - transport-level failure
    /// - `ScheduleError::StatusError` - server answered with a non-2xx status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching schedule page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::StatusError {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FosdemClient {
        FosdemClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://fosdem.org");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_creation() {
        assert!(FosdemClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2021/schedule/events/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let body = client.fetch("/2021/schedule/events/").await.unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch("/missing").await;
        match result {
            Err(ScheduleError::StatusError { status, .. }) => assert_eq!(status, 404),
            other => panic!("Expected StatusError, got {other:?}"),
        }
    }

    // A server error must surface immediately, with no second request.
    #[tokio::test]
    async fn test_fetch_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch("/2021/schedule/events/").await;
        match result {
            Err(ScheduleError::StatusError { status, .. }) => assert_eq!(status, 500),
            other => panic!("Expected StatusError, got {other:?}"),
        }
    }
}
