//! Blocking HTTP client for the roster endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent string for roster requests.
const USER_AGENT_VALUE: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Fetches the raw roster payload. One GET, no retries, no authentication.
pub struct RosterClient {
    client: Client,
}

impl RosterClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the response body.
    pub fn fetch(&self, url: &str) -> Result<String> {
        debug!(%url, "fetching roster");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}
