//! Remote JSON endpoint source

use log::*;
use std::time::Duration;

use super::{Quote, QuoteSource, SourceError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the quote collection with a single HTTP GET to a fixed URL.
///
/// There is no retry policy: any failure is reported once and the caller
/// decides what to show instead.
pub struct RemoteSource {
    url: String,
}

impl RemoteSource {
    /// Creates a source fetching from the given URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    fn err(&self, msg: String) -> SourceError {
        SourceError {
            origin: Some(self.url.clone()),
            msg,
        }
    }
}

impl QuoteSource for RemoteSource {
    fn load(&self) -> Result<Vec<Quote>, SourceError> {
        debug!("fetching quotes from {}", self.url);

        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()
            .map_err(|e| self.err(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| self.err(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.err(format!("unexpected status: {}", response.status())));
        }

        let body = response.text().map_err(|e| self.err(e.to_string()))?;

        serde_json::from_str::<Vec<Quote>>(&body).map_err(|e| self.err(e.to_string()))
    }
}
