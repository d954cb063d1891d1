//! Quote source variants and the common loading contract
//!
//! Each source delivers the full quote collection in one call. Callers
//! treat any failure as "no quotes": the error is logged and an empty
//! deck is shown, never a crash.

#[cfg(test)]
use mockall::automock;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Default remote endpoint serving the quote catalog as a JSON list.
pub const DEFAULT_QUOTES_URL: &str =
    "https://raw.githubusercontent.com/Amrish-Sharma/fq_quotes/refs/heads/main/Quotes.json";

/// A single motivational quote record.
///
/// Field names follow the on-disk and remote JSON shape; `theme` is only
/// present in newer payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text itself.
    pub quote: String,
    /// Attribution line.
    pub author: String,
    /// Optional category tag carried by some payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Error produced when a quote source cannot deliver its records.
#[derive(Debug, Clone)]
pub struct SourceError {
    /// The file path or URL the source was reading, when known.
    pub origin: Option<String>,
    /// Human readable failure description.
    pub msg: String,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let origin = self.origin.clone().unwrap_or(String::from("unknown"));
        write!(f, "quote source error: origin {origin}, msg: {0}", self.msg)
    }
}

impl Error for SourceError {}

/// Common interface implemented by every quote source variant.
#[cfg_attr(test, automock)]
pub trait QuoteSource: Send + Sync {
    /// Loads the full quote collection. May serve a local cache.
    fn load(&self) -> Result<Vec<Quote>, SourceError>;

    /// Reloads the collection bypassing any cache layer. Sources without
    /// a cache treat this as a plain load.
    fn refresh(&self) -> Result<Vec<Quote>, SourceError> {
        self.load()
    }
}

pub mod asset;
pub mod builtin;
pub mod cached;
pub mod remote;
