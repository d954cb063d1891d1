//! Cache decorator for quote sources
//!
//! Wraps any [`QuoteSource`] with a local JSON cache: a fresh cache is
//! served without touching the inner source; a stale or missing cache
//! triggers an inner load and a cache rewrite; an inner failure falls
//! back to whatever cache exists, regardless of age.

use log::*;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::{Quote, QuoteSource, SourceError};

/// File name of the cached quote payload inside the cache directory.
pub const CACHE_FILE_NAME: &str = "quotes_cache.json";
/// File name of the sidecar holding the last-update timestamp (unix ms).
pub const CACHE_STAMP_NAME: &str = "quotes_cache.stamp";
/// Default cache lifetime before the inner source is consulted again.
pub const CACHE_EXPIRY: Duration = Duration::from_secs(24 * 60 * 60);

/// Caching wrapper around another quote source.
pub struct CachedSource<S: QuoteSource> {
    inner: S,
    dir: PathBuf,
    ttl: Duration,
}

impl<S: QuoteSource> CachedSource<S> {
    /// Creates a cache layer storing its files under `dir` with the given
    /// time-to-live.
    pub fn new(inner: S, dir: PathBuf, ttl: Duration) -> Self {
        Self { inner, dir, ttl }
    }

    fn cache_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE_NAME)
    }

    fn stamp_path(&self) -> PathBuf {
        self.dir.join(CACHE_STAMP_NAME)
    }

    fn is_fresh(&self) -> bool {
        let raw = match fs::read_to_string(self.stamp_path()) {
            Ok(raw) => raw,
            Err(_) => return false,
        };

        let stamped_ms = match raw.trim().parse::<u128>() {
            Ok(ms) => ms,
            Err(_) => return false,
        };

        let now_ms = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis(),
            Err(_) => return false,
        };

        now_ms.saturating_sub(stamped_ms) < self.ttl.as_millis()
    }

    fn read_cache(&self) -> Result<Vec<Quote>, SourceError> {
        let path = self.cache_path();

        let raw = fs::read_to_string(&path).map_err(|e| SourceError {
            origin: Some(path.display().to_string()),
            msg: e.to_string(),
        })?;

        serde_json::from_str::<Vec<Quote>>(&raw).map_err(|e| SourceError {
            origin: Some(path.display().to_string()),
            msg: e.to_string(),
        })
    }

    // best effort - a cache write failure never fails the load
    fn write_cache(&self, quotes: &Vec<Quote>) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!("unable to create cache dir: {e}");
            return;
        }

        match serde_json::to_string(quotes) {
            Ok(serialized) => {
                if let Err(e) = fs::write(self.cache_path(), serialized) {
                    warn!("unable to write quote cache: {e}");
                    return;
                }
            }
            Err(e) => {
                warn!("unable to serialize quote cache: {e}");
                return;
            }
        }

        if let Ok(now) = SystemTime::now().duration_since(UNIX_EPOCH) {
            if let Err(e) = fs::write(self.stamp_path(), now.as_millis().to_string()) {
                warn!("unable to write cache stamp: {e}");
            }
        }
    }

    fn load_inner_or_fallback(&self) -> Result<Vec<Quote>, SourceError> {
        match self.inner.load() {
            Ok(quotes) if !quotes.is_empty() => {
                self.write_cache(&quotes);
                Ok(quotes)
            }
            Ok(_) => {
                debug!("inner source returned no quotes, trying cache");
                self.read_cache().or(Ok(Vec::new()))
            }
            Err(e) => {
                warn!("inner source failed ({e}), falling back to cache");
                self.read_cache().map_err(|_| e)
            }
        }
    }
}

impl<S: QuoteSource> QuoteSource for CachedSource<S> {
    fn load(&self) -> Result<Vec<Quote>, SourceError> {
        if self.is_fresh() {
            if let Ok(quotes) = self.read_cache() {
                if !quotes.is_empty() {
                    debug!("serving {} quotes from cache", quotes.len());
                    return Ok(quotes);
                }
            }
        }

        self.load_inner_or_fallback()
    }

    fn refresh(&self) -> Result<Vec<Quote>, SourceError> {
        self.load_inner_or_fallback()
    }
}
