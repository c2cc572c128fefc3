//! GIF lookup against third-party search APIs.
//!
//! Providers are tried in a fixed order (Giphy, then Tenor). Every call is
//! isolated: a provider that errors is logged and treated as having found
//! nothing, so one failing backend never hides results from the next.

use crate::{Error, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use std::time::Duration;

pub mod gallery;
pub mod giphy;
pub mod tenor;

pub use gallery::{
    fetch_card_images, fetch_card_images_blocking, fetch_category_gifs,
    fetch_category_gifs_blocking, fetch_first_matches, fetch_theme_cards, CategoryGif,
    THEME_GIFS_PER_PROVIDER,
};
pub use giphy::GiphyProvider;
pub use tenor::TenorProvider;

pub const GIPHY_BASE_URL: &str = "https://api.giphy.com";
pub const TENOR_BASE_URL: &str = "https://tenor.googleapis.com";

/// Environment variable holding the Giphy API key
pub const GIPHY_KEY_ENV: &str = "GIPHY_API_KEY";
/// Environment variable holding the Tenor API key
pub const TENOR_KEY_ENV: &str = "TENOR_API_KEY";

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gif {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// Configuration for the GIF providers
///
/// Only providers with an API key are used. Base URLs are configurable so
/// a local server can stand in for the real APIs.
#[derive(Debug, Clone)]
pub struct GifConfig {
    /// Giphy API key; `None` disables Giphy
    pub giphy_api_key: Option<String>,
    /// Tenor API key; `None` disables Tenor
    pub tenor_api_key: Option<String>,
    pub giphy_base_url: String,
    pub tenor_base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent sent with every request
    pub user_agent: String,
    /// Giphy `rating` parameter
    pub rating: String,
    /// Tenor `contentfilter` parameter
    pub content_filter: String,
    /// Maximum number of lookups in flight during gallery fetches
    pub concurrency: usize,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            giphy_api_key: None,
            tenor_api_key: None,
            giphy_base_url: GIPHY_BASE_URL.to_string(),
            tenor_base_url: TENOR_BASE_URL.to_string(),
            timeout_ms: 10_000,
            user_agent: format!("sigcard/{}", env!("CARGO_PKG_VERSION")),
            rating: "g".to_string(),
            content_filter: "medium".to_string(),
            concurrency: num_cpus::get(),
        }
    }
}

impl GifConfig {
    /// Defaults plus API keys from `GIPHY_API_KEY` / `TENOR_API_KEY`.
    /// Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            giphy_api_key: env_key(GIPHY_KEY_ENV),
            tenor_api_key: env_key(TENOR_KEY_ENV),
            ..Default::default()
        }
    }

    pub fn has_any_key(&self) -> bool {
        self.giphy_api_key.is_some() || self.tenor_api_key.is_some()
    }
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn build_client(config: &GifConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::NetworkError(format!("Failed to build HTTP client: {}", e)))
}

pub(crate) fn map_transport_error(err: reqwest::Error, timeout_ms: u64) -> Error {
    if err.is_timeout() {
        Error::Timeout(timeout_ms)
    } else {
        Error::NetworkError(err.to_string())
    }
}

/// A GIF search backend.
pub trait GifProvider: Send + Sync {
    /// Human-readable provider name used in logs and errors
    fn name(&self) -> &'static str;

    /// Return at most `limit` results for `query`.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Gif>>;
}

/// An ordered chain of providers.
pub struct GifSearch {
    providers: Vec<Box<dyn GifProvider>>,
}

impl GifSearch {
    pub fn new(providers: Vec<Box<dyn GifProvider>>) -> Self {
        Self { providers }
    }

    /// Giphy first, Tenor second; providers without a key are left out.
    pub fn from_config(config: &GifConfig) -> Result<Self> {
        let mut providers: Vec<Box<dyn GifProvider>> = Vec::new();
        if let Some(key) = &config.giphy_api_key {
            providers.push(Box::new(GiphyProvider::new(key.clone(), config)?));
        }
        if let Some(key) = &config.tenor_api_key {
            providers.push(Box::new(TenorProvider::new(key.clone(), config)?));
        }
        if providers.is_empty() {
            warn!("No API keys found for Giphy or Tenor; GIF lookups will return nothing");
        }
        Ok(Self::new(providers))
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The first GIF any provider finds, trying them in order and stopping at
    /// the first hit.
    pub fn first_match(&self, query: &str) -> Option<Gif> {
        if query.trim().is_empty() {
            return None;
        }
        for provider in &self.providers {
            match provider.search(query, 1) {
                Ok(gifs) => match gifs.into_iter().next() {
                    Some(gif) => return Some(gif),
                    None => debug!("{} had no result for '{}'", provider.name(), query),
                },
                Err(e) => warn!("{} failed for '{}': {}", provider.name(), query, e),
            }
        }
        None
    }

    /// Up to `limit` results. Each provider is asked only for what the
    /// previous ones did not supply; partial results survive later failures.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Gif> {
        let mut found = Vec::new();
        if query.trim().is_empty() {
            return found;
        }
        for provider in &self.providers {
            let remaining = limit.saturating_sub(found.len());
            if remaining == 0 {
                break;
            }
            match provider.search(query, remaining) {
                Ok(gifs) => {
                    debug!("{} returned {} results for '{}'", provider.name(), gifs.len(), query);
                    found.extend(gifs.into_iter().take(remaining));
                }
                Err(e) => warn!("{} failed for '{}': {}", provider.name(), query, e),
            }
        }
        found
    }

    /// Up to `per_provider` results from every provider, concatenated in
    /// provider order. Unlike [`search`](Self::search) later providers are
    /// always asked.
    pub fn collect_all(&self, query: &str, per_provider: usize) -> Vec<Gif> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.providers
            .iter()
            .flat_map(|provider| match provider.search(query, per_provider) {
                Ok(gifs) => gifs.into_iter().take(per_provider).collect(),
                Err(e) => {
                    warn!("{} failed for '{}': {}", provider.name(), query, e);
                    Vec::new()
                }
            })
            .collect()
    }
}
