//! Tenor (v2) search backend

use super::{build_client, map_transport_error, Gif, GifConfig, GifProvider};
use crate::{Error, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TenorGif>,
}

#[derive(Deserialize)]
struct TenorGif {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content_description: String,
    media_formats: MediaFormats,
}

#[derive(Deserialize)]
struct MediaFormats {
    gif: Media,
}

#[derive(Deserialize)]
struct Media {
    url: String,
}

impl From<TenorGif> for Gif {
    fn from(g: TenorGif) -> Self {
        // Tenor leaves `title` empty for most results
        let title = if g.title.trim().is_empty() { g.content_description } else { g.title };
        Gif { id: g.id, url: g.media_formats.gif.url, title }
    }
}

pub struct TenorProvider {
    client: Client,
    api_key: String,
    base_url: String,
    content_filter: String,
    timeout_ms: u64,
}

impl TenorProvider {
    pub fn new(api_key: String, config: &GifConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            api_key,
            base_url: config.tenor_base_url.trim_end_matches('/').to_string(),
            content_filter: config.content_filter.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn provider_error(&self, message: String) -> Error {
        Error::ProviderError { provider: self.name().to_string(), message }
    }
}

impl GifProvider for TenorProvider {
    fn name(&self) -> &'static str {
        "Tenor"
    }

    fn search(&self, query: &str, limit: usize) -> Result<Vec<Gif>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit_param = limit.to_string();
        let url = url::Url::parse_with_params(
            &format!("{}/v2/search", self.base_url),
            &[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("limit", limit_param.as_str()),
                ("contentfilter", self.content_filter.as_str()),
            ],
        )
        .map_err(|e| Error::ConfigError(format!("Invalid Tenor base URL: {}", e)))?;

        debug!("Tenor search '{}' (limit {})", query, limit);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| map_transport_error(e, self.timeout_ms))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(self.provider_error(format!("HTTP {}", status)));
        }

        let body: SearchResponse = resp
            .json()
            .map_err(|e| self.provider_error(format!("Unreadable response: {}", e)))?;

        Ok(body.results.into_iter().take(limit).map(Gif::from).collect())
    }
}
