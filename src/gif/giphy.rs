//! Giphy search backend

use super::{build_client, map_transport_error, Gif, GifConfig, GifProvider};
use crate::{Error, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<GiphyGif>,
}

#[derive(Deserialize)]
struct GiphyGif {
    id: String,
    #[serde(default)]
    title: String,
    images: Images,
}

#[derive(Deserialize)]
struct Images {
    fixed_height: Rendition,
}

#[derive(Deserialize)]
struct Rendition {
    url: String,
}

pub struct GiphyProvider {
    client: Client,
    api_key: String,
    base_url: String,
    rating: String,
    timeout_ms: u64,
}

impl GiphyProvider {
    pub fn new(api_key: String, config: &GifConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            api_key,
            base_url: config.giphy_base_url.trim_end_matches('/').to_string(),
            rating: config.rating.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn provider_error(&self, message: String) -> Error {
        Error::ProviderError { provider: self.name().to_string(), message }
    }
}

impl GifProvider for GiphyProvider {
    fn name(&self) -> &'static str {
        "Giphy"
    }

    fn search(&self, query: &str, limit: usize) -> Result<Vec<Gif>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit_param = limit.to_string();
        let url = url::Url::parse_with_params(
            &format!("{}/v1/gifs/search", self.base_url),
            &[
                ("api_key", self.api_key.as_str()),
                ("q", query),
                ("limit", limit_param.as_str()),
                ("rating", self.rating.as_str()),
            ],
        )
        .map_err(|e| Error::ConfigError(format!("Invalid Giphy base URL: {}", e)))?;

        debug!("Giphy search '{}' (limit {})", query, limit);
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

        Ok(body
            .data
            .into_iter()
            .take(limit)
            .map(|g| Gif { id: g.id, url: g.images.fixed_height.url, title: g.title })
            .collect())
    }
}
