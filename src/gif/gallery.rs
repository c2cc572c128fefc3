//! Parallel first-GIF lookups for gallery categories and explore cards, and
//! the theme browse that fills a page of cards from every provider.
//!
//! Each lookup runs on tokio's blocking pool (the providers use a blocking
//! HTTP client). Lookups are independent: one that fails or panics yields
//! `None` for its slot and leaves its siblings alone. Results keep input order.

use super::{Gif, GifSearch};
use crate::catalog::{Category, ECard, PLACEHOLDER_IMAGE};
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use log::{error, info, warn};
use std::sync::Arc;

/// A gallery category paired with the GIF found for it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGif {
    pub category: Category,
    pub gif: Option<Gif>,
}

/// Run [`GifSearch::first_match`] for every query, at most `concurrency` at a time.
pub async fn fetch_first_matches(
    search: Arc<GifSearch>,
    queries: Vec<String>,
    concurrency: usize,
) -> Vec<Option<Gif>> {
    if search.is_empty() {
        error!("No GIF providers configured; skipping {} lookups", queries.len());
        return vec![None; queries.len()];
    }

    stream::iter(queries.into_iter().map(|query| {
        let search = search.clone();
        async move {
            let label = query.clone();
            match tokio::task::spawn_blocking(move || search.first_match(&query)).await {
                Ok(gif) => gif,
                Err(e) => {
                    error!("Error fetching GIF for '{}': {}", label, e);
                    None
                }
            }
        }
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await
}

pub async fn fetch_category_gifs(
    search: Arc<GifSearch>,
    categories: Vec<Category>,
    concurrency: usize,
) -> Vec<CategoryGif> {
    let queries = categories.iter().map(|c| c.query.clone()).collect();
    let gifs = fetch_first_matches(search, queries, concurrency).await;

    let results: Vec<CategoryGif> = categories
        .into_iter()
        .zip(gifs)
        .map(|(category, gif)| CategoryGif { category, gif })
        .collect();
    info!(
        "gallery: {}/{} categories illustrated",
        results.iter().filter(|c| c.gif.is_some()).count(),
        results.len()
    );
    results
}

/// [`fetch_category_gifs`] driven on a private runtime, for synchronous callers.
///
/// Must not be called from inside an async context.
pub fn fetch_category_gifs_blocking(
    search: &Arc<GifSearch>,
    categories: Vec<Category>,
    concurrency: usize,
) -> Result<Vec<CategoryGif>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("Failed to start runtime: {}", e)))?;
    Ok(runtime.block_on(fetch_category_gifs(search.clone(), categories, concurrency)))
}

/// Replace each card's image with the first GIF for its query, or the
/// placeholder when nothing was found. Cards without a query are untouched.
pub async fn fetch_card_images(
    search: Arc<GifSearch>,
    cards: Vec<ECard>,
    concurrency: usize,
) -> Vec<ECard> {
    let queries: Vec<(usize, String)> = cards
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.query.clone().map(|q| (i, q)))
        .collect();
    let (slots, queries): (Vec<usize>, Vec<String>) = queries.into_iter().unzip();
    let gifs = fetch_first_matches(search, queries, concurrency).await;

    let mut cards = cards;
    for (slot, gif) in slots.into_iter().zip(gifs) {
        cards[slot].image = gif.map(|g| g.url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    }
    cards
}

/// [`fetch_card_images`] driven on a private runtime, for synchronous callers.
///
/// Must not be called from inside an async context.
pub fn fetch_card_images_blocking(
    search: &Arc<GifSearch>,
    cards: Vec<ECard>,
    concurrency: usize,
) -> Result<Vec<ECard>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("Failed to start runtime: {}", e)))?;
    Ok(runtime.block_on(fetch_card_images(search.clone(), cards, concurrency)))
}

/// Results requested from each provider when browsing a theme.
pub const THEME_GIFS_PER_PROVIDER: usize = 5;

/// One card per GIF found for `theme` across all providers, Giphy's first.
/// The cards carry no query and start with zero engagement counts.
pub fn fetch_theme_cards(search: &GifSearch, theme: &str, per_provider: usize) -> Vec<ECard> {
    let cards: Vec<ECard> = search
        .collect_all(theme, per_provider)
        .into_iter()
        .map(|gif| ECard {
            id: gif.id,
            title: gif.title,
            category: theme.to_string(),
            image: gif.url,
            query: None,
            likes: 0,
            shares: 0,
            views: 0,
        })
        .collect();
    if cards.is_empty() {
        warn!("theme '{}': no GIFs found", theme);
    } else {
        info!("theme '{}': {} cards", theme, cards.len());
    }
    cards
}
