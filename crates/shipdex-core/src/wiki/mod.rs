//! Title-based image lookup against a MediaWiki page-image API.
//!
//! Probes a fixed list of title variants first, then falls back to full-text
//! search and re-probes each hit. Every probe is independent: a failure is
//! logged and the next candidate is tried. Nothing found is `Ok(None)`.

mod parse;
mod query;

pub use parse::{PageImagesResponse, SearchResponse};
pub use query::{page_images_url, search_queries, search_url, title_candidates};

use std::sync::Arc;

use crate::config::ShipdexConfig;
use crate::http::{self, Fetch, FetchError};
use crate::resolve::ImageSource;

pub struct WikiSource {
    fetch: Arc<dyn Fetch>,
    api_url: String,
    thumb_size: u32,
    search_limit: usize,
}

impl WikiSource {
    pub fn new(
        fetch: Arc<dyn Fetch>,
        api_url: impl Into<String>,
        thumb_size: u32,
        search_limit: usize,
    ) -> Self {
        Self {
            fetch,
            api_url: api_url.into(),
            thumb_size,
            search_limit,
        }
    }

    pub fn from_config(fetch: Arc<dyn Fetch>, cfg: &ShipdexConfig) -> Self {
        Self::new(fetch, cfg.wiki_api_url.clone(), cfg.thumb_size, cfg.search_limit)
    }

    /// Page image for one exact title.
    pub fn image_for_title(&self, title: &str) -> Result<Option<String>, FetchError> {
        let url = page_images_url(&self.api_url, title, self.thumb_size)?;
        let resp: PageImagesResponse = http::get_json(self.fetch.as_ref(), &url)?;
        Ok(resp.image().map(str::to_string))
    }

    /// Search result titles for one query, capped at `search_limit`.
    pub fn search_titles(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let url = search_url(&self.api_url, query, self.search_limit)?;
        let resp: SearchResponse = http::get_json(self.fetch.as_ref(), &url)?;
        Ok(resp.titles(self.search_limit))
    }

    fn probe(&self, title: &str) -> Option<String> {
        match self.image_for_title(title) {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(title, error = %e, "wiki title probe failed");
                None
            }
        }
    }

    fn search_and_probe(&self, query: &str) -> Option<String> {
        let titles = match self.search_titles(query) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(query, error = %e, "wiki search failed");
                return None;
            }
        };
        titles.iter().find_map(|title| self.probe(title))
    }
}

impl ImageSource for WikiSource {
    fn label(&self) -> &'static str {
        "wiki"
    }

    fn lookup(&self, name: &str) -> anyhow::Result<Option<String>> {
        let found = title_candidates(name)
            .iter()
            .find_map(|title| self.probe(title))
            .or_else(|| {
                search_queries(name)
                    .iter()
                    .find_map(|query| self.search_and_probe(query))
            });
        Ok(found)
    }
}
