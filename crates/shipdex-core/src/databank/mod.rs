//! Slug-based image lookup against the databank content pages.
//!
//! Only consulted when the wiki source found nothing. Each slug candidate is
//! fetched as raw HTML and scanned for the CDN image URL; a failed fetch just
//! moves on to the next candidate.

mod extract;
mod slug;

pub use extract::extract_cdn_image;
pub use slug::{databank_slug, slug_candidates, slug_override, slugify};

use std::sync::Arc;

use crate::config::ShipdexConfig;
use crate::http::Fetch;
use crate::resolve::ImageSource;

pub struct DatabankSource {
    fetch: Arc<dyn Fetch>,
    base_url: String,
}

impl DatabankSource {
    pub fn new(fetch: Arc<dyn Fetch>, base_url: impl Into<String>) -> Self {
        Self {
            fetch,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(fetch: Arc<dyn Fetch>, cfg: &ShipdexConfig) -> Self {
        Self::new(fetch, cfg.databank_base_url.clone())
    }

    fn probe(&self, candidate: &str) -> Option<String> {
        let url = format!("{}{}", self.base_url, candidate);
        match self.fetch.get_text(&url) {
            Ok(html) => extract_cdn_image(&html).map(str::to_string),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "databank probe failed");
                None
            }
        }
    }
}

impl ImageSource for DatabankSource {
    fn label(&self) -> &'static str {
        "databank"
    }

    fn lookup(&self, name: &str) -> anyhow::Result<Option<String>> {
        let slug = databank_slug(name);
        Ok(slug_candidates(&slug)
            .iter()
            .find_map(|candidate| self.probe(candidate)))
    }
}
