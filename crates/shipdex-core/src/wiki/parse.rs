//! Minimal MediaWiki response structures for page images and full-text search.

use serde::Deserialize;
use std::collections::BTreeMap;

/// `action=query&prop=pageimages` response.
#[derive(Debug, Default, Deserialize)]
pub struct PageImagesResponse {
    #[serde(default)]
    pub query: Option<PageImagesQuery>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageImagesQuery {
    /// Keyed by internal page id ("-1" for a missing page).
    #[serde(default)]
    pub pages: BTreeMap<String, WikiPage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WikiPage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ImageRef>,
    #[serde(default)]
    pub original: Option<ImageRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub source: String,
}

impl WikiPage {
    /// Thumbnail if present and non-empty, else the original.
    pub fn image(&self) -> Option<&str> {
        [&self.thumbnail, &self.original]
            .into_iter()
            .flatten()
            .map(|r| r.source.trim())
            .find(|s| !s.is_empty())
    }
}

impl PageImagesResponse {
    /// First page, in page-id key order, that carries an image. A response to a
    /// single-title query has one page; for several, pages without an image
    /// are skipped rather than ending the lookup.
    pub fn image(&self) -> Option<&str> {
        self.query
            .as_ref()?
            .pages
            .values()
            .find_map(WikiPage::image)
    }
}

/// `action=query&list=search` response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

impl SearchResponse {
    /// Result titles in API order, at most `limit` of them.
    pub fn titles(self, limit: usize) -> Vec<String> {
        self.query
            .map(|q| q.search)
            .unwrap_or_default()
            .into_iter()
            .map(|h| h.title)
            .filter(|t| !t.trim().is_empty())
            .take(limit)
            .collect()
    }
}
