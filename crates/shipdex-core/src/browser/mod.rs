//! Terminal catalog browser: list with search and "load more", detail view,
//! and image selection from the resolver's mapping.

mod format;
mod placeholder;
mod view;

pub use format::{format_value, summary_label, UNKNOWN};
pub use placeholder::{placeholder_hue, placeholder_svg, write_placeholder_svg, ShipImage};
pub use view::{detail_fields, DetailView, ListState, ListView, DETAIL_ERROR, LIST_ERROR};

use std::sync::Arc;

use crate::artifact::ImageMapping;
use crate::catalog;
use crate::http::Fetch;

/// Catalog client plus the image mapping, joined by name at render time.
pub struct CatalogBrowser {
    fetch: Arc<dyn Fetch>,
    base_url: String,
    images: ImageMapping,
}

impl CatalogBrowser {
    pub fn new(fetch: Arc<dyn Fetch>, base_url: impl Into<String>, images: ImageMapping) -> Self {
        Self {
            fetch,
            base_url: base_url.into(),
            images,
        }
    }

    /// First page of the list, filtered by `search` when it is non-blank.
    pub fn load_first(&self, search: Option<&str>) -> ListState {
        let mut state = ListState::new();
        state.begin_load();
        let result = catalog::search_url(&self.base_url, search.unwrap_or(""))
            .and_then(|url| catalog::fetch_page(self.fetch.as_ref(), &url));
        state.finish_load(result, false);
        state
    }

    /// Appends the next page. Returns false when there was nothing to load.
    pub fn load_more(&self, state: &mut ListState) -> bool {
        let Some(url) = state.next_url().map(str::to_string) else {
            return false;
        };
        state.begin_load();
        let result = catalog::fetch_page(self.fetch.as_ref(), &url);
        state.finish_load(result, true);
        true
    }

    pub fn detail(&self, id: u32) -> DetailView {
        DetailView::from_result(catalog::fetch_starship(
            self.fetch.as_ref(),
            &self.base_url,
            id,
        ))
    }

    pub fn image_for(&self, name: &str) -> ShipImage {
        ShipImage::for_ship(&self.images, name)
    }
}
