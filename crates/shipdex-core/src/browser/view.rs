//! List and detail state for the browser, and what each state renders as.

use anyhow::Result;

use crate::catalog::{Page, Starship};

use super::format::format_value;

pub const LIST_ERROR: &str = "Could not load starships. Please try again.";
pub const DETAIL_ERROR: &str = "Could not load starship details. Please try again.";

/// Loaded items plus request flags for the list view.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    items: Vec<Starship>,
    next_url: Option<String>,
    loading: bool,
    error: Option<String>,
    has_loaded: bool,
}

/// What the list view shows right now.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    /// First load still in flight.
    Loading,
    Error(&'a str),
    /// Loaded fine, nothing matched.
    Empty,
    Items(&'a [Starship]),
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request as in flight and clears the previous error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of a page request. `append` keeps earlier items
    /// (the "load more" case); otherwise the page replaces them.
    /// On failure the previous items stay and only the error is set.
    pub fn finish_load(&mut self, result: Result<Page<Starship>>, append: bool) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.next_url = page.next_url().map(str::to_string);
                if append {
                    self.items.extend(page.results);
                } else {
                    self.items = page.results;
                }
                self.has_loaded = true;
            }
            Err(e) => {
                tracing::warn!("starship list request failed: {:#}", e);
                self.error = Some(LIST_ERROR.to_string());
            }
        }
    }

    pub fn view(&self) -> ListView<'_> {
        if let Some(err) = &self.error {
            return ListView::Error(err);
        }
        if self.loading && !self.has_loaded {
            return ListView::Loading;
        }
        if self.has_loaded && self.items.is_empty() {
            return ListView::Empty;
        }
        ListView::Items(&self.items)
    }

    pub fn items(&self) -> &[Starship] {
        &self.items
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}

/// What the detail view shows once its request has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Error(String),
    Loaded(Starship),
}

impl DetailView {
    pub fn from_result(result: Result<Starship>) -> Self {
        match result {
            Ok(ship) => DetailView::Loaded(ship),
            Err(e) => {
                tracing::warn!("starship detail request failed: {:#}", e);
                DetailView::Error(DETAIL_ERROR.to_string())
            }
        }
    }
}

/// Labelled detail fields, already formatted.
pub fn detail_fields(ship: &Starship) -> [(&'static str, &str); 5] {
    [
        ("Manufacturer", format_value(&ship.manufacturer)),
        ("Passengers", format_value(&ship.passengers)),
        ("Max atmosphering speed", format_value(&ship.max_atmosphering_speed)),
        ("Crew", format_value(&ship.crew)),
        ("Cargo capacity", format_value(&ship.cargo_capacity)),
    ]
}
