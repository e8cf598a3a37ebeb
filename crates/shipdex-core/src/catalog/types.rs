//! Catalog records as served by the starship list and detail endpoints.

use serde::{Deserialize, Serialize};

/// One starship record. `name` is the join key for the image mapping and
/// `url` carries the numeric id; the rest is display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub cargo_capacity: String,
}

impl Starship {
    /// Numeric id taken from `url`, if it has the expected shape.
    pub fn id(&self) -> Option<u32> {
        super::starship_id(&self.url)
    }
}

/// One page of the paginated list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Link to the following page; null, absent and blank all mean "last page".
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|s| !s.trim().is_empty())
    }
}
