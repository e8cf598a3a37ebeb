//! Starship id extraction from record URLs.

use regex::Regex;
use std::sync::LazyLock;

static STARSHIP_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/starships/(\d+)/?$").expect("static starship id pattern"));

/// Extracts the numeric id from a record URL such as
/// `https://swapi.dev/api/starships/9/`. Returns `None` for anything else.
pub fn starship_id(url: &str) -> Option<u32> {
    STARSHIP_ID
        .captures(url.trim())
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
