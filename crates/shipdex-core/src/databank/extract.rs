//! Image URL extraction from databank HTML.
//!
//! This is a pattern match against the known CDN host, not an HTML parse.

use regex::Regex;
use std::sync::LazyLock;

static CDN_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https://lumiere-a\.akamaihd\.net/[^"'\s)]+"#).expect("static CDN pattern")
});

/// First CDN image URL in `html`, if any.
pub fn extract_cdn_image(html: &str) -> Option<&str> {
    CDN_IMAGE.find(html).map(|m| m.as_str())
}
