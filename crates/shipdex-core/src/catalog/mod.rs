//! Starship catalog client: record types, id extraction, pagination and the
//! list / search / detail URLs used by the browser.

mod id;
mod paginate;
mod types;

pub use id::starship_id;
pub use paginate::{fetch_all, fetch_page};
pub use types::{Page, Starship};

use anyhow::{Context, Result};
use url::Url;

use crate::http::{self, Fetch};

/// List URL filtered by a substring search. A blank term means the plain list.
pub fn search_url(base: &str, term: &str) -> Result<String> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(base.to_string());
    }
    let url = Url::parse_with_params(base, &[("search", term)])
        .with_context(|| format!("invalid catalog URL: {base}"))?;
    Ok(url.into())
}

/// Detail URL for one starship id, e.g. `{base}9/`.
pub fn detail_url(base: &str, id: u32) -> String {
    format!("{}/{}/", base.trim_end_matches('/'), id)
}

/// Fetches a single record by id.
pub fn fetch_starship<F: Fetch + ?Sized>(fetch: &F, base: &str, id: u32) -> Result<Starship> {
    let url = detail_url(base, id);
    http::get_json(fetch, &url).with_context(|| format!("fetch starship {id}"))
}
