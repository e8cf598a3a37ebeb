//! Follow `next` links until the list is exhausted.

use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::http::{self, Fetch};

use super::types::{Page, Starship};

/// Fetches one list page.
pub fn fetch_page<F: Fetch + ?Sized>(fetch: &F, url: &str) -> Result<Page<Starship>> {
    http::get_json(fetch, url).with_context(|| format!("fetch catalog page {url}"))
}

/// Fetches every page starting at `start_url` and returns all records in
/// page order, then within-page order.
///
/// Fails fast: any page error aborts and nothing is returned, since a partial
/// list would silently under-populate the image mapping. A `next` link that
/// points back to an already fetched page is an error too.
pub fn fetch_all<F: Fetch + ?Sized>(fetch: &F, start_url: &str) -> Result<Vec<Starship>> {
    let mut ships = Vec::new();
    let mut seen = HashSet::new();
    let mut next = Some(start_url.to_string());

    while let Some(url) = next {
        if !seen.insert(url.clone()) {
            anyhow::bail!("catalog pagination loops back to {url}");
        }
        let page = fetch_page(fetch, &url)?;
        tracing::debug!(url = %url, records = page.results.len(), "fetched catalog page");
        next = page.next_url().map(str::to_string);
        ships.extend(page.results);
    }

    tracing::info!("fetched {} starship(s) from catalog", ships.len());
    Ok(ships)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::StaticFetch;

    const P1: &str = "http://t/starships/";
    const P2: &str = "http://t/starships/?page=2";

    #[test]
    fn two_pages_accumulate_in_order() {
        let fetch = StaticFetch::default()
            .with(
                P1,
                format!(
                    r#"{{"results":[{{"name":"A","url":"u/1/"}},{{"name":"B","url":"u/2/"}}],"next":"{P2}"}}"#
                ),
            )
            .with(P2, r#"{"results":[{"name":"C","url":"u/3/"}],"next":null}"#);
        let ships = fetch_all(&fetch, P1).unwrap();
        let names: Vec<_> = ships.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(fetch.requested(), [P1, P2]);
    }

    #[test]
    fn failing_second_page_aborts_without_partial_result() {
        let fetch = StaticFetch::default().with(
            P1,
            format!(r#"{{"results":[{{"name":"A","url":"u/1/"}}],"next":"{P2}"}}"#),
        );
        assert!(fetch_all(&fetch, P1).is_err());
    }

    #[test]
    fn next_cycle_is_an_error() {
        let fetch = StaticFetch::default().with(
            P1,
            format!(r#"{{"results":[{{"name":"A","url":"u/1/"}}],"next":"{P1}"}}"#),
        );
        let err = fetch_all(&fetch, P1).unwrap_err();
        assert!(err.to_string().contains("loops back"));
    }
}
