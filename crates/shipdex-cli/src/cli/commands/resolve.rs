//! `shipdex resolve` – build the starship image mapping.

use anyhow::{Context, Result};
use shipdex_core::catalog;
use shipdex_core::config::ShipdexConfig;
use shipdex_core::http::{CurlFetcher, Fetch};
use shipdex_core::resolve::{self, Cascade, Outcome};
use std::path::Path;
use std::sync::Arc;

fn report(outcome: &Outcome) {
    let status = if outcome.is_found() { "ok" } else { "missing" };
    println!("{}: {}", outcome.name, status);
}

pub async fn run_resolve(cfg: &ShipdexConfig, output: &Path, jobs: usize) -> Result<()> {
    let fetch: Arc<dyn Fetch> = Arc::new(CurlFetcher::from_config(cfg));

    // A catalog failure aborts here, before anything is written.
    let ships = tokio::task::spawn_blocking({
        let fetch = Arc::clone(&fetch);
        let url = cfg.catalog_url.clone();
        move || catalog::fetch_all(fetch.as_ref(), &url)
    })
    .await
    .context("catalog task join")??;

    let cascade = Arc::new(Cascade::standard(fetch, cfg));
    let mapping = if jobs > 1 {
        resolve::resolve_all_parallel(cascade, ships, jobs, report).await?
    } else {
        tokio::task::spawn_blocking(move || resolve::resolve_all(&cascade, &ships, report))
            .await
            .context("resolve task join")?
    };

    mapping.save_to_path(output)?;
    tracing::info!(
        entries = mapping.len(),
        found = mapping.found_count(),
        "wrote image mapping to {}",
        output.display()
    );
    println!(
        "Wrote {} ({} of {} with images)",
        output.display(),
        mapping.found_count(),
        mapping.len()
    );
    Ok(())
}
