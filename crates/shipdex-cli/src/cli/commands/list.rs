//! `shipdex list` – show starships, optionally filtered.

use anyhow::{Context, Result};
use shipdex_core::artifact::ImageMapping;
use shipdex_core::browser::{format_value, summary_label, CatalogBrowser, ListState, ListView, ShipImage};
use shipdex_core::config::ShipdexConfig;
use shipdex_core::http::CurlFetcher;
use std::path::Path;
use std::sync::Arc;

fn image_cell(image: &ShipImage) -> String {
    match image {
        ShipImage::Remote(url) => url.clone(),
        ShipImage::Placeholder { hue } => format!("(placeholder, hue {hue})"),
    }
}

fn print_list(browser: &CatalogBrowser, state: &ListState) {
    match state.view() {
        ListView::Loading => println!("Loading..."),
        ListView::Error(msg) => println!("{msg}"),
        ListView::Empty => println!("No results."),
        ListView::Items(items) => {
            println!(
                "{:<5} {:<32} {:<12} {:<10} {}",
                "ID", "NAME", "MAX SPEED", "CREW", "IMAGE"
            );
            for ship in items {
                let id = ship
                    .id()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<5} {:<32} {:<12} {:<10} {}",
                    id,
                    ship.name,
                    format_value(&ship.max_atmosphering_speed),
                    format_value(&ship.crew),
                    image_cell(&browser.image_for(&ship.name))
                );
            }
            if state.next_url().is_some() {
                println!("(more results: use --all)");
            }
        }
    }
}

pub async fn run_list(
    cfg: &ShipdexConfig,
    search: Option<&str>,
    all: bool,
    images: &Path,
) -> Result<()> {
    let browser = CatalogBrowser::new(
        Arc::new(CurlFetcher::from_config(cfg)),
        cfg.catalog_url.clone(),
        ImageMapping::load_or_empty(images),
    );
    let search = search.map(str::to_string);

    println!("{}", summary_label(search.as_deref()));
    let (browser, state) = tokio::task::spawn_blocking(move || {
        let mut state = browser.load_first(search.as_deref());
        while all && browser.load_more(&mut state) {}
        (browser, state)
    })
    .await
    .context("list task join")?;

    print_list(&browser, &state);
    Ok(())
}
