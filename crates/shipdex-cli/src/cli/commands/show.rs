//! `shipdex show <id>` – details of one starship.

use anyhow::{Context, Result};
use shipdex_core::artifact::ImageMapping;
use shipdex_core::browser::{
    detail_fields, format_value, write_placeholder_svg, CatalogBrowser, DetailView, ShipImage,
};
use shipdex_core::config::ShipdexConfig;
use shipdex_core::http::CurlFetcher;
use std::path::Path;
use std::sync::Arc;

pub async fn run_show(
    cfg: &ShipdexConfig,
    id: u32,
    images: &Path,
    svg: Option<&Path>,
) -> Result<()> {
    let browser = CatalogBrowser::new(
        Arc::new(CurlFetcher::from_config(cfg)),
        cfg.catalog_url.clone(),
        ImageMapping::load_or_empty(images),
    );

    let (browser, view) = tokio::task::spawn_blocking(move || {
        let view = browser.detail(id);
        (browser, view)
    })
    .await
    .context("detail task join")?;

    match view {
        DetailView::Error(msg) => println!("{msg}"),
        DetailView::Loaded(ship) => {
            println!("{}", ship.name);
            println!("{}", format_value(&ship.model));
            println!();
            for (label, value) in detail_fields(&ship) {
                println!("  {:<24} {}", label, value);
            }
            match browser.image_for(&ship.name) {
                ShipImage::Remote(url) => println!("  {:<24} {}", "Image", url),
                ShipImage::Placeholder { hue } => {
                    println!("  {:<24} placeholder (hue {})", "Image", hue);
                    if let Some(svg) = svg {
                        write_placeholder_svg(svg, &ship.name)?;
                        println!("  {:<24} {}", "", svg.display());
                    }
                }
            }
        }
    }
    Ok(())
}
