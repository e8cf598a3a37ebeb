//! `shipdex slug <name>` – show how a name maps onto databank pages.

use shipdex_core::databank::{databank_slug, slug_candidates, slug_override};

pub fn run_slug(name: &str) {
    let slug = databank_slug(name);
    let origin = if slug_override(name).is_some() {
        "override"
    } else {
        "generated"
    };
    println!("{slug} ({origin})");
    for candidate in slug_candidates(&slug) {
        println!("  {candidate}");
    }
}
