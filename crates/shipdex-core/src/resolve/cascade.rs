//! Sequential cascade: first non-empty image wins.

use std::sync::Arc;

use crate::artifact::ImageMapping;
use crate::catalog::Starship;
use crate::config::ShipdexConfig;
use crate::databank::DatabankSource;
use crate::http::Fetch;
use crate::wiki::WikiSource;

use super::ImageSource;

/// Ordered list of sources, tried lazily until one yields an image.
pub struct Cascade {
    sources: Vec<Box<dyn ImageSource>>,
}

/// Result of running the cascade for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    /// Image URL and the label of the source that produced it.
    pub hit: Option<(String, &'static str)>,
}

impl Outcome {
    pub fn image(&self) -> &str {
        self.hit.as_ref().map(|(url, _)| url.as_str()).unwrap_or("")
    }

    pub fn is_found(&self) -> bool {
        self.hit.is_some()
    }
}

impl Cascade {
    pub fn new(sources: Vec<Box<dyn ImageSource>>) -> Self {
        Self { sources }
    }

    /// Wiki title lookup, then databank slug lookup.
    pub fn standard(fetch: Arc<dyn Fetch>, cfg: &ShipdexConfig) -> Self {
        Self::new(vec![
            Box::new(WikiSource::from_config(Arc::clone(&fetch), cfg)),
            Box::new(DatabankSource::from_config(fetch, cfg)),
        ])
    }

    /// Runs every source in order for `name`; stops at the first non-empty URL.
    /// Never fails: source errors are logged and skipped.
    pub fn resolve(&self, name: &str) -> Outcome {
        let hit = self.sources.iter().find_map(|source| {
            match source.lookup(name) {
                Ok(Some(url)) if !url.trim().is_empty() => Some((url, source.label())),
                Ok(_) => {
                    tracing::debug!(name, source = source.label(), "no image");
                    None
                }
                Err(e) => {
                    tracing::warn!(name, source = source.label(), error = %e, "image source failed");
                    None
                }
            }
        });

        match &hit {
            Some((url, label)) => tracing::info!(name, source = *label, url = %url, "image resolved"),
            None => tracing::info!(name, "image missing"),
        }

        Outcome {
            name: name.to_string(),
            hit,
        }
    }
}

/// Resolves every ship in source order and returns the complete mapping.
/// `on_outcome` is called once per entity as soon as it is resolved.
pub fn resolve_all<F>(cascade: &Cascade, ships: &[Starship], mut on_outcome: F) -> ImageMapping
where
    F: FnMut(&Outcome),
{
    let mut mapping = ImageMapping::new();
    for ship in ships {
        let outcome = cascade.resolve(&ship.name);
        on_outcome(&outcome);
        mapping.insert(outcome.name.clone(), outcome.image().to_string());
    }
    mapping
}
