//! Resolve entities on blocking tasks with a bounded number in flight.
//!
//! Keeps up to `max_concurrent` entities resolving at once; when one finishes,
//! the next is started. Each entity still runs its own cascade in order, and
//! results are reassembled by index so the mapping keeps source order.

use anyhow::Result;
use std::sync::Arc;

use crate::artifact::ImageMapping;
use crate::catalog::Starship;

use super::cascade::{Cascade, Outcome};

pub async fn resolve_all_parallel<F>(
    cascade: Arc<Cascade>,
    ships: Vec<Starship>,
    max_concurrent: usize,
    mut on_outcome: F,
) -> Result<ImageMapping>
where
    F: FnMut(&Outcome),
{
    let max_concurrent = max_concurrent.max(1);
    let mut slots: Vec<Option<Outcome>> = vec![None; ships.len()];
    let mut pending = ships.into_iter().enumerate();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some((index, ship)) = pending.next() else {
                break;
            };
            let cascade = Arc::clone(&cascade);
            join_set.spawn_blocking(move || (index, cascade.resolve(&ship.name)));
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let (index, outcome) = res.map_err(|e| anyhow::anyhow!("resolve task join: {}", e))?;
        on_outcome(&outcome);
        slots[index] = Some(outcome);
    }

    let mut mapping = ImageMapping::new();
    for outcome in slots.into_iter().flatten() {
        let image = outcome.image().to_string();
        mapping.insert(outcome.name, image);
    }
    Ok(mapping)
}
