//! Image resolution: an ordered cascade of image sources per entity.
//!
//! The cascade only depends on the [`ImageSource`] trait and does not know
//! about the wiki or the databank specifically.

mod cascade;
mod parallel;

pub use cascade::{resolve_all, Cascade, Outcome};
pub use parallel::resolve_all_parallel;

/// One place an image URL can come from.
///
/// `Ok(None)` is a normal miss. An `Err` is treated the same way by the
/// cascade (logged, next source tried); it only exists so a source can
/// report why it gave up.
pub trait ImageSource: Send + Sync {
    /// Short name used in logs.
    fn label(&self) -> &'static str;

    fn lookup(&self, name: &str) -> anyhow::Result<Option<String>>;
}
