//! Id generation helpers shared by the state containers
//!
//! Every store generates ids from a per-store counter (`recipe-N`,
//! `workout-N`, `task-N`). The counter is part of the store's snapshot; for
//! injected initial state it is recovered by scanning the existing ids.

/// Derive an id counter from existing ids with the given prefix
///
/// Returns the highest numeric suffix found, so the next generated id is
/// guaranteed not to collide with any injected one. Ids that do not match
/// the prefix scheme are ignored.
pub(crate) fn counter_from_ids<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u32 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
