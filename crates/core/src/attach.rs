//! Movie↔actor attach policy.
//!
//! Attaching is idempotent: an actor listed twice in one request, or already
//! attached to the movie, never produces a second junction row.

use std::collections::HashSet;

use crate::types::DbId;

/// Collapse repeated actor ids while keeping first-seen order.
pub fn dedupe_actor_ids(actor_ids: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::with_capacity(actor_ids.len());
    actor_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Ids from `requested` that are not in `existing`, deduplicated.
pub fn missing_ids(requested: &[DbId], existing: &[DbId]) -> Vec<DbId> {
    let existing: HashSet<DbId> = existing.iter().copied().collect();
    dedupe_actor_ids(requested)
        .into_iter()
        .filter(|id| !existing.contains(id))
        .collect()
}
