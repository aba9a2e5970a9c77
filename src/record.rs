// Copyright 2025 Cowboy AI, LLC.

//! Records and key-set algebra
//!
//! A record is one step of a cycle: a map from property name to value. Records
//! produced by composition are built by disjoint-union insertion, so a merge
//! never overwrites a value.

use indexmap::{IndexMap, IndexSet};

use crate::errors::{CyclerError, CyclerResult};

/// Name of a styled property (e.g. `color`, `linestyle`).
pub type PropertyName = String;

/// One step of a cycle. Insertion order follows composition order (left, then right).
pub type Record<V> = IndexMap<PropertyName, V>;

/// Merge two records with disjoint key sets.
pub fn merge_disjoint<V>(mut left: Record<V>, right: Record<V>) -> Record<V> {
    debug_assert!(
        right.keys().all(|k| !left.contains_key(k)),
        "records with overlapping keys cannot be merged"
    );
    left.reserve(right.len());
    left.extend(right);
    left
}

/// Property names present in both key sets, in left order.
pub fn overlapping_keys(
    left: &IndexSet<PropertyName>,
    right: &IndexSet<PropertyName>,
) -> Vec<PropertyName> {
    left.intersection(right).cloned().collect()
}

/// Check that two key sets are disjoint and return their union.
pub fn validate_disjoint(
    left: &IndexSet<PropertyName>,
    right: &IndexSet<PropertyName>,
) -> CyclerResult<IndexSet<PropertyName>> {
    let shared = overlapping_keys(left, right);
    if !shared.is_empty() {
        return Err(CyclerError::KeyOverlap { keys: shared });
    }
    Ok(left.union(right).cloned().collect())
}

/// Check that two key sets are equal, reporting the intersection and the
/// symmetric difference when they are not.
pub fn validate_matching(
    left: &IndexSet<PropertyName>,
    right: &IndexSet<PropertyName>,
) -> CyclerResult<()> {
    if left == right {
        return Ok(());
    }
    Err(CyclerError::KeyMismatch {
        common: left.intersection(right).cloned().collect(),
        differing: left.symmetric_difference(right).cloned().collect(),
    })
}
