// Copyright 2025 Cowboy AI, LLC.

//! Free-function constructors
//!
//! These mirror the cycler methods for callers that prefer a functional
//! style. All of them copy their inputs; none keep references to them.

use crate::cycler::{CycleOp, Cycler};
use crate::errors::CyclerResult;
use crate::record::PropertyName;

/// Build a leaf cycler from a property name and a finite set of values.
pub fn cycler<V>(name: impl Into<PropertyName>, values: impl IntoIterator<Item = V>) -> Cycler<V> {
    Cycler::leaf(name, values)
}

/// Pairwise-compose one leaf per `(name, values)` entry.
pub fn cycler_from_keywords<V, K, I>(
    entries: impl IntoIterator<Item = (K, I)>,
) -> CyclerResult<Cycler<V>>
where
    K: Into<PropertyName>,
    I: IntoIterator<Item = V>,
{
    Cycler::from_keywords(entries)
}

/// Join copies of two cyclers with `op`.
pub fn compose<V: Clone>(left: &Cycler<V>, right: &Cycler<V>, op: CycleOp) -> CyclerResult<Cycler<V>> {
    Cycler::compose(left.clone(), right.clone(), op)
}

/// Deep copy of a cycler.
pub fn copy_of<V: Clone>(cycler: &Cycler<V>) -> Cycler<V> {
    cycler.clone()
}

/// Chain two cyclers with identical key sets.
pub fn concat<V: Clone>(left: &Cycler<V>, right: &Cycler<V>) -> CyclerResult<Cycler<V>> {
    left.concat(right)
}
