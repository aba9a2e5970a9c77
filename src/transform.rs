// Copyright 2025 Cowboy AI, LLC.

//! Reshaping cyclers through their per-key value columns
//!
//! `by_key` transposes a cycler into one value list per property. Simplify,
//! concatenation and slicing all edit those columns and rebuild a flat
//! pairwise tree, which keeps every key aligned with the others.

use indexmap::IndexMap;
use tracing::debug;

use crate::cycler::{Cycler, Node};
use crate::errors::{CyclerError, CyclerResult};
use crate::record::{validate_matching, PropertyName};
use crate::slice::SliceSpec;

impl<V: Clone> Cycler<V> {
    /// Transpose into one ordered value list per property.
    pub fn by_key(&self) -> IndexMap<PropertyName, Vec<V>> {
        let len = self.len();
        let mut columns: IndexMap<PropertyName, Vec<V>> = self
            .keys
            .iter()
            .map(|key| (key.clone(), Vec::with_capacity(len)))
            .collect();
        for record in self.iter() {
            for (key, value) in record {
                if let Some(column) = columns.get_mut(&key) {
                    column.push(value);
                }
            }
        }
        columns
    }

    /// Equivalent cycler built from pairwise composition only.
    pub fn simplify(&self) -> Self {
        Self::from_columns(self.by_key())
    }

    /// Chain `other` after this cycler. Both must carry exactly the same keys.
    pub fn concat(&self, other: &Self) -> CyclerResult<Self> {
        validate_matching(&self.keys, &other.keys)?;
        let mut tail = other.by_key();
        let mut columns = self.by_key();
        for (key, values) in columns.iter_mut() {
            if let Some(more) = tail.swap_remove(key) {
                values.extend(more);
            }
        }
        debug!(
            left = self.len(),
            right = other.len(),
            "Concatenated cyclers"
        );
        Ok(Self::from_columns(columns))
    }

    /// Slice every key's values with the same slice.
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> CyclerResult<Self> {
        let spec = spec.into();
        let positions = spec.indices(self.len())?;
        let columns = self
            .by_key()
            .into_iter()
            .map(|(key, values)| {
                let picked = positions.iter().map(|&i| values[i].clone()).collect();
                (key, picked)
            })
            .collect();
        debug!(spec = ?spec, selected = positions.len(), "Sliced cycler");
        Ok(Self::from_columns(columns))
    }
}

impl<V> Cycler<V> {
    /// Rename a property everywhere in the composition tree, in place.
    ///
    /// Renaming a key to itself is a no-op.
    pub fn change_key(&mut self, old: &str, new: impl Into<PropertyName>) -> CyclerResult<()> {
        let new = new.into();
        if old == new {
            return Ok(());
        }
        if self.keys.contains(&new) {
            return Err(CyclerError::KeyAlreadyExists(new));
        }
        if !self.keys.contains(old) {
            return Err(CyclerError::KeyNotFound(old.to_string()));
        }
        self.rename(old, &new);
        debug!(old, new = %new, "Renamed cycler key");
        Ok(())
    }

    fn rename(&mut self, old: &str, new: &str) {
        self.keys = self
            .keys
            .iter()
            .map(|key| {
                if key == old {
                    new.to_string()
                } else {
                    key.clone()
                }
            })
            .collect();
        match &mut self.node {
            Node::Empty => {}
            Node::Leaf { key, .. } => *key = new.to_string(),
            Node::Composite { left, right, .. } => {
                if right.keys.contains(old) {
                    right.rename(old, new);
                } else {
                    left.rename(old, new);
                }
            }
        }
    }
}
