// Copyright 2025 Cowboy AI, LLC.

//! The cycler value type and its composition rules
//!
//! A [`Cycler`] is a finite, restartable sequence of [`Record`]s that all share
//! one key set. Cyclers are built bottom-up: leaves wrap one property name and
//! its values, composites own two child cyclers joined by a [`CycleOp`].
//!
//! ```text
//!            (+)                 pairwise: record i = left[i] ∪ right[i]
//!           /   \
//!        (*)     lw              product:  every (l, r), right varies fastest
//!       /   \
//!   color   ls
//! ```
//!
//! Key overlap and length checks run when a composite is built, never during
//! iteration.

use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{CyclerError, CyclerResult};
use crate::record::{validate_disjoint, PropertyName, Record};

/// Binary operator joining two child cyclers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum CycleOp {
    /// Index-aligned merge; operands must have equal lengths.
    Pairwise,
    /// Cartesian merge, left slowest and right fastest.
    Product,
}

impl CycleOp {
    /// Operator symbol used when rendering a composition.
    pub fn symbol(self) -> &'static str {
        match self {
            CycleOp::Pairwise => "+",
            CycleOp::Product => "*",
        }
    }

    /// Length of a composite given the lengths of its children.
    pub fn combined_len(self, left: usize, right: usize) -> usize {
        match self {
            CycleOp::Pairwise => left.min(right),
            CycleOp::Product => left.saturating_mul(right),
        }
    }
}

/// Internal shape of a cycler.
#[derive(Debug, Clone)]
pub(crate) enum Node<V> {
    /// No keys and no records.
    Empty,
    /// One property and its values, in input order.
    Leaf {
        /// Property name carried by every record.
        key: PropertyName,
        /// Materialized values.
        values: Vec<V>,
    },
    /// Two exclusively owned children joined by an operator.
    Composite {
        /// Merge rule.
        op: CycleOp,
        /// Left child (slow side of a product).
        left: Box<Cycler<V>>,
        /// Right child (fast side of a product).
        right: Box<Cycler<V>>,
    },
}

/// A finite, restartable sequence of key-unique records.
///
/// Cloning a cycler is a deep copy: no storage is shared between the clone
/// and the original.
#[derive(Debug, Clone)]
pub struct Cycler<V> {
    pub(crate) keys: IndexSet<PropertyName>,
    pub(crate) node: Node<V>,
}

impl<V> Cycler<V> {
    /// A cycler with no keys and no records.
    pub fn empty() -> Self {
        Self {
            keys: IndexSet::new(),
            node: Node::Empty,
        }
    }

    /// Build a leaf yielding `{name: value}` for each value, in order.
    ///
    /// The values are materialized eagerly, so `values` must be finite.
    pub fn leaf(name: impl Into<PropertyName>, values: impl IntoIterator<Item = V>) -> Self {
        let key = name.into();
        let mut keys = IndexSet::with_capacity(1);
        keys.insert(key.clone());
        Self {
            keys,
            node: Node::Leaf {
                key,
                values: values.into_iter().collect(),
            },
        }
    }

    /// Pairwise-compose one leaf per `(name, values)` entry, in entry order.
    pub fn from_keywords<K, I>(entries: impl IntoIterator<Item = (K, I)>) -> CyclerResult<Self>
    where
        K: Into<PropertyName>,
        I: IntoIterator<Item = V>,
    {
        let mut entries = entries.into_iter();
        let (name, values) = entries
            .next()
            .ok_or_else(|| CyclerError::Arity("cycler requires at least one property".into()))?;
        let mut composed = Self::leaf(name, values);
        for (name, values) in entries {
            composed = Self::compose(composed, Self::leaf(name, values), CycleOp::Pairwise)?;
        }
        Ok(composed)
    }

    /// Join two cyclers with `op`, taking ownership of both.
    ///
    /// Pairwise composition requires equal lengths; both operators require
    /// disjoint key sets.
    pub fn compose(left: Self, right: Self, op: CycleOp) -> CyclerResult<Self> {
        let keys = Self::validate(&left, &right, op)?;
        Ok(Self::assemble(keys, op, left, right))
    }

    /// Number of records in one full iteration.
    pub fn len(&self) -> usize {
        match &self.node {
            Node::Empty => 0,
            Node::Leaf { values, .. } => values.len(),
            Node::Composite { op, left, right } => op.combined_len(left.len(), right.len()),
        }
    }

    /// True when iteration yields no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Property names carried by every record.
    pub fn keys(&self) -> &IndexSet<PropertyName> {
        &self.keys
    }

    /// Operator at the root, `None` for leaves and the empty cycler.
    pub fn op(&self) -> Option<CycleOp> {
        match &self.node {
            Node::Composite { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// True when this cycler wraps a single property directly.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf { .. })
    }

    /// Build a pairwise tree from per-key value columns of equal length.
    pub(crate) fn from_columns(columns: IndexMap<PropertyName, Vec<V>>) -> Self {
        let mut leaves = columns
            .into_iter()
            .map(|(key, values)| Self::leaf(key, values));
        let Some(first) = leaves.next() else {
            return Self::empty();
        };
        leaves.fold(first, |left, right| {
            let keys = left.keys.union(&right.keys).cloned().collect();
            Self::assemble(keys, CycleOp::Pairwise, left, right)
        })
    }

    fn validate(left: &Self, right: &Self, op: CycleOp) -> CyclerResult<IndexSet<PropertyName>> {
        if op == CycleOp::Pairwise && left.len() != right.len() {
            return Err(CyclerError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        validate_disjoint(&left.keys, &right.keys)
    }

    fn assemble(keys: IndexSet<PropertyName>, op: CycleOp, left: Self, right: Self) -> Self {
        let composed = Self {
            keys,
            node: Node::Composite {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        };
        trace!(
            op = ?op,
            len = composed.len(),
            keys = ?composed.keys,
            "Composed cycler"
        );
        composed
    }
}

impl<V: Clone> Cycler<V> {
    /// Build a leaf named `name` from the values of a single-key cycler.
    pub fn leaf_from_cycler(name: impl Into<PropertyName>, source: &Self) -> CyclerResult<Self> {
        if source.keys.len() != 1 {
            return Err(CyclerError::unsupported(format!(
                "Can not create Cycler from a multi-property Cycler ({} keys)",
                source.keys.len()
            )));
        }
        let values = source.by_key().into_values().next().unwrap_or_default();
        Ok(Self::leaf(name, values))
    }

    /// Zip with `other` into a new cycler; neither operand is modified.
    pub fn combine_pairwise(&self, other: &Self) -> CyclerResult<Self> {
        Self::compose(self.clone(), other.clone(), CycleOp::Pairwise)
    }

    /// Cartesian product with `other` into a new cycler; neither operand is modified.
    pub fn combine_product(&self, other: &Self) -> CyclerResult<Self> {
        Self::compose(self.clone(), other.clone(), CycleOp::Product)
    }

    /// Zip `other` into this cycler in place. The previous state becomes the left child.
    pub fn augment_pairwise(&mut self, other: &Self) -> CyclerResult<()> {
        self.augment(other, CycleOp::Pairwise)
    }

    /// Multiply this cycler by `other` in place. The previous state becomes the left child.
    pub fn augment_product(&mut self, other: &Self) -> CyclerResult<()> {
        self.augment(other, CycleOp::Product)
    }

    /// Repeat every key's values `times` times, keeping keys aligned.
    pub fn repeat(&self, times: usize) -> Self {
        let columns = self
            .by_key()
            .into_iter()
            .map(|(key, values)| {
                let mut repeated = Vec::with_capacity(values.len().saturating_mul(times));
                for _ in 0..times {
                    repeated.extend_from_slice(&values);
                }
                (key, repeated)
            })
            .collect();
        debug!(times, len = self.len(), "Repeating cycler");
        Self::from_columns(columns)
    }

    fn augment(&mut self, other: &Self, op: CycleOp) -> CyclerResult<()> {
        let keys = Self::validate(self, other, op)?;
        let previous = std::mem::replace(self, Self::empty());
        *self = Self::assemble(keys, op, previous, other.clone());
        debug!(op = ?op, len = self.len(), "Augmented cycler in place");
        Ok(())
    }
}

impl<V: Clone + PartialEq> PartialEq for Cycler<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.keys == other.keys
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<V: Clone + Eq> Eq for Cycler<V> {}

impl<V> Default for Cycler<V> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn colors() -> Cycler<&'static str> {
        Cycler::leaf("color", ["r", "g", "b"])
    }

    fn styles() -> Cycler<&'static str> {
        Cycler::leaf("linestyle", ["-", "--", "-."])
    }

    #[test]
    fn test_leaf_shape() {
        let c = colors();
        assert_eq!(c.len(), 3);
        assert!(c.is_leaf());
        assert_eq!(c.op(), None);
        assert!(c.keys().contains("color"));
        assert_eq!(c.keys().len(), 1);
    }

    #[test]
    fn test_empty_cycler() {
        let c: Cycler<i32> = Cycler::empty();
        assert!(c.is_empty());
        assert!(c.keys().is_empty());
        assert_eq!(c.iter().count(), 0);
        assert_eq!(c, Cycler::default());
    }

    #[test]
    fn test_pairwise_length_and_keys() {
        let c = colors().combine_pairwise(&styles()).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.op(), Some(CycleOp::Pairwise));
        assert_eq!(c.keys().len(), 2);
    }

    #[test]
    fn test_product_length() {
        let c = colors()
            .combine_product(&Cycler::leaf("linewidth", ["1", "2"]))
            .unwrap();
        assert_eq!(c.len(), 6);
        assert_eq!(c.op(), Some(CycleOp::Product));
    }

    #[test]
    fn test_pairwise_rejects_length_mismatch() {
        let short = Cycler::leaf("linestyle", ["-"]);
        let err = colors().combine_pairwise(&short).unwrap_err();
        assert_eq!(err, CyclerError::LengthMismatch { left: 3, right: 1 });
    }

    #[test]
    fn test_product_allows_different_lengths() {
        let short = Cycler::leaf("linestyle", ["-"]);
        assert_eq!(colors().combine_product(&short).unwrap().len(), 3);
    }

    #[test]
    fn test_overlapping_keys_rejected_for_both_operators() {
        let a = Cycler::leaf("a", [1, 2]);
        let b = Cycler::leaf("a", [3, 4]);
        assert!(matches!(
            a.combine_pairwise(&b),
            Err(CyclerError::KeyOverlap { .. })
        ));
        assert!(matches!(
            a.combine_product(&b),
            Err(CyclerError::KeyOverlap { .. })
        ));
    }

    #[test]
    fn test_augment_reparents_previous_state() {
        let mut c = colors();
        c.augment_pairwise(&styles()).unwrap();
        assert_eq!(c.op(), Some(CycleOp::Pairwise));
        assert_eq!(c.len(), 3);
        match &c.node {
            Node::Composite { left, right, .. } => {
                assert_eq!(**left, colors());
                assert_eq!(**right, styles());
            }
            _ => panic!("Expected a composite node"),
        }

        c.augment_product(&Cycler::leaf("marker", ["o", "x"])).unwrap();
        assert_eq!(c.len(), 6);
        assert_eq!(c.op(), Some(CycleOp::Product));
    }

    #[test]
    fn test_failed_augment_leaves_receiver_unchanged() {
        let mut c = colors();
        let err = c.augment_product(&colors()).unwrap_err();
        assert!(err.is_key_error());
        assert_eq!(c, colors());
        assert!(c.is_leaf());
    }

    #[test]
    fn test_failed_pairwise_augment_reports_length() {
        let mut c = colors();
        let err = c.augment_pairwise(&Cycler::leaf("lw", ["1"])).unwrap_err();
        assert_eq!(err, CyclerError::LengthMismatch { left: 3, right: 1 });
        assert_eq!(c, colors());
        assert!(c.is_leaf());
    }

    #[test]
    fn test_composition_does_not_alias_operands() {
        let mut source = colors();
        let composed = source.combine_pairwise(&styles()).unwrap();
        source.change_key("color", "facecolor").unwrap();
        assert!(composed.keys().contains("color"));
        assert!(!composed.keys().contains("facecolor"));
    }

    #[test]
    fn test_from_keywords_builds_pairwise_chain() {
        let c = Cycler::from_keywords(indexmap! {
            "color" => vec!["r", "g"],
            "linestyle" => vec!["-", "--"],
        })
        .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.op(), Some(CycleOp::Pairwise));
    }

    #[test]
    fn test_from_keywords_requires_an_entry() {
        let err = Cycler::<i32>::from_keywords(Vec::<(&str, Vec<i32>)>::new()).unwrap_err();
        assert!(matches!(err, CyclerError::Arity(_)));
    }

    #[test]
    fn test_leaf_from_cycler_renames_single_key() {
        let renamed = Cycler::leaf_from_cycler("edgecolor", &colors()).unwrap();
        assert!(renamed.keys().contains("edgecolor"));
        assert_eq!(renamed.by_key()["edgecolor"], vec!["r", "g", "b"]);
    }

    #[test]
    fn test_leaf_from_multi_key_cycler_is_unsupported() {
        let both = colors().combine_pairwise(&styles()).unwrap();
        let err = Cycler::leaf_from_cycler("x", &both).unwrap_err();
        assert!(matches!(err, CyclerError::Unsupported(_)));
    }

    #[test]
    fn test_repeat_zero_keeps_keys() {
        let c = colors().combine_pairwise(&styles()).unwrap().repeat(0);
        assert_eq!(c.len(), 0);
        assert_eq!(c.keys().len(), 2);
    }

    #[test]
    fn test_combined_len_saturates() {
        assert_eq!(CycleOp::Product.combined_len(usize::MAX, 2), usize::MAX);
        assert_eq!(CycleOp::Pairwise.combined_len(4, 2), 2);
    }
}
