// Copyright 2025 Cowboy AI, LLC.

//! Lazy iteration over cyclers
//!
//! Every call to [`Cycler::iter`] starts a fresh pass from the first record.
//! Composites pull records from their children on demand; a product re-walks
//! its right child once per left record instead of materializing the grid.

use crate::cycler::{CycleOp, Cycler, Node};
use crate::record::{merge_disjoint, Record};

/// One finite pass over a cycler's records.
pub struct Iter<'a, V> {
    inner: Box<dyn Iterator<Item = Record<V>> + 'a>,
    remaining: usize,
}

impl<'a, V: Clone> Iter<'a, V> {
    fn new(cycler: &'a Cycler<V>) -> Self {
        let inner: Box<dyn Iterator<Item = Record<V>> + 'a> = match &cycler.node {
            Node::Empty => Box::new(std::iter::empty()),
            Node::Leaf { key, values } => Box::new(values.iter().map(move |value| {
                let mut record = Record::with_capacity(1);
                record.insert(key.clone(), value.clone());
                record
            })),
            Node::Composite {
                op: CycleOp::Pairwise,
                left,
                right,
            } => Box::new(
                left.iter()
                    .zip(right.iter())
                    .map(|(l, r)| merge_disjoint(l, r)),
            ),
            Node::Composite {
                op: CycleOp::Product,
                left,
                right,
            } => {
                let right: &'a Cycler<V> = right;
                Box::new(left.iter().flat_map(move |l| {
                    right.iter().map(move |r| merge_disjoint(l.clone(), r))
                }))
            }
        };
        Self {
            inner,
            remaining: cycler.len(),
        }
    }
}

impl<V> Iterator for Iter<'_, V> {
    type Item = Record<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Endless repetition of a cycler's records, restarting after the last one.
pub struct Cycle<'a, V> {
    cycler: &'a Cycler<V>,
    current: Iter<'a, V>,
}

impl<V: Clone> Iterator for Cycle<'_, V> {
    type Item = Record<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cycler.is_empty() {
            return None;
        }
        match self.current.next() {
            Some(record) => Some(record),
            None => {
                self.current = self.cycler.iter();
                self.current.next()
            }
        }
    }
}

impl<V: Clone> Cycler<V> {
    /// Iterate one full pass of records.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Iterate the records forever, wrapping around at the end.
    ///
    /// Yields nothing for a zero-length cycler.
    pub fn cycle(&self) -> Cycle<'_, V> {
        Cycle {
            cycler: self,
            current: self.iter(),
        }
    }
}

impl<'a, V: Clone> IntoIterator for &'a Cycler<V> {
    type Item = Record<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
