// Copyright 2025 Cowboy AI, LLC.

//! Slice specifications for cyclers
//!
//! A [`SliceSpec`] follows sequence-slice rules: negative positions count from
//! the end, out-of-range bounds clamp, and a negative step walks backwards.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{CyclerError, CyclerResult};

/// Start, stop and step of a slice; `None` picks the default for the step direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SliceSpec {
    /// First position (inclusive).
    pub start: Option<isize>,
    /// End position (exclusive).
    pub stop: Option<isize>,
    /// Distance between selected positions; defaults to 1.
    pub step: Option<isize>,
}

impl SliceSpec {
    /// Create a slice from explicit parts.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Every `step`-th element of the whole sequence.
    pub fn every(step: isize) -> Self {
        Self::new(None, None, Some(step))
    }

    /// Positions selected from a sequence of length `len`, in selection order.
    pub fn indices(&self, len: usize) -> CyclerResult<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(CyclerError::unsupported("slice step cannot be zero"));
        }
        let len = isize::try_from(len)
            .map_err(|_| CyclerError::unsupported("sequence too long to slice"))?;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self
            .start
            .map_or(if step > 0 { lower } else { upper }, clamp);
        let stop = self.stop.map_or(if step > 0 { upper } else { lower }, clamp);

        let mut positions = Vec::new();
        let mut at = start;
        while (step > 0 && at < stop) || (step < 0 && at > stop) {
            // bounds above keep `at` inside 0..len here
            positions.push(at as usize);
            match at.checked_add(step) {
                Some(next) => at = next,
                None => break,
            }
        }
        Ok(positions)
    }
}

impl From<Range<usize>> for SliceSpec {
    fn from(range: Range<usize>) -> Self {
        Self::new(
            Some(isize::try_from(range.start).unwrap_or(isize::MAX)),
            Some(isize::try_from(range.end).unwrap_or(isize::MAX)),
            None,
        )
    }
}

impl From<RangeFrom<usize>> for SliceSpec {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(
            Some(isize::try_from(range.start).unwrap_or(isize::MAX)),
            None,
            None,
        )
    }
}

impl From<RangeTo<usize>> for SliceSpec {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(
            None,
            Some(isize::try_from(range.end).unwrap_or(isize::MAX)),
            None,
        )
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}
