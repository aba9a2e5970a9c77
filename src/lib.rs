// Copyright 2025 Cowboy AI, LLC.

//! # CIM Cycler
//!
//! Composable property cycles: finite, restartable sequences of keyed records
//! used to assign per-series styles.
//!
//! A cycle is built bottom-up:
//! - **Leaf**: one property name and its values, e.g. `color = [r, g, b]`
//! - **Pairwise** (`+`): index-aligned merge of two cycles of equal length
//! - **Product** (`*`): every combination, left slowest and right fastest
//!
//! ```
//! use cim_cycler::cycler;
//!
//! let colors = cycler("color", ["r", "g", "b"]);
//! let styles = cycler("linestyle", ["-", "--", "-."]);
//!
//! let zipped = (&colors + &styles)?;
//! assert_eq!(zipped.len(), 3);
//!
//! let grid = (&colors * &styles)?;
//! assert_eq!(grid.len(), 9);
//! assert_eq!(grid.iter().next().unwrap()["linestyle"], "-");
//! # Ok::<(), cim_cycler::CyclerError>(())
//! ```
//!
//! Key sets are checked when cycles are composed: zipped or multiplied cycles
//! must not share property names, and concatenated cycles must share all of
//! them. Composites own deep copies of their operands.

#![warn(missing_docs)]

mod builders;
mod cycler;
mod display;
mod errors;
mod iter;
mod ops;
mod record;
mod serde_impl;
mod slice;
mod transform;

pub use builders::{compose, concat, copy_of, cycler, cycler_from_keywords};
pub use cycler::{CycleOp, Cycler};
pub use errors::{CyclerError, CyclerResult};
pub use iter::{Cycle, Iter};
pub use record::{merge_disjoint, PropertyName, Record};
pub use slice::SliceSpec;
