// Copyright 2025 Cowboy AI, LLC.

//! Error types for cycler construction and manipulation

use thiserror::Error;

/// Errors that can occur while building or reshaping a cycler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CyclerError {
    /// Pairwise or product operands share property names
    #[error("Can not compose overlapping cycles: {}", keys.join(", "))]
    KeyOverlap {
        /// Property names present on both sides
        keys: Vec<String>,
    },

    /// Concatenation operands do not carry the same property names
    #[error(
        "Keys do not match: intersection [{}], disjoint [{}]",
        common.join(", "),
        differing.join(", ")
    )]
    KeyMismatch {
        /// Property names present on both sides
        common: Vec<String>,
        /// Property names present on exactly one side
        differing: Vec<String>,
    },

    /// Pairwise operands have different lengths
    #[error("Can only add equal length cycles, not {left} and {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// The key to rename is not present
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The replacement key is already present
    #[error("Key already exists: {0}")]
    KeyAlreadyExists(String),

    /// The requested operation is not supported for these operands
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Construction arguments were missing or conflicting
    #[error("Invalid arguments: {0}")]
    Arity(String),
}

/// Result type for cycler operations
pub type CyclerResult<T> = Result<T, CyclerError>;

impl CyclerError {
    /// Create an unsupported-operation error
    pub fn unsupported(reason: impl Into<String>) -> Self {
        CyclerError::Unsupported(reason.into())
    }

    /// Check if this error is about property names (overlap, mismatch, rename)
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            CyclerError::KeyOverlap { .. }
                | CyclerError::KeyMismatch { .. }
                | CyclerError::KeyNotFound(_)
                | CyclerError::KeyAlreadyExists(_)
        )
    }

    /// Check if this error is about the shape of the sequences rather than their keys
    pub fn is_shape_error(&self) -> bool {
        matches!(self, CyclerError::LengthMismatch { .. })
    }
}
