//! # Vector Error Kinds
//!
//! This module defines the single typed error enum for the crate. Fallible
//! operations return `eyre::Result`; every failure path attaches a
//! [`VectorError`] value so callers can branch on the kind with
//! `Report::downcast_ref::<VectorError>()` instead of matching on message
//! text.
//!
//! ## Kinds
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | `NullValue` | `get` on a slot whose validity bit is 0 |
//! | `IndexOutOfBounds` | non-safe `set` past the current capacity |
//! | `InvalidArgument` | nullable holder with `is_set < 0`, decimal precision/scale violations, split bounds past `value_count` |
//! | `OversizedAllocation` | buffer sizing past `MAX_ALLOCATION_BYTES` |
//! | `OutOfMemory` | allocator budget exhausted |
//! | `TypeMismatch` | transfer or copy between different concrete vector types |

use thiserror::Error;

/// Typed error kinds surfaced by vector and buffer operations.
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("value at index {0} is null")]
    NullValue(usize),

    #[error("index {index} out of bounds for value capacity {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("requested allocation of {requested} bytes exceeds maximum of {max}")]
    OversizedAllocation { requested: usize, max: usize },

    #[error("allocator refused {requested} bytes ({used} of {limit} in use)")]
    OutOfMemory {
        requested: usize,
        used: usize,
        limit: usize,
    },

    #[error("vector type mismatch: cannot move {from} into {to}")]
    TypeMismatch { from: String, to: String },
}
