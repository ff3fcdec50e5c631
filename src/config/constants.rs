//! # Allocation Constants
//!
//! Sizing defaults for vector buffers. All buffer growth in the crate is
//! derived from these two values.
//!
//! ```text
//! INITIAL_VALUE_ALLOCATION (3970 elements)
//!       │
//!       └─> default element capacity of a freshly allocated vector; the
//!           widest element (16-byte decimal) lands the first value buffer
//!           just under a 64 KiB allocation
//!
//! MAX_ALLOCATION_BYTES (2^31 - 8)
//!       │
//!       └─> hard cap for a single buffer; requests past this fail with
//!           OversizedAllocation before the allocator is consulted.
//!           Doubling growth checks against it on every reallocation.
//! ```
//!
//! ## Usage
//!
//! Import constants from this module rather than defining them locally:
//!
//! ```ignore
//! use crate::config::{INITIAL_VALUE_ALLOCATION, MAX_ALLOCATION_BYTES};
//! ```

/// Default element capacity for a vector allocated without an explicit
/// initial capacity.
pub const INITIAL_VALUE_ALLOCATION: usize = 3970;

/// Hard upper bound in bytes for any single buffer allocation.
pub const MAX_ALLOCATION_BYTES: usize = (1 << 31) - 8;

// The widest fixed element is 16 bytes; the default allocation must stay
// far below the hard cap so the first doubling cannot overflow it.
const _: () = assert!(INITIAL_VALUE_ALLOCATION * 16 < MAX_ALLOCATION_BYTES / 2);
