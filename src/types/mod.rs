//! # Vector Type System
//!
//! The canonical type descriptors for fixed-width vectors.
//!
//! ## Module Structure
//!
//! - `minor_type`: [`MinorType`] discriminant and per-type element width
//! - `field`: [`Field`] pairing a name with a `MinorType` plus decimal
//!   precision/scale metadata
//! - `value`: owned value forms handed across the API boundary
//!   ([`DecimalValue`], [`IntervalDayTime`])
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `MinorType` | storage-level type discriminant, width in bits |
//! | `Field` | immutable per-vector descriptor (name + type + metadata) |
//! | `DecimalValue` | unscaled i128 significand + scale |
//! | `IntervalDayTime` | (days, milliseconds) packed little-endian |

mod field;
mod minor_type;
pub(crate) mod value;

pub use field::Field;
pub use minor_type::MinorType;
pub use value::{DecimalValue, IntervalDayTime};
