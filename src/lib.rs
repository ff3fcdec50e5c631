//! # colvec - Columnar In-Memory Tabular Data Core
//!
//! colvec provides the data-plane primitive that schemas, record batches
//! and serialization layers are built on: typed fixed-width nullable
//! column vectors. Every vector owns a value buffer and a validity bitmap
//! (bit `i` = 1 iff element `i` is non-null) obtained from a budgeted,
//! reference-counted allocator. This implementation prioritizes:
//!
//! - **Zero-copy movement**: transfer and byte-aligned splits move or
//!   share buffers instead of copying elements
//! - **One base, thin façades**: all lifecycle and growth semantics live
//!   in a single container; the typed surfaces are stamped out per
//!   element type
//! - **Deterministic layout**: little-endian scalars and LSB-first bit
//!   packing, directly exchangeable with wire formats above this crate
//!
//! ## Quick Start
//!
//! ```ignore
//! use colvec::memory::BufferAllocator;
//! use colvec::{FixedWidthVector, IntVector, ValueVector};
//!
//! let allocator = BufferAllocator::new();
//! let mut ids = IntVector::new("id", &allocator);
//! ids.allocate_new()?;
//! ids.set_safe(0, 7)?;
//! ids.set_null(1)?;
//! ids.set_value_count(2)?;
//! assert_eq!(ids.get_object(0), Some(7));
//! assert_eq!(ids.null_count(), 1);
//!
//! let mut pair = ids.transfer_pair("id2", &allocator);
//! pair.transfer()?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Typed Façades (Int, Float8, Bit, …)   │
//! ├─────────────────────────────────────────┤
//! │  Base Container (alloc/grow/transfer)   │
//! ├───────────────────┬─────────────────────┤
//! │  Bitmap Routines  │   Native LE Codec   │
//! ├───────────────────┴─────────────────────┤
//! │   ByteBuffer (refcounted byte views)    │
//! ├─────────────────────────────────────────┤
//! │   BufferAllocator (budget accounting)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`memory`]: budgeted allocator and refcounted byte buffers
//! - [`bitmap`]: LSB-first bit packing, popcount, unaligned range copy
//! - [`types`]: `MinorType`, `Field`, owned decimal/interval values
//! - [`vector`]: the base container and the typed façade family
//! - [`config`]: allocation sizing constants
//!
//! ## Error Handling
//!
//! Fallible operations return `eyre::Result`; every failure carries a
//! typed [`VectorError`] recoverable with `downcast_ref` (null reads,
//! out-of-bounds writes, oversized or refused allocations, type
//! mismatches).
//!
//! ## Concurrency
//!
//! Vectors are single-threaded mutable objects; cross-thread use needs
//! external synchronization. The allocator's accounting is atomic and its
//! handles can be shared freely.

#[macro_use]
mod macros;

pub mod bitmap;
pub mod config;
pub mod error;
pub mod memory;
pub mod types;
pub mod vector;

pub use error::VectorError;
pub use memory::{BufferAllocator, ByteBuffer};
pub use types::{DecimalValue, Field, IntervalDayTime, MinorType};
pub use vector::{
    BigIntVector, BitVector, DateDayVector, DateMilliVector, DecimalVector, FixedWidthVector,
    Float4Vector, Float8Vector, IntVector, IntervalDayVector, IntervalYearVector, SmallIntVector,
    TimeMicroVector, TimeMilliVector, TimeNanoVector, TimeSecVector, TimeStampMicroVector,
    TimeStampMilliVector, TimeStampNanoVector, TimeStampSecVector, TinyIntVector, TransferPair,
    UInt1Vector, UInt2Vector, UInt4Vector, UInt8Vector, ValueVector,
};
