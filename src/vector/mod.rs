//! # Fixed-Width Nullable Vectors
//!
//! One typed façade per element type, all sharing the base container in
//! [`base`]. A vector owns a validity bitmap and a value buffer; element
//! `i` is null iff validity bit `i` is 0.
//!
//! ## Module Structure
//!
//! - `native`: element trait (width + little-endian codec)
//! - `base`: the shared container (allocation, growth, transfer, split)
//! - `primitive`: integer and float façades
//! - `temporal`: date, time, timestamp and interval façades
//! - `decimal`: 16-byte decimal façade
//! - `bit`: 1-bit boolean façade
//! - `holder`: by-value `{is_set, value}` structs for allocation-free moves
//! - `transfer`: the transfer-pair capability
//!
//! ## Usage
//!
//! ```ignore
//! use colvec::memory::BufferAllocator;
//! use colvec::vector::{IntVector, ValueVector};
//!
//! let allocator = BufferAllocator::new();
//! let mut ints = IntVector::new("id", &allocator);
//! ints.allocate_new()?;
//! ints.set_safe(0, 42)?;
//! ints.set_null(1)?;
//! ints.set_value_count(2)?;
//! assert_eq!(ints.get_object(0), Some(42));
//! assert_eq!(ints.null_count(), 1);
//! ```

use std::any::Any;

use eyre::Result;
use smallvec::SmallVec;

use crate::error::VectorError;
use crate::memory::{BufferAllocator, ByteBuffer};
use crate::types::{Field, MinorType};

pub(crate) mod base;
pub mod bit;
pub mod decimal;
pub mod holder;
pub mod native;
pub mod primitive;
pub mod temporal;
pub mod transfer;

pub use bit::BitVector;
pub use decimal::DecimalVector;
pub use holder::*;
pub use native::Native;
pub use primitive::{
    BigIntVector, Float4Vector, Float8Vector, IntVector, SmallIntVector, TinyIntVector,
    UInt1Vector, UInt2Vector, UInt4Vector, UInt8Vector,
};
pub use temporal::{
    DateDayVector, DateMilliVector, IntervalDayVector, IntervalYearVector, TimeMicroVector,
    TimeMilliVector, TimeNanoVector, TimeSecVector, TimeStampMicroVector, TimeStampMilliVector,
    TimeStampNanoVector, TimeStampSecVector,
};
pub use transfer::TransferPair;

/// Object-safe surface shared by every vector: lifecycle, sizing and
/// nullability, but no typed element access. This is what record-batch
/// and reader layers above this crate hold vectors through.
pub trait ValueVector: Any {
    fn field(&self) -> &Field;
    fn minor_type(&self) -> MinorType;

    /// Allocates both buffers at the recorded initial capacity.
    fn allocate_new(&mut self) -> Result<()>;
    fn allocate_with_capacity(&mut self, capacity: usize) -> Result<()>;
    /// Records buffer sizes without allocating.
    fn set_initial_capacity(&mut self, capacity: usize) -> Result<()>;

    fn value_capacity(&self) -> usize;
    fn value_count(&self) -> usize;
    fn set_value_count(&mut self, count: usize) -> Result<()>;

    fn is_set(&self, index: usize) -> bool;
    fn null_count(&self) -> usize;

    fn buffer_size(&self) -> usize;
    fn buffer_size_for(&self, count: usize) -> usize;
    /// Ordered `(validity, values)` pair; empty when unallocated.
    fn field_buffers(&self) -> SmallVec<[&ByteBuffer; 2]>;

    /// Releases both buffers; idempotent.
    fn clear(&mut self);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn name(&self) -> &str {
        self.field().name()
    }

    fn is_null(&self, index: usize) -> bool {
        !self.is_set(index)
    }

    fn is_empty(&self) -> bool {
        self.value_count() == 0
    }
}

/// Same-concrete-type operations: buffer movement and slot copies between
/// siblings, plus the transfer-pair constructors.
pub trait FixedWidthVector: ValueVector + Sized {
    /// Fresh empty vector of the same type under a new name/allocator.
    fn new_sibling(&self, name: &str, allocator: &BufferAllocator) -> Self;

    /// Moves both buffers into `target`; this vector ends empty.
    fn transfer_to(&mut self, target: &mut Self) -> Result<()>;

    /// Derives `[start, start + length)` into `target`, sharing storage
    /// where offsets are byte-aligned.
    fn split_and_transfer_to(&self, start: usize, length: usize, target: &mut Self) -> Result<()>;

    /// Copies one slot; a null source slot leaves the destination validity
    /// bit untouched.
    fn copy_from(&mut self, from: &Self, from_index: usize, to_index: usize) -> Result<()>;

    fn copy_from_safe(&mut self, from: &Self, from_index: usize, to_index: usize) -> Result<()>;

    /// Binds this vector to a freshly constructed sibling target.
    fn transfer_pair<'a>(
        &'a mut self,
        name: &str,
        allocator: &BufferAllocator,
    ) -> TransferPair<'a, Self> {
        let target = self.new_sibling(name, allocator);
        TransferPair::with_owned_target(self, target)
    }

    /// Binds this vector to a caller-supplied target, checking the
    /// concrete type once at construction.
    fn make_transfer_pair<'a>(
        &'a mut self,
        target: &'a mut dyn ValueVector,
    ) -> Result<TransferPair<'a, Self>> {
        let to = target.field().type_description();
        match ValueVector::as_any_mut(target).downcast_mut::<Self>() {
            Some(concrete) => Ok(TransferPair::with_borrowed_target(self, concrete)),
            None => Err(eyre::Report::new(VectorError::TypeMismatch {
                from: self.field().type_description(),
                to,
            })),
        }
    }
}
