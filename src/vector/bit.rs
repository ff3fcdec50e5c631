//! # Bit Vector
//!
//! Nullable booleans at one bit per element. The value buffer uses the
//! same LSB-first packing as the validity bitmap, so both buffers move
//! through the bitmap routines everywhere — including split-and-transfer,
//! where an unaligned offset forces a byte-reassembling copy of both.

use eyre::Result;

use crate::error::VectorError;
use crate::memory::BufferAllocator;
use crate::types::{Field, MinorType};
use crate::vector::base::VectorBody;
use crate::vector::holder::{BitHolder, NullableBitHolder};

/// Nullable vector of booleans packed one bit per element.
#[derive(Debug)]
pub struct BitVector {
    body: VectorBody,
}

impl BitVector {
    /// Creates an empty vector; `allocate_new` must run before the first
    /// write.
    pub fn new(name: &str, allocator: &BufferAllocator) -> Self {
        Self {
            body: VectorBody::new(Field::new(name, MinorType::Bit), allocator.clone()),
        }
    }

    /// Fails with `NullValue` when the slot's validity bit is 0.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.body.get_bit_value(index)
    }

    /// `None` for a null slot.
    pub fn get_object(&self, index: usize) -> Option<bool> {
        self.body.bit_value_or_null(index)
    }

    pub fn get_holder(&self, index: usize, holder: &mut NullableBitHolder) {
        match self.body.bit_value_or_null(index) {
            Some(value) => {
                holder.is_set = 1;
                holder.value = value;
            }
            None => holder.is_set = 0,
        }
    }

    /// Non-growing write; fails with `IndexOutOfBounds` past the current
    /// value capacity.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.body.set_bit_value(index, value)
    }

    /// Growing write: doubles capacity until `index` fits.
    pub fn set_safe(&mut self, index: usize, value: bool) -> Result<()> {
        self.body.handle_safe(index)?;
        self.body.set_bit_value(index, value)
    }

    pub fn set_null(&mut self, index: usize) -> Result<()> {
        self.body.set_null(index)
    }

    pub fn set_holder(&mut self, index: usize, holder: &BitHolder) -> Result<()> {
        self.body.set_bit_value(index, holder.value)
    }

    pub fn set_holder_safe(&mut self, index: usize, holder: &BitHolder) -> Result<()> {
        self.body.handle_safe(index)?;
        self.body.set_bit_value(index, holder.value)
    }

    /// Rejects `is_set < 0`; `is_set == 0` clears the slot.
    pub fn set_nullable(&mut self, index: usize, holder: &NullableBitHolder) -> Result<()> {
        self.set_parts(index, holder.is_set, holder.value)
    }

    pub fn set_nullable_safe(&mut self, index: usize, holder: &NullableBitHolder) -> Result<()> {
        self.body.handle_safe(index)?;
        self.set_parts(index, holder.is_set, holder.value)
    }

    /// Disjoint form of the nullable-holder setter.
    pub fn set_parts(&mut self, index: usize, is_set: i32, value: bool) -> Result<()> {
        if is_set < 0 {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "holder is_set must be non-negative, got {is_set}"
            )));
        }
        if is_set > 0 {
            self.body.set_bit_value(index, value)
        } else {
            self.body.clear_validity(index)
        }
    }

    pub fn set_parts_safe(&mut self, index: usize, is_set: i32, value: bool) -> Result<()> {
        self.body.handle_safe(index)?;
        self.set_parts(index, is_set, value)
    }

    /// Cursor over the logical length.
    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.body.value_count()).map(move |index| self.get_object(index))
    }
}

crate::impl_value_vector!(BitVector);
crate::impl_fixed_width_ops!(BitVector);
