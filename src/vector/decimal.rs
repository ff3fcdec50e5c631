//! # Decimal Vector
//!
//! Fixed 16-byte elements holding a little-endian two's-complement
//! significand; precision and scale ride on the vector's field and are
//! validated once at construction. Writes check that the value's scale
//! matches the vector and that the significand fits the declared
//! precision.
//!
//! `get` hands back a zero-copy 16-byte view of the slot; `get_object`
//! decodes the owned [`DecimalValue`] form.

use eyre::Result;

use crate::error::VectorError;
use crate::memory::{BufferAllocator, ByteBuffer};
use crate::types::{DecimalValue, Field};
use crate::vector::base::VectorBody;
use crate::vector::holder::{DecimalHolder, NullableDecimalHolder};

const TYPE_WIDTH: usize = 16;

/// Nullable vector of 16-byte decimals with fixed precision and scale.
#[derive(Debug)]
pub struct DecimalVector {
    body: VectorBody,
    precision: u8,
    scale: u8,
}

impl DecimalVector {
    /// Creates an empty decimal vector; fails with `InvalidArgument` when
    /// `precision ∉ [1, 38]` or `scale > precision`.
    pub fn new(
        name: &str,
        allocator: &BufferAllocator,
        precision: u8,
        scale: u8,
    ) -> Result<Self> {
        let field = Field::decimal(name, precision, scale)?;
        Ok(Self {
            body: VectorBody::new(field, allocator.clone()),
            precision,
            scale,
        })
    }

    pub(crate) fn from_field(field: Field, allocator: BufferAllocator) -> Self {
        let precision = field.precision().unwrap_or(1);
        let scale = field.scale().unwrap_or(0);
        Self {
            body: VectorBody::new(field, allocator),
            precision,
            scale,
        }
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Zero-copy 16-byte view of the slot; fails with `NullValue` on a
    /// null slot. Never allocates.
    pub fn get(&self, index: usize) -> Result<ByteBuffer> {
        self.body.slice_value(index)
    }

    /// Decoded owned form; `None` for a null slot.
    pub fn get_object(&self, index: usize) -> Option<DecimalValue> {
        self.body
            .value_or_null::<i128>(index)
            .map(|unscaled| DecimalValue::new(unscaled, self.scale))
    }

    pub fn get_holder(&self, index: usize, holder: &mut NullableDecimalHolder) {
        match self.body.slice_value(index) {
            Ok(slot) => {
                holder.is_set = 1;
                holder.buffer = Some(slot);
                holder.start = 0;
                holder.precision = self.precision;
                holder.scale = self.scale;
            }
            Err(_) => holder.is_set = 0,
        }
    }

    fn check_value(&self, value: &DecimalValue) -> Result<()> {
        if value.scale != self.scale {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "decimal scale {} does not match vector scale {}",
                value.scale, self.scale
            )));
        }
        let bound = 10u128.pow(self.precision as u32);
        if value.unscaled.unsigned_abs() >= bound {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "unscaled value {} exceeds precision {}",
                value.unscaled, self.precision
            )));
        }
        Ok(())
    }

    /// Non-growing write; validates scale and precision first.
    pub fn set(&mut self, index: usize, value: DecimalValue) -> Result<()> {
        self.check_value(&value)?;
        self.body.set_value::<i128>(index, value.unscaled)
    }

    pub fn set_safe(&mut self, index: usize, value: DecimalValue) -> Result<()> {
        self.check_value(&value)?;
        self.body.handle_safe(index)?;
        self.body.set_value::<i128>(index, value.unscaled)
    }

    pub fn set_null(&mut self, index: usize) -> Result<()> {
        self.body.set_null(index)
    }

    /// Copies 16 raw bytes from `buffer` at `start` into the slot.
    pub fn set_bytes_at(&mut self, index: usize, start: usize, buffer: &ByteBuffer) -> Result<()> {
        let mut slot = [0u8; TYPE_WIDTH];
        buffer.get_bytes(start, &mut slot);
        self.body.set_value_bytes(index, &slot)
    }

    pub fn set_bytes_at_safe(
        &mut self,
        index: usize,
        start: usize,
        buffer: &ByteBuffer,
    ) -> Result<()> {
        self.body.handle_safe(index)?;
        self.set_bytes_at(index, start, buffer)
    }

    pub fn set_holder(&mut self, index: usize, holder: &DecimalHolder) -> Result<()> {
        let Some(buffer) = &holder.buffer else {
            eyre::bail!(VectorError::InvalidArgument(
                "decimal holder carries no buffer".into()
            ));
        };
        let mut slot = [0u8; TYPE_WIDTH];
        buffer.get_bytes(holder.start, &mut slot);
        self.body.set_value_bytes(index, &slot)
    }

    pub fn set_holder_safe(&mut self, index: usize, holder: &DecimalHolder) -> Result<()> {
        self.body.handle_safe(index)?;
        self.set_holder(index, holder)
    }

    /// Rejects `is_set < 0`; `is_set == 0` clears the slot.
    pub fn set_nullable(&mut self, index: usize, holder: &NullableDecimalHolder) -> Result<()> {
        if holder.is_set < 0 {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "holder is_set must be non-negative, got {}",
                holder.is_set
            )));
        }
        if holder.is_set > 0 {
            let Some(buffer) = &holder.buffer else {
                eyre::bail!(VectorError::InvalidArgument(
                    "decimal holder carries no buffer".into()
                ));
            };
            let mut slot = [0u8; TYPE_WIDTH];
            buffer.get_bytes(holder.start, &mut slot);
            self.body.set_value_bytes(index, &slot)
        } else {
            self.body.clear_validity(index)
        }
    }

    pub fn set_nullable_safe(
        &mut self,
        index: usize,
        holder: &NullableDecimalHolder,
    ) -> Result<()> {
        self.body.handle_safe(index)?;
        self.set_nullable(index, holder)
    }

    /// Disjoint form of the nullable-holder setter over raw slot bytes.
    pub fn set_parts(
        &mut self,
        index: usize,
        is_set: i32,
        start: usize,
        buffer: &ByteBuffer,
    ) -> Result<()> {
        if is_set < 0 {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "holder is_set must be non-negative, got {is_set}"
            )));
        }
        if is_set > 0 {
            self.set_bytes_at(index, start, buffer)
        } else {
            self.body.clear_validity(index)
        }
    }

    pub fn set_parts_safe(
        &mut self,
        index: usize,
        is_set: i32,
        start: usize,
        buffer: &ByteBuffer,
    ) -> Result<()> {
        self.body.handle_safe(index)?;
        self.set_parts(index, is_set, start, buffer)
    }

    /// Cursor over the logical length in decoded form.
    pub fn iter(&self) -> impl Iterator<Item = Option<DecimalValue>> + '_ {
        (0..self.body.value_count()).map(move |index| self.get_object(index))
    }
}

crate::impl_value_vector!(DecimalVector);

impl crate::vector::FixedWidthVector for DecimalVector {
    fn new_sibling(&self, name: &str, allocator: &BufferAllocator) -> Self {
        Self::from_field(self.body.field().with_name(name), allocator.clone())
    }

    fn transfer_to(&mut self, target: &mut Self) -> Result<()> {
        self.body.transfer_to(&mut target.body)
    }

    fn split_and_transfer_to(&self, start: usize, length: usize, target: &mut Self) -> Result<()> {
        self.body.split_and_transfer_to(start, length, &mut target.body)
    }

    fn copy_from(&mut self, from: &Self, from_index: usize, to_index: usize) -> Result<()> {
        self.body.copy_from(&from.body, from_index, to_index)
    }

    fn copy_from_safe(&mut self, from: &Self, from_index: usize, to_index: usize) -> Result<()> {
        self.body.copy_from_safe(&from.body, from_index, to_index)
    }
}
