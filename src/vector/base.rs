//! # Fixed-Width Base Container
//!
//! `VectorBody` owns the two buffers behind every typed vector — the
//! validity bitmap and the value buffer — together with the logical value
//! count and the allocation sizing state. All lifecycle behavior lives
//! here: allocation, doubling growth, clear, transfer, split-and-transfer,
//! and the typed read/write paths the façades delegate to.
//!
//! ## Invariants
//!
//! - both buffers are present, or both absent (a cleared vector)
//! - `value_count <= value_capacity()`
//! - validity bits past `value_count` are zeroed by `set_value_count`
//! - element width comes from the field's minor type; width 1 bit selects
//!   the bit-packed value layout in every size computation
//!
//! ## Growth
//!
//! `handle_safe` doubles both buffers until the requested index fits,
//! failing with `OversizedAllocation` past the hard cap. A failed
//! reallocation releases any partial replacement and leaves the vector in
//! its prior state.

use eyre::Result;
use log::debug;
use smallvec::SmallVec;

use crate::bitmap;
use crate::config::{INITIAL_VALUE_ALLOCATION, MAX_ALLOCATION_BYTES};
use crate::error::VectorError;
use crate::memory::{BufferAllocator, ByteBuffer};
use crate::types::Field;
use crate::vector::native::Native;

pub(crate) struct VectorBody {
    field: Field,
    allocator: BufferAllocator,
    validity: Option<ByteBuffer>,
    values: Option<ByteBuffer>,
    value_count: usize,
    value_alloc_bytes: usize,
    validity_alloc_bytes: usize,
}

impl VectorBody {
    pub(crate) fn new(field: Field, allocator: BufferAllocator) -> Self {
        let width = field.minor_type().width_bits();
        Self {
            field,
            allocator,
            validity: None,
            values: None,
            value_count: 0,
            value_alloc_bytes: value_bytes(width, INITIAL_VALUE_ALLOCATION),
            validity_alloc_bytes: bitmap::bytes_for_bits(INITIAL_VALUE_ALLOCATION),
        }
    }

    pub(crate) fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    fn width_bits(&self) -> usize {
        self.field.minor_type().width_bits()
    }

    fn check_size(&self, requested: usize) -> Result<()> {
        eyre::ensure!(
            requested <= MAX_ALLOCATION_BYTES,
            VectorError::OversizedAllocation {
                requested,
                max: MAX_ALLOCATION_BYTES,
            }
        );
        Ok(())
    }

    /// Records buffer sizes for `capacity` elements without allocating.
    pub(crate) fn set_initial_capacity(&mut self, capacity: usize) -> Result<()> {
        let value_bytes = value_bytes(self.width_bits(), capacity);
        let validity_bytes = bitmap::bytes_for_bits(capacity);
        self.check_size(value_bytes)?;
        self.check_size(validity_bytes)?;
        self.value_alloc_bytes = value_bytes;
        self.validity_alloc_bytes = validity_bytes;
        Ok(())
    }

    /// Allocates both buffers at the recorded sizes. Any previous buffers
    /// are released first.
    pub(crate) fn allocate_new(&mut self) -> Result<()> {
        let value_bytes = self.value_alloc_bytes;
        let validity_bytes = self.validity_alloc_bytes;
        self.check_size(value_bytes)?;
        self.check_size(validity_bytes)?;
        self.clear();
        let values = self.allocator.buffer(value_bytes)?;
        // a failure here drops `values`, returning its bytes
        let validity = self.allocator.buffer(validity_bytes)?;
        self.values = Some(values);
        self.validity = Some(validity);
        self.value_count = 0;
        debug!(
            "allocated '{}': {} value bytes, {} validity bytes",
            self.field.name(),
            value_bytes,
            validity_bytes
        );
        Ok(())
    }

    pub(crate) fn allocate_with_capacity(&mut self, capacity: usize) -> Result<()> {
        self.set_initial_capacity(capacity)?;
        self.allocate_new()
    }

    /// Doubling growth of both buffers, preserving contents.
    pub(crate) fn realloc(&mut self) -> Result<()> {
        if self.values.is_none() || self.validity.is_none() {
            return self.allocate_new();
        }
        let mut new_value_bytes = self.value_alloc_bytes.saturating_mul(2);
        if new_value_bytes == 0 {
            new_value_bytes = value_bytes(self.width_bits(), INITIAL_VALUE_ALLOCATION);
        }
        let mut new_validity_bytes = self.validity_alloc_bytes.saturating_mul(2);
        if new_validity_bytes == 0 {
            new_validity_bytes = bitmap::bytes_for_bits(INITIAL_VALUE_ALLOCATION);
        }
        self.check_size(new_value_bytes)?;
        self.check_size(new_validity_bytes)?;

        let mut values = self.allocator.buffer(new_value_bytes)?;
        let mut validity = self.allocator.buffer(new_validity_bytes)?;
        if let (Some(old_values), Some(old_validity)) = (&self.values, &self.validity) {
            values.set_bytes(0, old_values.as_slice());
            validity.set_bytes(0, old_validity.as_slice());
        }
        debug!(
            "regrew '{}': {} -> {} value bytes",
            self.field.name(),
            self.value_alloc_bytes,
            new_value_bytes
        );
        self.values = Some(values);
        self.validity = Some(validity);
        self.value_alloc_bytes = new_value_bytes;
        self.validity_alloc_bytes = new_validity_bytes;
        Ok(())
    }

    /// Grows until `index` is addressable; the gate behind every `*_safe`
    /// setter.
    pub(crate) fn handle_safe(&mut self, index: usize) -> Result<()> {
        if self.values.is_none() {
            self.allocate_new()?;
        }
        while self.value_capacity() <= index {
            self.realloc()?;
        }
        Ok(())
    }

    /// Addressable element slots given the current buffers.
    pub(crate) fn value_capacity(&self) -> usize {
        let (Some(validity), Some(values)) = (&self.validity, &self.values) else {
            return 0;
        };
        let validity_capacity = validity.capacity() * 8;
        let width = self.width_bits();
        if width == 1 {
            validity_capacity
        } else {
            validity_capacity.min(values.capacity() * 8 / width)
        }
    }

    pub(crate) fn value_count(&self) -> usize {
        self.value_count
    }

    /// Fixes the logical length, growing if needed and zeroing validity
    /// bits from `count` up to the next byte boundary.
    pub(crate) fn set_value_count(&mut self, count: usize) -> Result<()> {
        if count > 0 {
            self.handle_safe(count - 1)?;
        }
        self.value_count = count;
        if let Some(validity) = &mut self.validity {
            let boundary = bitmap::bytes_for_bits(count) * 8;
            for bit in count..boundary {
                bitmap::clear_bit(validity, bit);
            }
        }
        Ok(())
    }

    /// Reading past `value_count` is defined as null.
    pub(crate) fn is_set(&self, index: usize) -> bool {
        if index >= self.value_count {
            return false;
        }
        match &self.validity {
            Some(validity) => bitmap::get_bit(validity, index),
            None => false,
        }
    }

    pub(crate) fn null_count(&self) -> usize {
        if self.value_count == 0 {
            return 0;
        }
        let Some(validity) = &self.validity else {
            return self.value_count;
        };
        let full_bytes = self.value_count / 8;
        let mut set = bitmap::pop_count(validity, full_bytes);
        let tail = self.value_count & 7;
        if tail != 0 {
            // bits past value_count in the last byte never count
            let mask = (1u8 << tail) - 1;
            set += (validity.byte_at(full_bytes) & mask).count_ones() as usize;
        }
        self.value_count - set
    }

    /// Releases both buffers and resets the logical length. Idempotent.
    pub(crate) fn clear(&mut self) {
        self.validity = None;
        self.values = None;
        self.value_count = 0;
    }

    pub(crate) fn buffer_size_for(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let validity_bytes = bitmap::bytes_for_bits(count);
        if self.width_bits() == 1 {
            2 * validity_bytes
        } else {
            validity_bytes + count * (self.width_bits() / 8)
        }
    }

    pub(crate) fn buffer_size(&self) -> usize {
        self.buffer_size_for(self.value_count)
    }

    /// Ordered `(validity, values)` pair for zero-copy consumers; empty
    /// when unallocated.
    pub(crate) fn field_buffers(&self) -> SmallVec<[&ByteBuffer; 2]> {
        let mut buffers = SmallVec::new();
        if let (Some(validity), Some(values)) = (&self.validity, &self.values) {
            buffers.push(validity);
            buffers.push(values);
        }
        buffers
    }

    fn compare_types(&self, target: &VectorBody) -> Result<()> {
        eyre::ensure!(
            self.field.type_equals(&target.field),
            VectorError::TypeMismatch {
                from: self.field.type_description(),
                to: target.field.type_description(),
            }
        );
        Ok(())
    }

    /// Moves both buffers into `target`, leaving this vector empty.
    pub(crate) fn transfer_to(&mut self, target: &mut VectorBody) -> Result<()> {
        self.compare_types(target)?;
        target.clear();
        target.validity = self.validity.take();
        target.values = self.values.take();
        target.value_count = self.value_count;
        target.value_alloc_bytes = self.value_alloc_bytes;
        target.validity_alloc_bytes = self.validity_alloc_bytes;
        self.value_count = 0;
        debug!(
            "transferred '{}' -> '{}'",
            self.field.name(),
            target.field.name()
        );
        Ok(())
    }

    /// Derives `[start, start + length)` into `target`: value bytes are
    /// sliced zero-copy for whole-byte widths; bitmaps are sliced when the
    /// offset is byte-aligned and reassembled byte-by-byte otherwise.
    pub(crate) fn split_and_transfer_to(
        &self,
        start: usize,
        length: usize,
        target: &mut VectorBody,
    ) -> Result<()> {
        self.compare_types(target)?;
        eyre::ensure!(
            start + length <= self.value_count,
            VectorError::InvalidArgument(format!(
                "split range [{start}, {}) exceeds value count {}",
                start + length,
                self.value_count
            ))
        );
        target.clear();
        if length > 0 {
            let (Some(validity), Some(values)) = (&self.validity, &self.values) else {
                eyre::bail!(VectorError::InvalidArgument(
                    "split on an unallocated vector".into()
                ));
            };
            target.validity = Some(self.split_bitmap_buffer(validity, start, length)?);
            let width = self.width_bits();
            if width == 1 {
                target.values = Some(self.split_bitmap_buffer(values, start, length)?);
            } else {
                let width_bytes = width / 8;
                target.values = Some(values.slice(start * width_bytes, length * width_bytes));
            }
            target.value_alloc_bytes = target.values.as_ref().map_or(0, ByteBuffer::capacity);
            target.validity_alloc_bytes = target.validity.as_ref().map_or(0, ByteBuffer::capacity);
        }
        target.set_value_count(length)
    }

    fn split_bitmap_buffer(
        &self,
        source: &ByteBuffer,
        start: usize,
        length: usize,
    ) -> Result<ByteBuffer> {
        let target_bytes = bitmap::bytes_for_bits(length);
        if start % 8 == 0 {
            Ok(source.slice(bitmap::byte_index(start), target_bytes))
        } else {
            let mut fresh = self.allocator.buffer(target_bytes)?;
            bitmap::copy_offset_range(source, start, length, self.value_count, &mut fresh);
            Ok(fresh)
        }
    }

    /// Copies one slot between same-typed vectors without growing. A null
    /// source slot leaves the destination validity bit untouched; callers
    /// reusing slots must `set_null` first.
    pub(crate) fn copy_from(
        &mut self,
        source: &VectorBody,
        from_index: usize,
        to_index: usize,
    ) -> Result<()> {
        source.compare_types(self)?;
        if !source.is_set(from_index) {
            return Ok(());
        }
        let capacity = self.value_capacity();
        eyre::ensure!(
            to_index < capacity,
            VectorError::IndexOutOfBounds {
                index: to_index,
                capacity,
            }
        );
        let width = self.width_bits();
        if width == 1 {
            let bit = source
                .values
                .as_ref()
                .map(|values| bitmap::get_bit(values, from_index))
                .unwrap_or(false);
            if let Some(values) = &mut self.values {
                bitmap::set_bit_to(values, to_index, bit);
            }
        } else {
            let width_bytes = width / 8;
            let mut slot = [0u8; 16];
            let slot = &mut slot[..width_bytes];
            if let Some(values) = &source.values {
                values.get_bytes(from_index * width_bytes, slot);
            }
            if let Some(values) = &mut self.values {
                values.set_bytes(to_index * width_bytes, slot);
            }
        }
        if let Some(validity) = &mut self.validity {
            bitmap::set_bit(validity, to_index);
        }
        Ok(())
    }

    pub(crate) fn copy_from_safe(
        &mut self,
        source: &VectorBody,
        from_index: usize,
        to_index: usize,
    ) -> Result<()> {
        self.handle_safe(to_index)?;
        self.copy_from(source, from_index, to_index)
    }

    // ---- typed element paths -------------------------------------------

    pub(crate) fn get_value<T: Native>(&self, index: usize) -> Result<T> {
        eyre::ensure!(self.is_set(index), VectorError::NullValue(index));
        let Some(values) = &self.values else {
            eyre::bail!(VectorError::NullValue(index));
        };
        Ok(values.read::<T>(index * T::WIDTH))
    }

    pub(crate) fn value_or_null<T: Native>(&self, index: usize) -> Option<T> {
        if !self.is_set(index) {
            return None;
        }
        self.values
            .as_ref()
            .map(|values| values.read::<T>(index * T::WIDTH))
    }

    /// Non-growing write; the index must already be addressable.
    pub(crate) fn set_value<T: Native>(&mut self, index: usize, value: T) -> Result<()> {
        let capacity = self.value_capacity();
        eyre::ensure!(
            index < capacity,
            VectorError::IndexOutOfBounds { index, capacity }
        );
        if let Some(values) = &mut self.values {
            values.write(index * T::WIDTH, value);
        }
        if let Some(validity) = &mut self.validity {
            bitmap::set_bit(validity, index);
        }
        Ok(())
    }

    pub(crate) fn set_null(&mut self, index: usize) -> Result<()> {
        self.handle_safe(index)?;
        if let Some(validity) = &mut self.validity {
            bitmap::clear_bit(validity, index);
        }
        Ok(())
    }

    /// Non-growing validity clear for the explicit-null setter forms.
    pub(crate) fn clear_validity(&mut self, index: usize) -> Result<()> {
        let capacity = self.value_capacity();
        eyre::ensure!(
            index < capacity,
            VectorError::IndexOutOfBounds { index, capacity }
        );
        if let Some(validity) = &mut self.validity {
            bitmap::clear_bit(validity, index);
        }
        Ok(())
    }

    /// Zero-copy view of one element's bytes; whole-byte widths only.
    pub(crate) fn slice_value(&self, index: usize) -> Result<ByteBuffer> {
        eyre::ensure!(self.is_set(index), VectorError::NullValue(index));
        let Some(values) = &self.values else {
            eyre::bail!(VectorError::NullValue(index));
        };
        let width_bytes = self.width_bits() / 8;
        Ok(values.slice(index * width_bytes, width_bytes))
    }

    /// Non-growing raw-slot write; `bytes` must be exactly one element
    /// wide.
    pub(crate) fn set_value_bytes(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        let capacity = self.value_capacity();
        eyre::ensure!(
            index < capacity,
            VectorError::IndexOutOfBounds { index, capacity }
        );
        if let Some(values) = &mut self.values {
            values.set_bytes(index * bytes.len(), bytes);
        }
        if let Some(validity) = &mut self.validity {
            bitmap::set_bit(validity, index);
        }
        Ok(())
    }

    // ---- bit-packed element paths (1-bit width) ------------------------

    pub(crate) fn get_bit_value(&self, index: usize) -> Result<bool> {
        eyre::ensure!(self.is_set(index), VectorError::NullValue(index));
        let Some(values) = &self.values else {
            eyre::bail!(VectorError::NullValue(index));
        };
        Ok(bitmap::get_bit(values, index))
    }

    pub(crate) fn bit_value_or_null(&self, index: usize) -> Option<bool> {
        if !self.is_set(index) {
            return None;
        }
        self.values
            .as_ref()
            .map(|values| bitmap::get_bit(values, index))
    }

    pub(crate) fn set_bit_value(&mut self, index: usize, value: bool) -> Result<()> {
        let capacity = self.value_capacity();
        eyre::ensure!(
            index < capacity,
            VectorError::IndexOutOfBounds { index, capacity }
        );
        if let Some(values) = &mut self.values {
            bitmap::set_bit_to(values, index, value);
        }
        if let Some(validity) = &mut self.validity {
            bitmap::set_bit(validity, index);
        }
        Ok(())
    }
}

impl std::fmt::Debug for VectorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorBody")
            .field("field", &self.field)
            .field("value_count", &self.value_count)
            .field("value_capacity", &self.value_capacity())
            .finish()
    }
}

fn value_bytes(width_bits: usize, capacity: usize) -> usize {
    if width_bits == 1 {
        bitmap::bytes_for_bits(capacity)
    } else {
        // saturate so absurd capacities land in the size check
        capacity.saturating_mul(width_bits / 8)
    }
}
