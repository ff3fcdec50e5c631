//! # Transfer Pair
//!
//! A capability binding a source vector to a target of the same concrete
//! type. The type is checked once when the pair is made (the
//! caller-supplied form downcasts and fails with `TypeMismatch`); after
//! that the four operations need no further checks on the façade type.
//!
//! The target is either owned (freshly built under a new name/allocator)
//! or borrowed from the caller.

use eyre::Result;

use crate::vector::FixedWidthVector;

enum Target<'a, V> {
    Owned(V),
    Borrowed(&'a mut V),
}

/// Source/target binding for buffer movement between sibling vectors.
pub struct TransferPair<'a, V: FixedWidthVector> {
    source: &'a mut V,
    target: Target<'a, V>,
}

impl<'a, V: FixedWidthVector> std::fmt::Debug for TransferPair<'a, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferPair").finish_non_exhaustive()
    }
}

impl<'a, V: FixedWidthVector> TransferPair<'a, V> {
    pub(crate) fn with_owned_target(source: &'a mut V, target: V) -> Self {
        Self {
            source,
            target: Target::Owned(target),
        }
    }

    pub(crate) fn with_borrowed_target(source: &'a mut V, target: &'a mut V) -> Self {
        Self {
            source,
            target: Target::Borrowed(target),
        }
    }

    pub fn target(&self) -> &V {
        match &self.target {
            Target::Owned(v) => v,
            Target::Borrowed(v) => v,
        }
    }

    pub fn target_mut(&mut self) -> &mut V {
        match &mut self.target {
            Target::Owned(v) => v,
            Target::Borrowed(v) => v,
        }
    }

    /// Moves the source's buffers into the target; the source ends empty.
    pub fn transfer(&mut self) -> Result<()> {
        let Self { source, target } = self;
        match target {
            Target::Owned(v) => source.transfer_to(v),
            Target::Borrowed(v) => source.transfer_to(v),
        }
    }

    /// Derives `[start, start + length)` of the source into the target.
    pub fn split_and_transfer(&mut self, start: usize, length: usize) -> Result<()> {
        let Self { source, target } = self;
        match target {
            Target::Owned(v) => source.split_and_transfer_to(start, length, v),
            Target::Borrowed(v) => source.split_and_transfer_to(start, length, v),
        }
    }

    /// Copies one source slot into the target, growing the target as
    /// needed.
    pub fn copy_value_safe(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        let Self { source, target } = self;
        let source: &V = source;
        match target {
            Target::Owned(v) => v.copy_from_safe(source, from_index, to_index),
            Target::Borrowed(v) => v.copy_from_safe(source, from_index, to_index),
        }
    }

    /// Hands the target out of an owning pair; `None` when it was
    /// caller-supplied.
    pub fn into_target(self) -> Option<V> {
        match self.target {
            Target::Owned(v) => Some(v),
            Target::Borrowed(_) => None,
        }
    }
}
