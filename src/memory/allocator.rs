//! # Budgeted Buffer Allocator
//!
//! Hands out zeroed [`ByteBuffer`]s and accounts for every live byte with
//! lock-free atomic counters. Allocations that would push usage past the
//! budget fail immediately with `OutOfMemory`; nothing is queued or
//! retried.
//!
//! ## Accounting
//!
//! `allocate` reserves optimistically with `fetch_add` and rolls back on
//! refusal, so concurrent allocators never under-count. Bytes return to
//! the account when the last `ByteBuffer` view of a region is dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use eyre::Result;
use log::trace;

use crate::error::VectorError;
use crate::memory::buffer::{ByteBuffer, Region};

/// Shared accounting state between an allocator handle and the regions it
/// has produced.
pub(crate) struct Account {
    limit: usize,
    used: AtomicUsize,
}

impl Account {
    pub(crate) fn release(&self, bytes: usize) {
        self.used.fetch_sub(bytes, Ordering::Relaxed);
    }
}

/// Budgeted source of reference-counted byte buffers.
///
/// Cheap to clone; clones share the same budget and accounting.
#[derive(Clone)]
pub struct BufferAllocator {
    account: Arc<Account>,
}

impl BufferAllocator {
    /// Creates an allocator with an unbounded budget.
    pub fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Creates an allocator that refuses to hold more than `limit` live
    /// bytes at once.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            account: Arc::new(Account {
                limit,
                used: AtomicUsize::new(0),
            }),
        }
    }

    /// Allocates a zeroed buffer of `size` bytes.
    pub fn buffer(&self, size: usize) -> Result<ByteBuffer> {
        let prev = self.account.used.fetch_add(size, Ordering::Relaxed);
        if prev.saturating_add(size) > self.account.limit {
            self.account.used.fetch_sub(size, Ordering::Relaxed);
            eyre::bail!(VectorError::OutOfMemory {
                requested: size,
                used: prev,
                limit: self.account.limit,
            });
        }
        trace!("allocated buffer of {} bytes ({} in use)", size, prev + size);
        Ok(ByteBuffer::from_region(Region::allocate(
            size,
            Arc::clone(&self.account),
        )))
    }

    /// Bytes currently held by live buffers from this allocator.
    pub fn allocated_bytes(&self) -> usize {
        self.account.used.load(Ordering::Relaxed)
    }

    pub fn limit(&self) -> usize {
        self.account.limit
    }
}

impl Default for BufferAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BufferAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferAllocator")
            .field("limit", &self.account.limit)
            .field("used", &self.allocated_bytes())
            .finish()
    }
}
