//! # Value Holders
//!
//! Small by-value structs used to move optional elements between vectors
//! and reader/writer layers without heap allocation. Each element type
//! gets a plain `{value}` holder and a `{is_set, value}` nullable holder;
//! `is_set` keeps the integer wire convention (1 = set, 0 = null,
//! negative rejected).
//!
//! The decimal holders carry a buffer reference and a byte offset instead
//! of an owned value, so a 16-byte slot can be forwarded without decoding.

use crate::memory::ByteBuffer;
use crate::types::IntervalDayTime;

crate::declare_holders!(Bit, bool);
crate::declare_holders!(TinyInt, i8);
crate::declare_holders!(UInt1, u8);
crate::declare_holders!(SmallInt, i16);
crate::declare_holders!(UInt2, u16);
crate::declare_holders!(Int, i32);
crate::declare_holders!(UInt4, u32);
crate::declare_holders!(BigInt, i64);
crate::declare_holders!(UInt8, u64);
crate::declare_holders!(Float4, f32);
crate::declare_holders!(Float8, f64);
crate::declare_holders!(DateDay, i32);
crate::declare_holders!(DateMilli, i64);
crate::declare_holders!(TimeSec, i32);
crate::declare_holders!(TimeMilli, i32);
crate::declare_holders!(TimeMicro, i64);
crate::declare_holders!(TimeNano, i64);
crate::declare_holders!(TimeStampSec, i64);
crate::declare_holders!(TimeStampMilli, i64);
crate::declare_holders!(TimeStampMicro, i64);
crate::declare_holders!(TimeStampNano, i64);
crate::declare_holders!(IntervalYear, i32);
crate::declare_holders!(IntervalDay, IntervalDayTime);

/// Holder for a known-set decimal slot: a view into the owning buffer.
#[derive(Debug, Clone, Default)]
pub struct DecimalHolder {
    pub buffer: Option<ByteBuffer>,
    pub start: usize,
    pub precision: u8,
    pub scale: u8,
}

/// Holder for an optional decimal slot.
#[derive(Debug, Clone, Default)]
pub struct NullableDecimalHolder {
    pub is_set: i32,
    pub buffer: Option<ByteBuffer>,
    pub start: usize,
    pub precision: u8,
    pub scale: u8,
}
