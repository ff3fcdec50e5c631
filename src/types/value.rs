//! Owned value forms for the types whose elements are not plain scalars.

use std::fmt;

use zerocopy::little_endian::I32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Decimal value as an unscaled 128-bit significand plus scale.
///
/// `unscaled = 123456, scale = 2` represents `1234.56`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalValue {
    pub unscaled: i128,
    pub scale: u8,
}

impl DecimalValue {
    pub fn new(unscaled: i128, scale: u8) -> Self {
        Self { unscaled, scale }
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled < 0
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.unscaled);
        }
        let digits = self.unscaled.unsigned_abs().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        let scale = self.scale as usize;
        if digits.len() <= scale {
            write!(f, "{sign}0.{digits:0>scale$}")
        } else {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int}.{frac}")
        }
    }
}

/// Day/millisecond interval, stored as two little-endian i32 halves in a
/// single 8-byte slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalDayTime {
    pub days: i32,
    pub milliseconds: i32,
}

impl IntervalDayTime {
    pub fn new(days: i32, milliseconds: i32) -> Self {
        Self { days, milliseconds }
    }
}

/// Wire layout of [`IntervalDayTime`]: `(i32 days, i32 milliseconds)`,
/// both little-endian.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Default)]
#[repr(C)]
pub(crate) struct RawIntervalDay {
    pub(crate) days: I32,
    pub(crate) milliseconds: I32,
}
