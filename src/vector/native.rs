//! # Native Element Types
//!
//! The [`Native`] trait fixes how each scalar element moves in and out of
//! a value buffer: a compile-time width plus little-endian read/write.
//! All multi-byte scalars are little-endian regardless of host order, so
//! buffers are directly exchangeable with the wire layout above this
//! crate.

use zerocopy::little_endian::I32;
use zerocopy::{FromBytes, IntoBytes};

use crate::types::value::RawIntervalDay;
use crate::types::IntervalDayTime;

/// Fixed-width scalar that can be stored in a value buffer.
pub trait Native: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Element width in bytes.
    const WIDTH: usize;

    /// Writes `self` little-endian into `dst` (exactly `WIDTH` bytes).
    fn write_le(self, dst: &mut [u8]);

    /// Reads a little-endian value from `src` (exactly `WIDTH` bytes).
    fn read_le(src: &[u8]) -> Self;
}

macro_rules! impl_native {
    ($($ty:ty => $width:expr),+ $(,)?) => {
        $(
            impl Native for $ty {
                const WIDTH: usize = $width;

                #[inline]
                fn write_le(self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn read_le(src: &[u8]) -> Self {
                    let mut bytes = [0u8; $width];
                    bytes.copy_from_slice(&src[..$width]);
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )+
    };
}

impl_native! {
    i8 => 1, u8 => 1,
    i16 => 2, u16 => 2,
    i32 => 4, u32 => 4, f32 => 4,
    i64 => 8, u64 => 8, f64 => 8,
    i128 => 16,
}

impl Native for IntervalDayTime {
    const WIDTH: usize = 8;

    #[inline]
    fn write_le(self, dst: &mut [u8]) {
        let raw = RawIntervalDay {
            days: I32::new(self.days),
            milliseconds: I32::new(self.milliseconds),
        };
        dst.copy_from_slice(raw.as_bytes());
    }

    #[inline]
    fn read_le(src: &[u8]) -> Self {
        let raw = RawIntervalDay::read_from_bytes(&src[..8]).unwrap_or_default();
        IntervalDayTime {
            days: raw.days.get(),
            milliseconds: raw.milliseconds.get(),
        }
    }
}

/// Identity conversion for façades whose object form is the native value.
#[inline]
pub(crate) fn raw<T>(value: T) -> Option<T> {
    Some(value)
}
