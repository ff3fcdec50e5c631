//! # Integer and Float Vectors
//!
//! The numeric façades. Each is a thin typed surface over the shared base
//! container; they differ only in element width and the native type the
//! bytes reinterpret to. Unsigned types share the signed layouts bit for
//! bit.

use crate::types::MinorType;
use crate::vector::holder::*;
use crate::vector::native::raw;

crate::fixed_width_vector!(
    /// 8-bit signed integers.
    TinyIntVector, TinyInt, i8, MinorType::TinyInt, i8, raw
);

crate::fixed_width_vector!(
    /// 8-bit unsigned integers.
    UInt1Vector, UInt1, u8, MinorType::UInt1, u8, raw
);

crate::fixed_width_vector!(
    /// 16-bit signed integers.
    SmallIntVector, SmallInt, i16, MinorType::SmallInt, i16, raw
);

crate::fixed_width_vector!(
    /// 16-bit unsigned integers.
    UInt2Vector, UInt2, u16, MinorType::UInt2, u16, raw
);

crate::fixed_width_vector!(
    /// 32-bit signed integers.
    IntVector, Int, i32, MinorType::Int, i32, raw
);

crate::fixed_width_vector!(
    /// 32-bit unsigned integers.
    UInt4Vector, UInt4, u32, MinorType::UInt4, u32, raw
);

crate::fixed_width_vector!(
    /// 64-bit signed integers.
    BigIntVector, BigInt, i64, MinorType::BigInt, i64, raw
);

crate::fixed_width_vector!(
    /// 64-bit unsigned integers.
    UInt8Vector, UInt8, u64, MinorType::UInt8, u64, raw
);

crate::fixed_width_vector!(
    /// IEEE-754 binary32 floats. NaN payloads round-trip bit for bit.
    Float4Vector, Float4, f32, MinorType::Float4, f32, raw
);

crate::fixed_width_vector!(
    /// IEEE-754 binary64 floats. NaN payloads round-trip bit for bit.
    Float8Vector, Float8, f64, MinorType::Float8, f64, raw
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;
    use crate::memory::BufferAllocator;
    use crate::vector::ValueVector;

    #[test]
    fn int_round_trip_and_null() {
        let allocator = BufferAllocator::new();
        let mut ints = IntVector::new("ints", &allocator);
        ints.allocate_new().unwrap();
        ints.set_safe(0, -5).unwrap();
        ints.set_null(1).unwrap();
        ints.set_safe(2, i32::MAX).unwrap();
        ints.set_value_count(3).unwrap();

        assert_eq!(ints.get(0).unwrap(), -5);
        assert_eq!(ints.get_object(1), None);
        assert_eq!(ints.get(2).unwrap(), i32::MAX);
        assert_eq!(ints.null_count(), 1);

        let err = ints.get(1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VectorError>(),
            Some(VectorError::NullValue(1))
        ));
    }

    #[test]
    fn non_safe_set_requires_capacity() {
        let allocator = BufferAllocator::new();
        let mut ints = IntVector::new("ints", &allocator);
        ints.allocate_with_capacity(4).unwrap();
        let capacity = ints.value_capacity();
        let err = ints.set(capacity, 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VectorError>(),
            Some(VectorError::IndexOutOfBounds { .. })
        ));
        // the safe form grows instead
        ints.set_safe(capacity, 1).unwrap();
        assert!(ints.value_capacity() > capacity);
    }

    #[test]
    fn holder_round_trip() {
        let allocator = BufferAllocator::new();
        let mut bigs = BigIntVector::new("bigs", &allocator);
        bigs.allocate_new().unwrap();
        let input = NullableBigIntHolder { is_set: 1, value: 99 };
        bigs.set_nullable_safe(0, &input).unwrap();
        bigs.set_nullable_safe(1, &NullableBigIntHolder::default()).unwrap();
        bigs.set_value_count(2).unwrap();

        let mut out = NullableBigIntHolder::default();
        bigs.get_holder(0, &mut out);
        assert_eq!((out.is_set, out.value), (1, 99));
        bigs.get_holder(1, &mut out);
        assert_eq!(out.is_set, 0);
    }

    #[test]
    fn negative_is_set_is_rejected() {
        let allocator = BufferAllocator::new();
        let mut ints = IntVector::new("ints", &allocator);
        ints.allocate_new().unwrap();
        let holder = NullableIntHolder { is_set: -1, value: 3 };
        let err = ints.set_nullable_safe(0, &holder).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VectorError>(),
            Some(VectorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn float_nan_bits_round_trip() {
        let allocator = BufferAllocator::new();
        let mut floats = Float8Vector::new("floats", &allocator);
        floats.allocate_new().unwrap();
        let nan = f64::from_bits(0x7FF8_0000_0000_1234);
        floats.set_safe(0, nan).unwrap();
        floats.set_safe(1, -0.0).unwrap();
        floats.set_value_count(2).unwrap();
        assert_eq!(floats.get(0).unwrap().to_bits(), nan.to_bits());
        assert_eq!(floats.get(1).unwrap().to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn unsigned_full_range() {
        let allocator = BufferAllocator::new();
        let mut vec = UInt8Vector::new("u", &allocator);
        vec.allocate_new().unwrap();
        vec.set_safe(0, u64::MAX).unwrap();
        vec.set_value_count(1).unwrap();
        assert_eq!(vec.get(0).unwrap(), u64::MAX);
    }
}
