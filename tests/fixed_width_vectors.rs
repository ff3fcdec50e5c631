//! # Fixed-Width Vector Property Tests
//!
//! Cross-type behavior of the vector family against its contract.
//!
//! ## Test Coverage
//!
//! 1. Round Trips
//!    - Non-null values per type (floats compared by bit pattern)
//!    - Null writes and null-overwrites-value
//!    - Holder round trips
//!
//! 2. Capacity and Growth
//!    - Capacity never decreases except across clear
//!    - Growth preserves values and validity
//!    - Sparse safe writes far past the initial capacity
//!
//! 3. Transfer and Split
//!    - Transfer empties the source and moves contents
//!    - Split contents match the source range, aligned and unaligned
//!    - Aligned splits share storage; unaligned splits copy
//!    - Type mismatches are rejected with both vectors unchanged
//!
//! 4. Sizing Laws
//!    - Buffer size law per width, and the empty-vector case
//!    - Null count equals value count minus bitmap popcount

use colvec::bitmap;
use colvec::memory::BufferAllocator;
use colvec::vector::holder::NullableIntHolder;
use colvec::{
    BitVector, DecimalValue, DecimalVector, Float8Vector, IntVector, IntervalDayTime,
    IntervalDayVector, FixedWidthVector, ValueVector, VectorError,
};

fn error_kind<'a>(err: &'a eyre::Report) -> &'a VectorError {
    err.downcast_ref::<VectorError>()
        .expect("error should carry a VectorError kind")
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn non_null_round_trip_int() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    for (i, value) in [i32::MIN, -1, 0, 1, i32::MAX].into_iter().enumerate() {
        ints.set_safe(i, value).unwrap();
    }
    ints.set_value_count(5).unwrap();
    assert_eq!(ints.get(0).unwrap(), i32::MIN);
    assert_eq!(ints.get(4).unwrap(), i32::MAX);
    assert_eq!(ints.null_count(), 0);
}

#[test]
fn non_null_round_trip_interval_day() {
    let allocator = BufferAllocator::new();
    let mut intervals = IntervalDayVector::new("v", &allocator);
    intervals.allocate_new().unwrap();
    let value = IntervalDayTime::new(-3, 86_399_999);
    intervals.set_safe(0, value).unwrap();
    intervals.set_value_count(1).unwrap();
    assert_eq!(intervals.get(0).unwrap(), value);
}

#[test]
fn null_round_trip() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    ints.set_null(3).unwrap();
    ints.set_value_count(4).unwrap();
    assert!(!ints.is_set(3));
    assert_eq!(ints.get_object(3), None);
}

#[test]
fn null_overwrites_value() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    ints.set_safe(0, 42).unwrap();
    ints.set_null(0).unwrap();
    ints.set_value_count(1).unwrap();
    assert!(!ints.is_set(0));
    assert_eq!(ints.get_object(0), None);
    assert_eq!(ints.null_count(), 1);
}

#[test]
fn holder_round_trip() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    ints.set_nullable_safe(0, &NullableIntHolder { is_set: 1, value: -9 })
        .unwrap();
    ints.set_nullable_safe(1, &NullableIntHolder { is_set: 0, value: 123 })
        .unwrap();
    ints.set_value_count(2).unwrap();

    let mut holder = NullableIntHolder::default();
    ints.get_holder(0, &mut holder);
    assert_eq!((holder.is_set, holder.value), (1, -9));
    ints.get_holder(1, &mut holder);
    assert_eq!(holder.is_set, 0);
}

// ============================================================================
// Capacity and Growth
// ============================================================================

#[test]
fn capacity_is_monotone_until_clear() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_with_capacity(16).unwrap();
    let mut last = ints.value_capacity();
    assert!(last >= 16);
    for step in 1..6 {
        ints.set_safe(last * step, 1).unwrap();
        let now = ints.value_capacity();
        assert!(now >= last, "capacity shrank: {last} -> {now}");
        last = now;
    }
    ints.clear();
    assert_eq!(ints.value_capacity(), 0);
}

#[test]
fn growth_preserves_values_and_validity() {
    let allocator = BufferAllocator::new();
    let mut floats = Float8Vector::new("v", &allocator);
    floats.allocate_with_capacity(8).unwrap();
    floats.set_safe(0, 1.5).unwrap();
    floats.set_null(1).unwrap();
    floats.set_safe(2, -2.25).unwrap();
    floats.set_value_count(3).unwrap();

    let capacity = floats.value_capacity();
    floats.set_safe(capacity + 1, 9.0).unwrap();
    assert!(floats.value_capacity() > capacity);
    assert_eq!(floats.get(0).unwrap(), 1.5);
    assert!(!floats.is_set(1));
    assert_eq!(floats.get(2).unwrap(), -2.25);
}

#[test]
fn sparse_safe_write_far_past_capacity() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    ints.set_safe(1_000_000, 42).unwrap();
    ints.set_value_count(1_000_001).unwrap();

    assert!(ints.value_capacity() >= 1_000_001);
    assert_eq!(ints.get(1_000_000).unwrap(), 42);
    let err = ints.get(0).unwrap_err();
    assert!(matches!(error_kind(&err), VectorError::NullValue(0)));
    assert_eq!(ints.null_count(), 1_000_000);
}

// ============================================================================
// Transfer and Split
// ============================================================================

#[test]
fn transfer_empties_source_and_moves_contents() {
    let allocator = BufferAllocator::new();
    let mut source = Float8Vector::new("src", &allocator);
    source.allocate_new().unwrap();
    source.set_safe(0, 0.5).unwrap();
    source.set_null(1).unwrap();
    source.set_safe(2, -8.0).unwrap();
    source.set_value_count(3).unwrap();

    let mut target = source.new_sibling("dst", &allocator);
    source.transfer_to(&mut target).unwrap();

    assert_eq!(source.value_count(), 0);
    assert_eq!(source.value_capacity(), 0);
    assert_eq!(source.buffer_size(), 0);
    assert_eq!(target.value_count(), 3);
    assert_eq!(target.get(0).unwrap(), 0.5);
    assert!(!target.is_set(1));
    assert_eq!(target.get(2).unwrap(), -8.0);
}

#[test]
fn split_matches_source_range() {
    let allocator = BufferAllocator::new();
    let mut source = IntVector::new("src", &allocator);
    source.allocate_new().unwrap();
    let total = 40;
    for i in 0..total {
        if i % 5 == 0 {
            source.set_null(i).unwrap();
        } else {
            source.set_safe(i, i as i32 * 3).unwrap();
        }
    }
    source.set_value_count(total).unwrap();
    let snapshot: Vec<Option<i32>> = source.iter().collect();

    for (start, length) in [(0, 8), (8, 16), (3, 9), (13, 27)] {
        let mut target = source.new_sibling("dst", &allocator);
        source.split_and_transfer_to(start, length, &mut target).unwrap();
        assert_eq!(target.value_count(), length);
        for k in 0..length {
            assert_eq!(
                target.get_object(k),
                snapshot[start + k],
                "slot {k} of split [{start}, {start}+{length})"
            );
        }
    }
}

#[test]
fn aligned_split_shares_value_storage() {
    let allocator = BufferAllocator::new();
    let mut source = IntVector::new("src", &allocator);
    source.allocate_new().unwrap();
    for i in 0..32 {
        source.set_safe(i, i as i32).unwrap();
    }
    source.set_value_count(32).unwrap();
    let bytes_before = allocator.allocated_bytes();

    let mut target = source.new_sibling("dst", &allocator);
    source.split_and_transfer_to(8, 16, &mut target).unwrap();

    // both buffers were sliced, not copied
    assert_eq!(allocator.allocated_bytes(), bytes_before);
    for buffer in target.field_buffers() {
        assert!(buffer.ref_count() > 1, "expected shared storage");
    }
    assert_eq!(target.get(0).unwrap(), 8);
    assert_eq!(target.get(15).unwrap(), 23);
}

#[test]
fn unaligned_split_allocates_fresh_bitmaps() {
    let allocator = BufferAllocator::new();
    let mut source = IntVector::new("src", &allocator);
    source.allocate_new().unwrap();
    for i in 0..32 {
        source.set_safe(i, i as i32).unwrap();
    }
    source.set_value_count(32).unwrap();

    let mut target = source.new_sibling("dst", &allocator);
    source.split_and_transfer_to(5, 11, &mut target).unwrap();

    let buffers = target.field_buffers();
    assert_eq!(buffers[0].ref_count(), 1, "validity must be a fresh copy");
    assert!(buffers[1].ref_count() > 1, "values still slice zero-copy");
    for k in 0..11 {
        assert_eq!(target.get(k).unwrap(), 5 + k as i32);
    }
}

#[test]
fn split_past_value_count_is_rejected() {
    let allocator = BufferAllocator::new();
    let mut source = IntVector::new("src", &allocator);
    source.allocate_new().unwrap();
    source.set_safe(0, 1).unwrap();
    source.set_value_count(4).unwrap();

    let mut target = source.new_sibling("dst", &allocator);
    let err = source.split_and_transfer_to(2, 3, &mut target).unwrap_err();
    assert!(matches!(error_kind(&err), VectorError::InvalidArgument(_)));
}

#[test]
fn transfer_between_different_types_is_rejected() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("src", &allocator);
    ints.allocate_new().unwrap();
    ints.set_safe(0, 5).unwrap();
    ints.set_value_count(1).unwrap();

    let mut floats = Float8Vector::new("dst", &allocator);
    floats.allocate_new().unwrap();
    let err = ints
        .make_transfer_pair(&mut floats as &mut dyn ValueVector)
        .unwrap_err();
    assert!(matches!(error_kind(&err), VectorError::TypeMismatch { .. }));
    // both vectors unchanged
    assert_eq!(ints.value_count(), 1);
    assert_eq!(ints.get(0).unwrap(), 5);
    assert_eq!(floats.value_count(), 0);
}

#[test]
fn decimal_transfer_checks_parameters() {
    let allocator = BufferAllocator::new();
    let mut a = DecimalVector::new("a", &allocator, 10, 2).unwrap();
    a.allocate_new().unwrap();
    a.set_safe(0, DecimalValue::new(100, 2)).unwrap();
    a.set_value_count(1).unwrap();

    let mut b = DecimalVector::new("b", &allocator, 10, 3).unwrap();
    let err = a.transfer_to(&mut b).unwrap_err();
    assert!(matches!(error_kind(&err), VectorError::TypeMismatch { .. }));
    assert_eq!(a.value_count(), 1);
}

// ============================================================================
// Boundary Scenarios
// ============================================================================

#[test]
fn empty_vector_has_zero_buffer_size() {
    let allocator = BufferAllocator::new();
    let ints = IntVector::new("v", &allocator);
    assert_eq!(ints.buffer_size(), 0);
    assert_eq!(ints.buffer_size_for(0), 0);
}

#[test]
fn float8_special_values() {
    let allocator = BufferAllocator::new();
    let mut floats = Float8Vector::new("v", &allocator);
    floats.allocate_new().unwrap();
    let nan = f64::from_bits(0x7FF8_DEAD_BEEF_0001);
    floats.set_safe(0, 1.0).unwrap();
    floats.set_null(1).unwrap();
    floats.set_safe(2, -0.0).unwrap();
    floats.set_safe(3, f64::INFINITY).unwrap();
    floats.set_safe(4, nan).unwrap();
    floats.set_value_count(5).unwrap();

    assert_eq!(floats.null_count(), 1);
    assert_eq!(floats.get(3).unwrap(), f64::INFINITY);
    assert_eq!(floats.get(4).unwrap().to_bits(), nan.to_bits());
    assert_eq!(floats.get(2).unwrap().to_bits(), (-0.0f64).to_bits());
    assert!(!floats.is_set(1));
}

#[test]
fn bit_vector_alternating_and_unaligned_split() {
    let allocator = BufferAllocator::new();
    let mut bits = BitVector::new("v", &allocator);
    bits.allocate_new().unwrap();
    for i in 0..17 {
        bits.set_safe(i, i % 2 == 1).unwrap();
    }
    bits.set_value_count(17).unwrap();
    for i in 0..17 {
        assert_eq!(bits.get_object(i), Some(i % 2 == 1));
    }

    let mut target = bits.new_sibling("split", &allocator);
    bits.split_and_transfer_to(3, 9, &mut target).unwrap();
    assert_eq!(target.value_count(), 9);
    // offset 3 inside a byte: the value buffer must be freshly allocated
    let buffers = target.field_buffers();
    assert_eq!(buffers[1].ref_count(), 1);
    for k in 0..9 {
        assert_eq!(target.get(k).unwrap(), (3 + k) % 2 == 1, "bit {k}");
    }
}

#[test]
fn decimal_round_trip_and_precision_guard() {
    let allocator = BufferAllocator::new();
    let mut decimals = DecimalVector::new("price", &allocator, 10, 2).unwrap();
    decimals.allocate_new().unwrap();
    decimals.set_safe(0, DecimalValue::new(123_456, 2)).unwrap();
    decimals.set_value_count(1).unwrap();

    let decoded = decimals.get_object(0).unwrap();
    assert_eq!(decoded.unscaled, 123_456);
    assert_eq!(decoded.scale, 2);

    // 10^11 needs 12 integer digits against precision 10
    let err = decimals
        .set_safe(1, DecimalValue::new(10i128.pow(13), 2))
        .unwrap_err();
    assert!(matches!(error_kind(&err), VectorError::InvalidArgument(_)));
}

// ============================================================================
// Sizing Laws
// ============================================================================

#[test]
fn buffer_size_law_per_width() {
    let allocator = BufferAllocator::new();

    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    ints.set_safe(9, 1).unwrap();
    ints.set_value_count(10).unwrap();
    assert_eq!(ints.buffer_size(), 2 + 10 * 4);
    assert_eq!(ints.buffer_size_for(8), 1 + 8 * 4);

    let mut bits = BitVector::new("v", &allocator);
    bits.allocate_new().unwrap();
    bits.set_safe(9, true).unwrap();
    bits.set_value_count(10).unwrap();
    assert_eq!(bits.buffer_size(), 2 * 2);

    let mut decimals = DecimalVector::new("v", &allocator, 10, 0).unwrap();
    decimals.allocate_new().unwrap();
    decimals.set_safe(2, DecimalValue::new(1, 0)).unwrap();
    decimals.set_value_count(3).unwrap();
    assert_eq!(decimals.buffer_size(), 1 + 3 * 16);
}

#[test]
fn null_count_matches_bitmap_popcount() {
    let allocator = BufferAllocator::new();
    let mut ints = IntVector::new("v", &allocator);
    ints.allocate_new().unwrap();
    let total = 29;
    for i in 0..total {
        if i % 4 == 1 {
            ints.set_null(i).unwrap();
        } else {
            ints.set_safe(i, 7).unwrap();
        }
    }
    ints.set_value_count(total).unwrap();

    let buffers = ints.field_buffers();
    let set_bits = bitmap::pop_count(buffers[0], bitmap::bytes_for_bits(total));
    assert_eq!(ints.null_count(), total - set_bits);
    assert_eq!(ints.null_count(), 7);
}

#[test]
fn copy_from_preserves_untouched_null_branch() {
    let allocator = BufferAllocator::new();
    let mut source = IntVector::new("src", &allocator);
    source.allocate_new().unwrap();
    source.set_safe(0, 11).unwrap();
    source.set_null(1).unwrap();
    source.set_value_count(2).unwrap();

    let mut sink = IntVector::new("dst", &allocator);
    sink.allocate_new().unwrap();
    sink.set_safe(0, 99).unwrap();
    sink.set_safe(1, 98).unwrap();
    sink.set_value_count(2).unwrap();

    sink.copy_from(&source, 0, 0).unwrap();
    // a null source slot leaves the destination slot as it was
    sink.copy_from(&source, 1, 1).unwrap();
    assert_eq!(sink.get(0).unwrap(), 11);
    assert_eq!(sink.get(1).unwrap(), 98);
}
