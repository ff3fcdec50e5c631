//! # Date, Time, Timestamp and Interval Vectors
//!
//! Calendar-flavored façades over the same integer layouts as the numeric
//! vectors. `get` always returns the stored integer; `get_object` decodes
//! the milli-resolution and timestamp types into naive UTC calendar
//! values, and hands back the raw integer elsewhere (seconds of day,
//! microseconds of day, days since epoch, interval months).
//!
//! Values outside chrono's representable range yield `None` from
//! `get_object`; the raw accessor is always available.

use chrono::{DateTime, NaiveDateTime};

use crate::types::{IntervalDayTime, MinorType};
use crate::vector::holder::*;
use crate::vector::native::raw;

pub(crate) fn datetime_from_secs(value: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(value, 0).map(|dt| dt.naive_utc())
}

pub(crate) fn datetime_from_millis(value: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(value).map(|dt| dt.naive_utc())
}

pub(crate) fn datetime_from_millis_i32(value: i32) -> Option<NaiveDateTime> {
    datetime_from_millis(value as i64)
}

pub(crate) fn datetime_from_micros(value: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(value).map(|dt| dt.naive_utc())
}

pub(crate) fn datetime_from_nanos(value: i64) -> Option<NaiveDateTime> {
    Some(DateTime::from_timestamp_nanos(value).naive_utc())
}

crate::fixed_width_vector!(
    /// Days since the UNIX epoch.
    DateDayVector, DateDay, i32, MinorType::DateDay, i32, raw
);

crate::fixed_width_vector!(
    /// Milliseconds since the UNIX epoch, decoded to a naive UTC datetime.
    DateMilliVector, DateMilli, i64, MinorType::DateMilli, NaiveDateTime, datetime_from_millis
);

crate::fixed_width_vector!(
    /// Seconds of day.
    TimeSecVector, TimeSec, i32, MinorType::TimeSec, i32, raw
);

crate::fixed_width_vector!(
    /// Milliseconds of day, decoded against the epoch like the original.
    TimeMilliVector, TimeMilli, i32, MinorType::TimeMilli, NaiveDateTime, datetime_from_millis_i32
);

crate::fixed_width_vector!(
    /// Microseconds of day.
    TimeMicroVector, TimeMicro, i64, MinorType::TimeMicro, i64, raw
);

crate::fixed_width_vector!(
    /// Nanoseconds of day.
    TimeNanoVector, TimeNano, i64, MinorType::TimeNano, i64, raw
);

crate::fixed_width_vector!(
    /// Seconds since the UNIX epoch.
    TimeStampSecVector, TimeStampSec, i64, MinorType::TimeStampSec, NaiveDateTime, datetime_from_secs
);

crate::fixed_width_vector!(
    /// Milliseconds since the UNIX epoch.
    TimeStampMilliVector, TimeStampMilli, i64, MinorType::TimeStampMilli, NaiveDateTime, datetime_from_millis
);

crate::fixed_width_vector!(
    /// Microseconds since the UNIX epoch.
    TimeStampMicroVector, TimeStampMicro, i64, MinorType::TimeStampMicro, NaiveDateTime, datetime_from_micros
);

crate::fixed_width_vector!(
    /// Nanoseconds since the UNIX epoch.
    TimeStampNanoVector, TimeStampNano, i64, MinorType::TimeStampNano, NaiveDateTime, datetime_from_nanos
);

crate::fixed_width_vector!(
    /// Whole months.
    IntervalYearVector, IntervalYear, i32, MinorType::IntervalYear, i32, raw
);

crate::fixed_width_vector!(
    /// Day/millisecond interval packed as two little-endian i32 halves.
    IntervalDayVector, IntervalDay, IntervalDayTime, MinorType::IntervalDay, IntervalDayTime, raw
);
