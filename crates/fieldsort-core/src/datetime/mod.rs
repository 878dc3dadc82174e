//! Instant abstraction consumed by the time comparator.
//!
//! Time-like inputs are epoch milliseconds, text in one of the accepted
//! calendar forms, already-built instants, and lists of calendar components.
//! Inputs that classify as time-like but cannot be converted produce no
//! instant; callers treat that as "not before anything".

#[cfg(test)]
mod tests;

use crate::value::Value;
use serde::{Serialize, Serializer};
use std::{fmt, sync::OnceLock};
use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::{self, BorrowedFormatItem, well_known::Rfc3339},
};

///
/// CONSTANTS
///

/// Largest absolute epoch offset, in milliseconds, accepted as an instant.
///
/// The calendar covers years `-9999..=9999`; this is the last millisecond of
/// year 9999. Offsets past it produce no instant.
pub const MAX_EPOCH_MILLIS: f64 = 253_402_300_799_999.0;

const NANOS_PER_MILLI: i128 = 1_000_000;

// Layouts carrying a numeric offset RFC 3339 does not accept.
const OFFSET_LAYOUTS: [&str; 6] = [
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory][offset_minute]",
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]",
    "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]",
    "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory][offset_minute]",
    "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]",
    "[year][month][day]T[hour][minute][second][offset_hour sign:mandatory][offset_minute]",
];

// Offset-less layouts, read as UTC. A trailing `Z` is matched literally.
const NAIVE_LAYOUTS: [&str; 12] = [
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]",
    "[year]-[month]-[day]T[hour]:[minute]:[second]",
    "[year]-[month]-[day]T[hour]:[minute]",
    "[year]-[month]-[day]T[hour]:[minute]Z",
    "[year]-[month]-[day]T[hour]",
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]",
    "[year]-[month]-[day] [hour]:[minute]:[second]",
    "[year]-[month]-[day] [hour]:[minute]",
    "[year][month][day]T[hour][minute][second]Z",
    "[year][month][day]T[hour][minute][second]",
    "[year][month][day]T[hour][minute]",
    "[year][month][day]T[hour]",
];

const DATE_LAYOUTS: [&str; 2] = ["[year]-[month]-[day]", "[year][month][day]"];

static OFFSET_FORMATS: OnceLock<Vec<Vec<BorrowedFormatItem<'static>>>> = OnceLock::new();
static NAIVE_FORMATS: OnceLock<Vec<Vec<BorrowedFormatItem<'static>>>> = OnceLock::new();
static DATE_FORMATS: OnceLock<Vec<Vec<BorrowedFormatItem<'static>>>> = OnceLock::new();

///
/// DateTime
///
/// UTC instant. Ordering and equality are by instant.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime(OffsetDateTime);

impl DateTime {
    /// Build an instant from a time-like input.
    ///
    /// Returns `None` when the value is not time-like or does not describe a
    /// valid instant.
    #[must_use]
    pub fn from_input(value: &Value) -> Option<Self> {
        match value {
            Value::Number(millis) => Self::from_epoch_millis(*millis),
            Value::Text(text) => Self::parse(text),
            Value::Time(instant) => Some(*instant),
            Value::List(parts) => Self::from_components(parts),
            Value::Null | Value::Bool(_) => None,
        }
    }

    /// Construct from milliseconds since the Unix epoch.
    ///
    /// Fractional milliseconds are truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_epoch_millis(millis: f64) -> Option<Self> {
        if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
            return None;
        }

        let nanos = (millis.trunc() as i128) * NANOS_PER_MILLI;

        OffsetDateTime::from_unix_timestamp_nanos(nanos).ok().map(Self)
    }

    /// Parse ISO 8601 text.
    ///
    /// RFC 3339 first, then extended and basic forms with a numeric offset,
    /// then offset-less forms read as UTC, then bare dates at midnight UTC.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Ok(parsed) = OffsetDateTime::parse(text, &Rfc3339) {
            return Some(Self::from(parsed));
        }

        if let Some(parsed) = formats(&OFFSET_FORMATS, &OFFSET_LAYOUTS)
            .iter()
            .find_map(|layout| OffsetDateTime::parse(text, layout.as_slice()).ok())
        {
            return Some(Self::from(parsed));
        }

        if let Some(parsed) = formats(&NAIVE_FORMATS, &NAIVE_LAYOUTS)
            .iter()
            .find_map(|layout| PrimitiveDateTime::parse(text, layout.as_slice()).ok())
        {
            return Some(Self(parsed.assume_utc()));
        }

        formats(&DATE_FORMATS, &DATE_LAYOUTS)
            .iter()
            .find_map(|layout| Date::parse(text, layout.as_slice()).ok())
            .map(|date| Self(date.midnight().assume_utc()))
    }

    /// Build from `[year, month0, day, hour, minute, second, millisecond]`.
    ///
    /// The month is zero-based; trailing components may be omitted. An empty
    /// list is the start of the current UTC day.
    #[must_use]
    pub fn from_components(parts: &[Value]) -> Option<Self> {
        if parts.is_empty() {
            return Some(Self(OffsetDateTime::now_utc().date().midnight().assume_utc()));
        }

        if parts.len() > 7 {
            return None;
        }

        let year = i32::try_from(component(parts, 0, 0)?).ok()?;
        let month0 = u8::try_from(component(parts, 1, 0)?).ok()?;
        let day = u8::try_from(component(parts, 2, 1)?).ok()?;
        let hour = u8::try_from(component(parts, 3, 0)?).ok()?;
        let minute = u8::try_from(component(parts, 4, 0)?).ok()?;
        let second = u8::try_from(component(parts, 5, 0)?).ok()?;
        let milli = u16::try_from(component(parts, 6, 0)?).ok()?;

        let month = Month::try_from(month0.checked_add(1)?).ok()?;
        let date = Date::from_calendar_date(year, month, day).ok()?;
        let clock = Time::from_hms_milli(hour, minute, second, milli).ok()?;

        Some(Self(PrimitiveDateTime::new(date, clock).assume_utc()))
    }

    /// Return whether `self` is strictly earlier than `other`.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn epoch_millis(&self) -> f64 {
        self.0.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI) as f64
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.to_offset(time::UtcOffset::UTC))
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.epoch_millis())
    }
}

/// Return whether a value is accepted as input by [`DateTime::from_input`].
///
/// Classification only; the value may still fail to convert.
#[must_use]
pub fn is_date_time_input(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::Text(_) | Value::Time(_) => true,
        Value::List(parts) => parts.iter().all(|part| matches!(part, Value::Number(_))),
        Value::Null | Value::Bool(_) => false,
    }
}

// Read one calendar component, falling back to `default` when omitted.
#[allow(clippy::cast_possible_truncation)]
fn component(parts: &[Value], index: usize, default: i64) -> Option<i64> {
    match parts.get(index) {
        None => Some(default),
        Some(Value::Number(n)) if n.is_finite() => Some(n.trunc() as i64),
        Some(_) => None,
    }
}

// Compile a layout set once; layouts that fail to compile are skipped.
fn formats(
    cache: &'static OnceLock<Vec<Vec<BorrowedFormatItem<'static>>>>,
    layouts: &'static [&'static str],
) -> &'static [Vec<BorrowedFormatItem<'static>>] {
    cache.get_or_init(|| {
        layouts
            .iter()
            .filter_map(|layout| format_description::parse_borrowed::<2>(layout).ok())
            .collect()
    })
}
