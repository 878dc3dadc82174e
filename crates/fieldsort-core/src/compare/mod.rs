//! Value-level comparators.
//!
//! Every comparator returns a signed `f64`: negative when the first operand
//! sorts first, zero when the pair is equivalent, positive otherwise. Only
//! the sign carries meaning; the numeric comparators return the raw
//! difference. A `NaN` result is read as "equal" by [`ordering_from_sign`].
//!
//! Comparators never fail. Ambiguous pairs degrade to "equal".

mod collation;


use crate::{
    datetime::{DateTime, is_date_time_input},
    value::Value,
};
use std::cmp::Ordering;

// re-exports
pub use collation::Collation;

///
/// ValueComparator
///
/// Resolved value-level comparator used by index comparators.
///

pub type ValueComparator = fn(&Value, &Value) -> f64;

/// Order two cells of a time column.
///
/// Rules, in order:
/// 1. either operand falsy → falsy-precedence rule
/// 2. both numbers → raw difference
/// 3. both time-like → `-1` / `1` by instant, `0` if neither is before
/// 4. anything else → `0`
#[must_use]
pub fn compare_time(a: &Value, b: &Value) -> f64 {
    if !a.is_truthy() || !b.is_truthy() {
        return compare_falsy(a, b);
    }

    if let (Value::Number(a), Value::Number(b)) = (a, b) {
        return compare_numeric(*a, *b);
    }

    if is_date_time_input(a) && is_date_time_input(b) {
        // an input that does not convert is never before anything
        let (a, b) = (DateTime::from_input(a), DateTime::from_input(b));

        if let (Some(a), Some(b)) = (a, b) {
            if a.is_before(&b) {
                return -1.0;
            }

            if b.is_before(&a) {
                return 1.0;
            }
        }
    }

    0.0
}

/// Raw difference `a - b`. Not clamped; `NaN` propagates.
#[must_use]
pub fn compare_numeric(a: f64, b: f64) -> f64 {
    a - b
}

/// Order two strings with the default [`Collation::Locale`].
///
/// The empty string sorts after every non-empty string.
#[must_use]
pub fn compare_string(a: &str, b: &str) -> f64 {
    compare_string_with(a, b, Collation::Locale)
}

/// Order two strings with an explicit collation.
#[must_use]
pub fn compare_string_with(a: &str, b: &str, collation: Collation) -> f64 {
    if a.is_empty() || b.is_empty() {
        return falsy_precedence(!a.is_empty(), !b.is_empty());
    }

    sign_of(collation.compare(a, b))
}

/// `true` sorts before `false`; equal flags are equivalent.
#[must_use]
pub fn compare_boolean(a: bool, b: bool) -> f64 {
    falsy_precedence(a, b)
}

/// Falsy-precedence rule over cell truthiness.
///
/// Falsy cells sort after truthy cells. Two falsy or two truthy cells are
/// equivalent.
#[must_use]
pub fn compare_falsy(a: &Value, b: &Value) -> f64 {
    falsy_precedence(a.is_truthy(), b.is_truthy())
}

/// Numeric comparator over cells read with [`Value::to_number`].
#[must_use]
pub fn compare_numeric_values(a: &Value, b: &Value) -> f64 {
    compare_numeric(a.to_number(), b.to_number())
}

/// Text comparator over cells, default collation.
#[must_use]
pub fn compare_string_values(a: &Value, b: &Value) -> f64 {
    compare_string_values_with(a, b, Collation::Locale)
}

/// Text comparator over cells.
///
/// Falsiness is judged on the raw cell; non-text cells are then compared by
/// their [`Value::to_text`] rendering.
#[must_use]
pub fn compare_string_values_with(a: &Value, b: &Value, collation: Collation) -> f64 {
    if !a.is_truthy() || !b.is_truthy() {
        return compare_falsy(a, b);
    }

    sign_of(collation.compare(&a.to_text(), &b.to_text()))
}

/// Boolean comparator over cells; the falsy-precedence rule alone.
#[must_use]
pub fn compare_boolean_values(a: &Value, b: &Value) -> f64 {
    compare_falsy(a, b)
}

/// Map a signed comparator result onto [`Ordering`]. `NaN` maps to `Equal`.
#[must_use]
pub fn ordering_from_sign(sign: f64) -> Ordering {
    sign.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

const fn falsy_precedence(a_truthy: bool, b_truthy: bool) -> f64 {
    match (a_truthy, b_truthy) {
        (false, true) => 1.0,
        (true, false) => -1.0,
        _ => 0.0,
    }
}

const fn sign_of(ordering: Ordering) -> f64 {
    match ordering {
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
        Ordering::Greater => 1.0,
    }
}
