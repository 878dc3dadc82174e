#[cfg(test)]
mod tests;

use crate::datetime::DateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

///
/// Value
///
/// Dynamically typed cell held by a column.
/// (De)serializes untagged, the way cells appear in JSON frame payloads.
///
/// Null  → the cell is absent.
/// Time  → already-resolved instant; never produced by deserialization.
/// List  → array cell, meaningful to the time strategy as calendar parts.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    #[serde(skip_deserializing)]
    Time(DateTime),
    List(Vec<Self>),
}

impl Value {
    /// Return whether this value counts as present for falsy-precedence
    /// ordering.
    ///
    /// Falsy: `Null`, `false`, `0`, `-0`, `NaN`, and the empty string.
    /// Text such as `"0"` or `"false"` is truthy, as is every instant and
    /// every list (including an empty one).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(n) => n.abs() > 0.0,
            Self::Text(text) => !text.is_empty(),
            Self::Time(_) | Self::List(_) => true,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric reading used by the numeric strategy.
    ///
    /// `Null` reads as `0`, booleans as `1`/`0`, text as a trimmed decimal
    /// literal (empty reads as `0`, anything else unparsable as `NaN`),
    /// instants as epoch milliseconds, lists as `NaN`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(n) => *n,
            Self::Text(text) => parse_numeric_text(text),
            Self::Time(instant) => instant.epoch_millis(),
            Self::List(_) => f64::NAN,
        }
    }

    /// Text rendering used by the text strategy for non-text cells.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Text(text) => Cow::Borrowed(text),
            Self::Time(instant) => Cow::Owned(instant.to_string()),
            Self::List(items) => Cow::Owned(
                items
                    .iter()
                    .map(Self::to_text)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Self::Time(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

// Decimal literal reading; `Infinity` is the only accepted word form.
fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();

    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // `-0` renders as `0`
    if n == 0.0 {
        return "0".to_string();
    }

    n.to_string()
}
