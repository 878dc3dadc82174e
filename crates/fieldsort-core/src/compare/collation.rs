use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Collation
///
/// Text ordering primitive used by the string comparator.
///
/// Locale → case-insensitive letters first, then lowercase before uppercase
///          at the first case difference, then code point.
///          Diacritics are not folded: `é` sorts after `z`.
/// Binary → code point order.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    #[default]
    Locale,
    Binary,
}

impl Collation {
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Locale => locale_cmp(a, b),
            Self::Binary => a.cmp(b),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Locale => "locale",
            Self::Binary => "binary",
        }
    }
}

fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    // case tie-break: first differing position decides
    for (left, right) in a.chars().zip(b.chars()) {
        if left == right {
            continue;
        }

        match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    a.cmp(b)
}
