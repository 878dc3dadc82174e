//! Index comparators: order row positions of a typed column by the cells
//! they point at.
//!
//! The column's declared kind is inspected once, at construction. The
//! resolved value comparator is stored as a function pointer so the
//! per-comparison path carries no kind dispatch.

mod merge;


use crate::{
    column::Column,
    compare::{
        Collation, ValueComparator, compare_boolean_values, compare_numeric,
        compare_numeric_values, compare_string_values_with, compare_time, ordering_from_sign,
    },
    obs::sink::{MetricsEvent, record},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use fieldsort_primitives::OrderStrategy;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use tracing::debug;

///
/// IndexPermutation
///
/// Row positions in sorted order. `self[k]` is the original position of the
/// row that lands at `k`.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
pub struct IndexPermutation(Vec<usize>);

impl IndexPermutation {
    /// Natural order `0..len`.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for IndexPermutation {
    fn from(value: Vec<usize>) -> Self {
        Self(value)
    }
}

///
/// IndexComparator
///
/// Compares two row positions of a borrowed column.
/// Built once per sort; immutable afterwards.
///

pub struct IndexComparator<'a, C: Column + ?Sized> {
    column: &'a C,
    strategy: OrderStrategy,
    value_cmp: Option<ValueComparator>,
    reverse: bool,
}

impl<'a, C: Column + ?Sized> IndexComparator<'a, C> {
    /// Signed result for rows `a` and `b`; operands swap when reversed.
    ///
    /// The natural strategy compares the positions themselves.
    ///
    /// # Panics
    /// Panics when a position is outside the column.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, a: usize, b: usize) -> f64 {
        let (a, b) = if self.reverse { (b, a) } else { (a, b) };

        match self.value_cmp {
            Some(value_cmp) => value_cmp(self.column.get(a), self.column.get(b)),
            None => compare_numeric(a as f64, b as f64),
        }
    }

    /// [`Self::compare`] mapped onto [`Ordering`]; `NaN` reads as equal.
    #[must_use]
    pub fn ordering(&self, a: usize, b: usize) -> Ordering {
        ordering_from_sign(self.compare(a, b))
    }

    /// Sort `0..len` into a new permutation. Stable.
    #[must_use]
    pub fn sort_indices(&self) -> IndexPermutation {
        let mut permutation = IndexPermutation::identity(self.column.len());
        self.sort_permutation(&mut permutation.0);

        permutation
    }

    /// Sort an existing permutation in place. Stable.
    pub fn sort_permutation(&self, indices: &mut [usize]) {
        merge::stable_sort_by(indices, |a, b| self.ordering(*a, *b));
    }

    #[must_use]
    pub const fn strategy(&self) -> OrderStrategy {
        self.strategy
    }

    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reverse
    }

    #[must_use]
    pub const fn column(&self) -> &'a C {
        self.column
    }
}

impl<C: Column + ?Sized> Clone for IndexComparator<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Column + ?Sized> Copy for IndexComparator<'_, C> {}

impl<C: Column + ?Sized> fmt::Debug for IndexComparator<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexComparator")
            .field("kind", &self.column.kind())
            .field("len", &self.column.len())
            .field("strategy", &self.strategy)
            .field("reverse", &self.reverse)
            .finish()
    }
}

/// Build the index comparator for a column's declared kind.
///
/// Kinds without a value ordering fall back to natural (positional) order.
#[must_use]
pub fn index_comparator_for<C: Column + ?Sized>(column: &C, reverse: bool) -> IndexComparator<'_, C> {
    index_comparator_with(column, reverse, Collation::default())
}

/// As [`index_comparator_for`], with an explicit text collation.
#[must_use]
pub fn index_comparator_with<C: Column + ?Sized>(
    column: &C,
    reverse: bool,
    collation: Collation,
) -> IndexComparator<'_, C> {
    let kind = column.kind();
    let strategy = kind.order_strategy();

    let value_cmp: Option<ValueComparator> = match strategy {
        OrderStrategy::Numeric => Some(compare_numeric_values),
        OrderStrategy::Text => Some(text_comparator(collation)),
        OrderStrategy::Boolean => Some(compare_boolean_values),
        OrderStrategy::Time => Some(compare_time),
        OrderStrategy::Natural => {
            debug!(kind = kind.label(), "field kind has no value ordering; using natural order");
            record(MetricsEvent::NaturalFallback { kind });
            None
        }
    };

    record(MetricsEvent::ComparatorBuilt {
        strategy,
        reversed: reverse,
    });

    IndexComparator {
        column,
        strategy,
        value_cmp,
        reverse,
    }
}

const fn text_comparator(collation: Collation) -> ValueComparator {
    match collation {
        Collation::Locale => compare_text_locale,
        Collation::Binary => compare_text_binary,
    }
}

fn compare_text_locale(a: &Value, b: &Value) -> f64 {
    compare_string_values_with(a, b, Collation::Locale)
}

fn compare_text_binary(a: &Value, b: &Value) -> f64 {
    compare_string_values_with(a, b, Collation::Binary)
}
