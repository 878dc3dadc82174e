//! Core runtime for fieldsort: cell values, typed columns, value and index
//! comparators, data frame sorting, and the observability hooks around them.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod column;
pub mod compare;
pub mod config;
pub mod datetime;
pub mod error;
pub mod frame;
pub mod index;
pub mod obs;
pub mod value;

pub use fieldsort_primitives::{FieldKind, OrderStrategy};

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the comparator entry points.
/// No errors, sinks, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        column::{Column, ColumnRef, Field},
        compare::{
            Collation, compare_boolean, compare_numeric, compare_string, compare_time,
            ordering_from_sign,
        },
        datetime::DateTime,
        frame::DataFrame,
        index::{IndexComparator, IndexPermutation, index_comparator_for},
        value::Value,
    };
    pub use fieldsort_primitives::{FieldKind, OrderStrategy};
}
