//! ## Crate layout
//! - `core`: cell values, value comparators, index comparators, frame sorting,
//!   configuration, and observability.
//! - `primitives`: the field kind registry and its order strategies.
//!
//! The `prelude` module carries the vocabulary most callers need to sort a
//! column or a frame.

pub use fieldsort_core as core;
pub use fieldsort_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fieldsort_core::{
    config::{ConfigError, SortConfig},
    error::Error,
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::{
        compare::{compare_numeric_values, compare_string_values},
        index::index_comparator_with,
    };
}
