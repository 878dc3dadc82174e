//! Declared element kinds for typed columns and the ordering strategy each
//! kind resolves to.
//!
//! This crate has no dependencies; runtime comparison lives in
//! `fieldsort-core`.

#[macro_use]
mod macros;

///
/// FieldKind
///
/// Declared element type of a column.
/// Labels match the wire names used by data frame payloads.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FieldKind {
    Boolean,
    Enum,
    Frame,
    Geo,
    NestedFrames,
    Number,
    #[default]
    Other,
    String,
    Time,
    Trace,
}

impl FieldKind {
    /// Return the full metadata descriptor for one field kind.
    #[must_use]
    pub const fn metadata(self) -> FieldKindMetadata {
        field_kind_registry!(metadata_from_registry, self)
    }

    /// Stable wire label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Ordering strategy selected for columns of this kind.
    #[must_use]
    pub const fn order_strategy(self) -> OrderStrategy {
        self.metadata().strategy
    }

    /// Return whether columns of this kind are ordered by their values.
    ///
    /// Kinds that return `false` keep their positional order when sorted.
    #[must_use]
    pub const fn is_value_ordered(self) -> bool {
        !matches!(self.order_strategy(), OrderStrategy::Natural)
    }

    /// Resolve a wire label. Unknown labels return `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        field_kind_registry!(kind_from_label_registry, label)
    }

    /// Resolve a wire label, mapping unknown labels to [`FieldKind::Other`].
    #[must_use]
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::Other)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// FieldKindMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldKindMetadata {
    pub label: &'static str,
    pub strategy: OrderStrategy,
}

///
/// OrderStrategy
///
/// Comparator family resolved once per sort from a column's kind.
/// `Natural` orders by position rather than by value.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OrderStrategy {
    Boolean,
    Natural,
    Numeric,
    Text,
    Time,
}

impl OrderStrategy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Natural => "natural",
            Self::Numeric => "numeric",
            Self::Text => "text",
            Self::Time => "time",
        }
    }
}

/// Ordered list of all field kinds in registry order.
pub const ALL_FIELD_KINDS: [FieldKind; 10] = field_kind_registry!(all_kinds_from_registry);
