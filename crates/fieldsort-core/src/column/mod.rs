//! Typed columns: positional, read-only access to cells tagged with one
//! declared [`FieldKind`].


use crate::value::Value;
use fieldsort_primitives::FieldKind;
use serde::{Deserialize, Serialize};

///
/// Column
///
/// Read-only positional view over cells of one declared kind.
///
/// Callers pass indices in `0..len()`. Lookups are not bounds-checked beyond
/// the panic of slice indexing.
///

pub trait Column {
    /// Declared element kind.
    fn kind(&self) -> FieldKind;

    fn len(&self) -> usize;

    /// Cell at `index`.
    ///
    /// # Panics
    /// Panics when `index >= self.len()`.
    fn get(&self, index: usize) -> &Value;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// ColumnRef
///
/// Borrowed column over a slice of cells.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnRef<'a> {
    kind: FieldKind,
    values: &'a [Value],
}

impl<'a> ColumnRef<'a> {
    #[must_use]
    pub const fn new(kind: FieldKind, values: &'a [Value]) -> Self {
        Self { kind, values }
    }

    #[must_use]
    pub const fn values(&self) -> &'a [Value] {
        self.values
    }
}

impl Column for ColumnRef<'_> {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

///
/// Field
///
/// Named, owned column. Wire shape: `{"name", "type", "values"}`; unknown
/// `type` labels read as [`FieldKind::Other`].
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type", with = "kind_label")]
    pub kind: FieldKind,

    #[serde(default)]
    pub values: Vec<Value>,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Borrow this field as a [`ColumnRef`].
    #[must_use]
    pub fn as_column(&self) -> ColumnRef<'_> {
        ColumnRef::new(self.kind, &self.values)
    }

    /// Copy of this field with cells taken in `order`.
    ///
    /// # Panics
    /// Panics when an index in `order` is out of range.
    #[must_use]
    pub fn take(&self, order: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            values: order.iter().map(|&index| self.values[index].clone()).collect(),
        }
    }
}

impl Column for Field {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

// Serde adapter: kinds travel as their registry labels.
mod kind_label {
    use fieldsort_primitives::FieldKind;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(kind: &FieldKind, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(kind.label())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FieldKind, D::Error> {
        let label = String::deserialize(deserializer)?;

        Ok(FieldKind::from_label_lossy(&label))
    }
}
