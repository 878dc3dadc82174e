//! Data frames: equal-length fields reordered together by one sort field.


use crate::{
    column::{Column, Field},
    compare::Collation,
    config::SortConfig,
    error::Error,
    index::{IndexPermutation, index_comparator_with},
    obs::sink::{MetricsEvent, record},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error as ThisError;
use tracing::{debug, trace};

///
/// FrameError
///

#[derive(Debug, ThisError)]
pub enum FrameError {
    #[error("field '{field}' has {found} values, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("field not found: '{name}'")]
    FieldNotFound { name: String },
}

///
/// DataFrame
///
/// Ordered fields sharing one row count.
/// Wire shape: `{"name", "fields"}`; lengths are validated on decode.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "FrameWire")]
pub struct DataFrame {
    name: Option<String>,
    fields: Vec<Field>,
}

impl DataFrame {
    /// Assemble a frame, rejecting fields whose lengths differ from the first.
    pub fn new(name: Option<String>, fields: Vec<Field>) -> Result<Self, FrameError> {
        if let Some(first) = fields.first() {
            let expected = first.len();

            if let Some(bad) = fields.iter().find(|field| field.len() != expected) {
                return Err(FrameError::LengthMismatch {
                    field: bad.name.clone(),
                    expected,
                    found: bad.len(),
                });
            }
        }

        Ok(Self { name, fields })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Row count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.first().map_or(0, Column::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn position_of(&self, name: &str) -> Result<usize, FrameError> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .ok_or_else(|| FrameError::FieldNotFound {
                name: name.to_string(),
            })
    }

    /// Sort every field by the field at `field_index`.
    ///
    /// An out-of-range `field_index` returns an unchanged copy.
    #[must_use]
    pub fn sorted_by(&self, field_index: usize, reverse: bool) -> Self {
        self.sorted_with_collation(field_index, reverse, Collation::default())
    }

    /// Sort every field by the named field.
    pub fn sorted_by_name(&self, name: &str, reverse: bool) -> Result<Self, FrameError> {
        let index = self.position_of(name)?;

        Ok(self.sorted_by(index, reverse))
    }

    /// Sort by a loaded [`SortConfig`].
    pub fn sorted_with(&self, config: &SortConfig) -> Result<Self, FrameError> {
        let index = self.position_of(&config.field)?;

        Ok(self.sorted_with_collation(index, config.reverse, config.collation))
    }

    /// Load a [`SortConfig`] from a TOML file and sort by it.
    pub fn sorted_with_config_file(&self, path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = SortConfig::from_file(path)?;

        Ok(self.sorted_with(&config)?)
    }

    /// Every field in reverse row order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let order: Vec<usize> = (0..self.len()).rev().collect();

        self.reordered(&order)
    }

    fn sorted_with_collation(&self, field_index: usize, reverse: bool, collation: Collation) -> Self {
        let Some(field) = self.fields.get(field_index) else {
            debug!(
                field_index,
                fields = self.fields.len(),
                "sort field index out of range; frame left unchanged"
            );
            return self.clone();
        };

        let order: IndexPermutation = index_comparator_with(field, reverse, collation).sort_indices();

        trace!(
            field = %field.name,
            rows = order.len(),
            reverse,
            collation = collation.label(),
            "sorted frame"
        );
        record(MetricsEvent::FrameSorted {
            rows: order.len() as u64,
        });

        self.reordered(&order)
    }

    fn reordered(&self, order: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            fields: self.fields.iter().map(|field| field.take(order)).collect(),
        }
    }
}

///
/// FrameWire
/// Unvalidated wire form of [`DataFrame`].
///

#[derive(Deserialize)]
struct FrameWire {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl TryFrom<FrameWire> for DataFrame {
    type Error = FrameError;

    fn try_from(wire: FrameWire) -> Result<Self, Self::Error> {
        Self::new(wire.name, wire.fields)
    }
}
