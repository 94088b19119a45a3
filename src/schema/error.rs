//! Error types for schema model construction.

use thiserror::Error;

use crate::base::QName;

/// Errors raised while assembling a [`SchemaCollection`](super::SchemaCollection).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two global components of the same kind share a name.
    #[error("Duplicate {kind} declaration: {name} (first declared in {first})")]
    Duplicate {
        kind: &'static str,
        name: QName,
        first: String,
    },

    /// An anonymous type id handed to the builder does not belong to it.
    #[error("Unknown type id {0}")]
    UnknownTypeId(u32),

    /// A local element id inside a content model does not belong to the builder.
    #[error("Unknown element id {0}")]
    UnknownElementId(u32),
}

impl SchemaError {
    pub fn duplicate(kind: &'static str, name: QName, first: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            name,
            first: first.into(),
        }
    }
}
