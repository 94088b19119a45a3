//! Error types for schema traversal.

use thiserror::Error;

use crate::base::QName;

/// Errors that end a walk.
///
/// Visitor callbacks already delivered before the error stay valid, but the
/// traversal as a whole must be treated as incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// A type, element, group or attribute reference has no declaration.
    #[error("Unresolved {kind} reference '{name}' in {context}")]
    Unresolved {
        kind: &'static str,
        name: String,
        context: String,
    },

    /// A substitution group head is reached again through its own members
    /// without any element content in between.
    #[error("Substitution group cycle through head {head}")]
    SubstitutionCycle { head: QName },

    /// A type derives from itself.
    #[error("Type derivation cycle through {name}")]
    DerivationCycle { name: String },

    /// A model group or attribute group includes itself.
    #[error("{kind} reference cycle through {name}")]
    GroupCycle { kind: &'static str, name: QName },

    /// Element nesting exceeded the configured maximum depth.
    #[error("Maximum walk depth {limit} exceeded at element {element}")]
    DepthExceeded { limit: usize, element: QName },

    /// A visitor requested the walk to stop.
    #[error("Walk aborted by visitor: {0}")]
    Aborted(String),
}

impl WalkError {
    pub fn unresolved(
        kind: &'static str,
        name: impl ToString,
        context: impl Into<String>,
    ) -> Self {
        Self::Unresolved {
            kind,
            name: name.to_string(),
            context: context.into(),
        }
    }

    /// Error for a visitor to return when it wants traversal to stop.
    pub fn abort(reason: impl Into<String>) -> Self {
        Self::Aborted(reason.into())
    }

    /// Whether the error comes from the schema rather than from a visitor.
    pub fn is_resolution_error(&self) -> bool {
        !matches!(self, Self::Aborted(_))
    }
}
