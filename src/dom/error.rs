//! Error types for tree building.

use thiserror::Error;

use crate::base::{Location, Position, QName};

/// Structural violations of the event protocol.
///
/// All of them are fatal: the builder that reported one must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Event received before start_document")]
    NotStarted,

    #[error("start_document received twice")]
    AlreadyStarted,

    #[error("Event received after end_document")]
    Finished,

    #[error("end_element for {name} with no open element")]
    UnbalancedEnd { name: QName },

    #[error("end_element for {found} while {expected} is open")]
    MismatchedEnd { expected: QName, found: QName },

    #[error("Second root element {name} at {location}")]
    MultipleRoots { name: QName, location: Location },

    #[error("Character data outside the root element at {location}")]
    TextOutsideRoot { location: Location },

    #[error("end_document with {open} unclosed elements, innermost {name}")]
    UnclosedElements { open: usize, name: QName },

    #[error("Document has no root element")]
    EmptyDocument,

    #[error("Document requested before end_document")]
    Incomplete,

    /// Lines and columns are 1-based.
    #[error("Invalid position {line}:{column} for {name}")]
    InvalidPosition { name: QName, line: u32, column: u32 },
}

/// Errors from reading XML text into a [`ContentHandler`](super::ContentHandler).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The text is not well-formed or not namespace-well-formed.
    #[error("XML error at {position}: {message}")]
    Xml { message: String, position: Position },

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl ReadError {
    pub fn xml(message: impl Into<String>, position: Position) -> Self {
        Self::Xml {
            message: message.into(),
            position,
        }
    }
}
