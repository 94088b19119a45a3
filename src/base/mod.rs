//! Foundation types shared by the schema model, the walker and the tree builder.
//!
//! - [`QName`] - Namespace-qualified names
//! - [`Position`], [`Location`] - 1-based source positions and provenance
//! - [`LineIndex`] - Byte offset to line/column conversion
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;
mod qname;

pub(crate) use line_index::clamp_offset;
pub use line_index::LineIndex;
pub use position::{Location, Position};
pub use qname::QName;

// Re-export text-size types for convenience
pub use text_size;

/// Namespace of the XML Schema language itself.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
