//! # xmlschema-walker
//!
//! Schema-aware XML processing: deterministic traversal of XML Schema models
//! and position-tracking document trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! walker    → SchemaWalker, SchemaVisitor, resolved TypeInfo, recorder
//!   ↓
//! schema    → Immutable XSD model: declarations, types, particles
//!   ↓
//! dom       → DomBuilder, ContentHandler events, quick-xml driver
//!   ↓
//! base      → Primitives (QName, Position, Location, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → dom → schema → walker)
// ============================================================================

/// Foundation types: QName, Position/Location, LineIndex
pub mod base;

/// Document trees built from parse events, with provenance
pub mod dom;

/// In-memory XML Schema model
pub mod schema;

/// Depth-first schema traversal driving a visitor
pub mod walker;

// Re-export foundation types
pub use base::{LineIndex, Location, Position, QName};

pub use dom::{BuildError, ContentHandler, Document, DomBuilder};
pub use schema::{SchemaBuilder, SchemaCollection};
pub use walker::{SchemaVisitor, SchemaWalker, WalkError};
