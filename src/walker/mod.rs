//! Schema traversal.
//!
//! [`SchemaWalker`] performs a depth-first, pre-order walk from an element
//! declaration and reports what it finds to a [`SchemaVisitor`]:
//!
//! 1. `on_enter_element` with the resolved [`TypeInfo`]
//! 2. for complex types: attributes, the attribute wildcard, `on_end_attributes`
//! 3. the content particle, with enter/exit pairs per model group
//! 4. `on_exit_element`
//!
//! An element whose (name, type) pair is already being walked on the current
//! path is reported with `previously_visited` set and not descended into.
//! Substitution group heads are bracketed by `on_enter_substitution_group` /
//! `on_exit_substitution_group` around the head and its members.

mod error;
mod fanout;
mod parallel;
mod recorder;
mod resolve;
mod schema_walker;
mod type_info;
mod visitor;

pub use error::WalkError;
pub use fanout::VisitorFanout;
pub use recorder::{EventRecorder, WalkEvent};
pub use schema_walker::{DEFAULT_MAX_DEPTH, SchemaWalker, WalkerConfig};
pub use type_info::{AttrInfo, TypeInfo, TypeKey, TypeKind};
pub use visitor::{SchemaVisitor, VisitResult};

#[cfg(test)]
mod tests;
