use std::fmt;
use std::sync::Arc;

use super::types::{TypeRef, ValueConstraint};
use crate::base::{Location, Position, QName};

/// Index of an element declaration in a [`SchemaCollection`](super::SchemaCollection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// An element declaration, global or local.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDecl {
    pub name: QName,
    /// `None` means `xs:anyType`.
    pub type_ref: Option<TypeRef>,
    pub nillable: bool,
    pub is_abstract: bool,
    /// Head of the substitution group this element belongs to.
    pub substitution_group: Option<QName>,
    pub value_constraint: Option<ValueConstraint>,
    pub position: Option<Position>,
    /// System id of the schema document the declaration came from.
    /// Filled in by the builder.
    pub system_id: Option<Arc<str>>,
    /// Set by the builder for top-level declarations.
    pub global: bool,
}

impl ElementDecl {
    pub fn new(name: impl Into<QName>) -> Self {
        Self {
            name: name.into(),
            type_ref: None,
            nillable: false,
            is_abstract: false,
            substitution_group: None,
            value_constraint: None,
            position: None,
            system_id: None,
            global: false,
        }
    }

    pub fn with_type(mut self, type_ref: impl Into<TypeRef>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    pub fn with_substitution_group(mut self, head: impl Into<QName>) -> Self {
        self.substitution_group = Some(head.into());
        self
    }

    pub fn with_value_constraint(mut self, constraint: ValueConstraint) -> Self {
        self.value_constraint = Some(constraint);
        self
    }

    pub fn nillable(mut self) -> Self {
        self.nillable = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Record where the declaration starts in its schema document.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Some(Position::new(line, column));
        self
    }

    pub fn qname(&self) -> &QName {
        &self.name
    }

    /// Provenance of the declaration, when both position and source are known.
    pub fn location(&self) -> Option<Location> {
        let position = self.position?;
        let system_id = self.system_id.clone()?;
        Some(Location {
            position,
            system_id,
        })
    }
}
