//! Resolved type information handed to visitors.

use std::fmt;

use crate::base::QName;
use crate::schema::{AttributeDecl, BuiltinType, Facet, TypeId};

/// Identity of a resolved type.
///
/// Anonymous types are identified by their arena id, so two elements sharing
/// one anonymous type share a key while two look-alike anonymous types do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Defined(TypeId),
    Builtin(QName),
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKey::Defined(id) => write!(f, "{id}"),
            TypeKey::Builtin(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A single value of the given primitive.
    Atomic(BuiltinType),
    /// Whitespace separated values of the item type.
    List(Box<TypeInfo>),
    /// A value of any of the member types, in declared order.
    Union(Vec<TypeInfo>),
    Complex {
        mixed: bool,
        /// Value type for complex types with simple content.
        simple_content: Option<Box<TypeInfo>>,
    },
}

/// Everything a visitor needs to know about an element's or attribute's type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub key: TypeKey,
    /// `None` for anonymous types.
    pub name: Option<QName>,
    pub kind: TypeKind,
    /// Facets collected along the restriction chain, base facets first.
    pub facets: Vec<Facet>,
}

impl TypeInfo {
    pub fn is_complex(&self) -> bool {
        matches!(self.kind, TypeKind::Complex { .. })
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self.kind, TypeKind::Complex { mixed: true, .. })
    }

    /// Primitive of an atomic type, or of a complex type's atomic simple content.
    pub fn base_type(&self) -> Option<BuiltinType> {
        match &self.kind {
            TypeKind::Atomic(base) => Some(*base),
            TypeKind::Complex {
                simple_content: Some(content),
                ..
            } => content.base_type(),
            _ => None,
        }
    }
}

/// An attribute in scope for an element, with its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrInfo {
    /// The effective declaration; `usage` reflects the referencing use.
    pub attribute: AttributeDecl,
    pub type_info: TypeInfo,
    /// Declared at the top level of a schema and referenced.
    pub global: bool,
}
