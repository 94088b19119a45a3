//! In-memory XML Schema model.
//!
//! The model is produced by an external reader through [`SchemaBuilder`] and
//! is immutable afterwards. Components reference each other by
//! [`ElementId`]/[`TypeId`] or by [`QName`](crate::base::QName), never by
//! owning pointers, so cyclic content models are representable and the
//! collection can be shared across threads.

mod builder;
mod builtin;
mod collection;
mod element;
mod error;
mod particle;
mod types;

pub use builder::SchemaBuilder;
pub use builtin::BuiltinType;
pub use collection::{SchemaCollection, SchemaDocument};
pub use element::{ElementDecl, ElementId};
pub use error::SchemaError;
pub use particle::{
    Compositor, ElementTarget, MaxOccurs, ModelGroup, NamespaceConstraint, Occurs, Particle,
    ProcessContents, Term, Wildcard,
};
pub use types::{
    AttributeDecl, AttributeGroup, AttributeItem, AttributeUse, ComplexContent, ComplexType,
    Derivation, DerivationMethod, Facet, SimpleType, SimpleVariety, TypeDef, TypeId, TypeRef,
    ValueConstraint, WhiteSpace,
};

#[cfg(test)]
mod tests;
