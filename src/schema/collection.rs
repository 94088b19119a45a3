//! Read-only schema collection.
//!
//! ## Design
//!
//! All declarations live in flat arenas and refer to each other by id or by
//! qualified name, so recursive and mutually recursive content models are
//! plain data. Global lookups use `IndexMap` to keep declaration order.
//!
//! ```text
//! SchemaCollection
//! ├── documents: Vec<SchemaDocument>            (one per schema document read)
//! ├── elements: Vec<ElementDecl>                (indexed by ElementId)
//! ├── types: Vec<TypeDef>                       (indexed by TypeId)
//! ├── global_elements / global_types / ...      (IndexMap<QName, _>)
//! └── substitution_groups: IndexMap<QName, Vec<ElementId>>
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::element::{ElementDecl, ElementId};
use super::particle::ModelGroup;
use super::types::{AttributeDecl, AttributeGroup, TypeDef, TypeId};
use crate::base::QName;

/// One schema document contributing to a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub target_namespace: Option<SmolStr>,
    pub system_id: Arc<str>,
    /// Global elements declared by this document, in declaration order.
    pub(crate) elements: Vec<ElementId>,
}

impl SchemaDocument {
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }
}

/// An immutable set of schema documents and their components.
///
/// Built once by [`SchemaBuilder`](super::SchemaBuilder) and shared (usually
/// behind an `Arc`) by any number of walkers.
#[derive(Debug, Clone, Default)]
pub struct SchemaCollection {
    pub(crate) documents: Vec<SchemaDocument>,
    pub(crate) elements: Vec<ElementDecl>,
    pub(crate) types: Vec<TypeDef>,
    pub(crate) global_elements: IndexMap<QName, ElementId>,
    pub(crate) global_types: IndexMap<QName, TypeId>,
    pub(crate) model_groups: IndexMap<QName, ModelGroup>,
    pub(crate) global_attributes: IndexMap<QName, AttributeDecl>,
    pub(crate) attribute_groups: IndexMap<QName, AttributeGroup>,
    /// Head name -> members in registration order
    pub(crate) substitution_groups: IndexMap<QName, Vec<ElementId>>,
}

impl SchemaCollection {
    pub fn documents(&self) -> &[SchemaDocument] {
        &self.documents
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementDecl> {
        self.elements.get(id.index())
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn global_element_id(&self, name: &QName) -> Option<ElementId> {
        self.global_elements.get(name).copied()
    }

    pub fn global_element(&self, name: &QName) -> Option<&ElementDecl> {
        self.global_element_id(name).and_then(|id| self.element(id))
    }

    /// Global elements across all documents, in declaration order.
    pub fn global_elements(&self) -> impl Iterator<Item = (ElementId, &ElementDecl)> + '_ {
        self.global_elements
            .values()
            .map(|&id| (id, &self.elements[id.index()]))
    }

    pub fn type_def(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    pub fn global_type_id(&self, name: &QName) -> Option<TypeId> {
        self.global_types.get(name).copied()
    }

    pub fn global_type(&self, name: &QName) -> Option<&TypeDef> {
        self.global_type_id(name).and_then(|id| self.type_def(id))
    }

    pub fn model_group(&self, name: &QName) -> Option<&ModelGroup> {
        self.model_groups.get(name)
    }

    pub fn global_attribute(&self, name: &QName) -> Option<&AttributeDecl> {
        self.global_attributes.get(name)
    }

    pub fn attribute_group(&self, name: &QName) -> Option<&AttributeGroup> {
        self.attribute_groups.get(name)
    }

    /// Direct members of the substitution group headed by `head`, in
    /// registration order. Members that are heads themselves are not expanded.
    pub fn substitution_members(&self, head: &QName) -> &[ElementId] {
        self.substitution_groups
            .get(head)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_substitution_head(&self, name: &QName) -> bool {
        self.substitution_groups.contains_key(name)
    }
}
