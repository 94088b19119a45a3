//! Incremental construction of a [`SchemaCollection`].
//!
//! This is the seam an XSD reader (or a test) drives: open a document with
//! [`SchemaBuilder::new`] or [`SchemaBuilder::schema`], add components, then
//! [`build`](SchemaBuilder::build). Duplicate global names are collected and
//! reported by `build` so construction code can stay linear.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use super::collection::{SchemaCollection, SchemaDocument};
use super::element::{ElementDecl, ElementId};
use super::error::SchemaError;
use super::particle::{ElementTarget, ModelGroup, Particle, Term};
use super::types::{
    AttributeDecl, AttributeGroup, ComplexContent, ComplexType, SimpleType, SimpleVariety,
    TypeDef, TypeId, TypeRef,
};
use crate::base::QName;

impl From<ComplexType> for TypeDef {
    fn from(complex: ComplexType) -> Self {
        TypeDef::Complex(complex)
    }
}

impl From<SimpleType> for TypeDef {
    fn from(simple: SimpleType) -> Self {
        TypeDef::Simple(simple)
    }
}

#[derive(Debug)]
pub struct SchemaBuilder {
    collection: SchemaCollection,
    /// Index of the document new components are added to
    current: usize,
    errors: Vec<SchemaError>,
}

impl SchemaBuilder {
    /// Start a collection with its first schema document.
    pub fn new(target_namespace: Option<&str>, system_id: impl Into<Arc<str>>) -> Self {
        let mut builder = Self {
            collection: SchemaCollection::default(),
            current: 0,
            errors: Vec::new(),
        };
        builder.schema(target_namespace, system_id);
        builder
    }

    /// Open another schema document; later components belong to it.
    pub fn schema(
        &mut self,
        target_namespace: Option<&str>,
        system_id: impl Into<Arc<str>>,
    ) -> &mut Self {
        self.collection.documents.push(SchemaDocument {
            target_namespace: target_namespace.map(SmolStr::from),
            system_id: system_id.into(),
            elements: Vec::new(),
        });
        self.current = self.collection.documents.len() - 1;
        self
    }

    fn document(&self) -> &SchemaDocument {
        &self.collection.documents[self.current]
    }

    /// A name in the current document's target namespace.
    pub fn qname(&self, local: &str) -> QName {
        let namespace = self.document().target_namespace.clone().unwrap_or_default();
        QName::new(namespace, local)
    }

    fn push_element(&mut self, mut decl: ElementDecl, global: bool) -> ElementId {
        decl.global = global;
        if decl.system_id.is_none() {
            decl.system_id = Some(self.document().system_id.clone());
        }
        let id = ElementId(self.collection.elements.len() as u32);
        self.collection.elements.push(decl);
        id
    }

    /// Add a top-level element declaration.
    pub fn element(&mut self, decl: ElementDecl) -> ElementId {
        let name = decl.name.clone();
        let id = self.push_element(decl, true);
        if let Some(&first) = self.collection.global_elements.get(&name) {
            self.errors
                .push(SchemaError::duplicate("element", name, first.to_string()));
        } else {
            self.collection.global_elements.insert(name, id);
            self.collection.documents[self.current].elements.push(id);
        }
        id
    }

    /// Add an element declared inside a content model.
    pub fn local_element(&mut self, decl: ElementDecl) -> ElementId {
        self.push_element(decl, false)
    }

    fn push_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.collection.types.len() as u32);
        self.collection.types.push(def);
        id
    }

    /// Add a named global type.
    pub fn global_type(&mut self, name: QName, def: impl Into<TypeDef>) -> TypeId {
        let mut def = def.into();
        def.set_name(name.clone());
        let id = self.push_type(def);
        if let Some(&first) = self.collection.global_types.get(&name) {
            self.errors
                .push(SchemaError::duplicate("type", name, first.to_string()));
        } else {
            self.collection.global_types.insert(name, id);
        }
        id
    }

    pub fn complex_type(&mut self, name: QName, def: ComplexType) -> TypeId {
        self.global_type(name, def)
    }

    pub fn simple_type(&mut self, name: QName, def: SimpleType) -> TypeId {
        self.global_type(name, def)
    }

    /// Add an anonymous type, to be referenced with [`TypeRef::Anonymous`].
    pub fn anonymous_type(&mut self, def: impl Into<TypeDef>) -> TypeId {
        self.push_type(def.into())
    }

    /// Add a named model group (`<xs:group name="...">`).
    pub fn model_group(&mut self, name: QName, group: ModelGroup) {
        if self.collection.model_groups.contains_key(&name) {
            self.errors
                .push(SchemaError::duplicate("group", name, "this collection"));
        } else {
            self.collection.model_groups.insert(name, group);
        }
    }

    /// Add a top-level attribute declaration.
    pub fn attribute(&mut self, decl: AttributeDecl) {
        if self.collection.global_attributes.contains_key(&decl.name) {
            self.errors.push(SchemaError::duplicate(
                "attribute",
                decl.name,
                "this collection",
            ));
        } else {
            self.collection
                .global_attributes
                .insert(decl.name.clone(), decl);
        }
    }

    pub fn attribute_group(&mut self, group: AttributeGroup) {
        if self.collection.attribute_groups.contains_key(&group.name) {
            self.errors.push(SchemaError::duplicate(
                "attributeGroup",
                group.name,
                "this collection",
            ));
        } else {
            self.collection
                .attribute_groups
                .insert(group.name.clone(), group);
        }
    }

    /// Finish the collection and index substitution groups.
    pub fn build(mut self) -> Result<SchemaCollection, SchemaError> {
        if !self.errors.is_empty() {
            return Err(self.errors.remove(0));
        }
        self.check_ids()?;

        let mut substitution_groups: IndexMap<QName, Vec<ElementId>> = IndexMap::new();
        for (index, decl) in self.collection.elements.iter().enumerate() {
            let Some(head) = decl.substitution_group.as_ref().filter(|_| decl.global) else {
                continue;
            };
            substitution_groups
                .entry(head.clone())
                .or_default()
                .push(ElementId(index as u32));
        }
        self.collection.substitution_groups = substitution_groups;

        debug!(
            "Built schema collection: {} documents, {} elements, {} types, {} substitution groups",
            self.collection.documents.len(),
            self.collection.elements.len(),
            self.collection.types.len(),
            self.collection.substitution_groups.len()
        );
        Ok(self.collection)
    }

    /// Anonymous type and local element ids must point into their arenas.
    fn check_ids(&self) -> Result<(), SchemaError> {
        let limit = self.collection.types.len();
        let check = |type_ref: &TypeRef| match type_ref {
            TypeRef::Anonymous(id) if id.index() >= limit => Err(SchemaError::UnknownTypeId(id.0)),
            _ => Ok(()),
        };

        let elements = self.collection.elements.len();
        for decl in &self.collection.elements {
            decl.type_ref.as_ref().map_or(Ok(()), check)?;
        }
        for group in self.collection.model_groups.values() {
            group
                .particles
                .iter()
                .try_for_each(|particle| check_particle_elements(particle, elements))?;
        }
        for def in &self.collection.types {
            match def {
                TypeDef::Simple(simple) => match &simple.variety {
                    SimpleVariety::Restriction { base, .. } => check(base)?,
                    SimpleVariety::List { item } => check(item)?,
                    SimpleVariety::Union { members } => {
                        members.iter().try_for_each(check)?;
                    }
                },
                TypeDef::Complex(complex) => {
                    if let Some(derivation) = &complex.derivation {
                        check(&derivation.base)?;
                    }
                    if let ComplexContent::Simple(value_type) = &complex.content {
                        check(value_type)?;
                    }
                    if let ComplexContent::Elements(particle) = &complex.content {
                        check_particle_elements(particle, elements)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Local element ids inside a particle must point into the element arena.
fn check_particle_elements(particle: &Particle, limit: usize) -> Result<(), SchemaError> {
    match &particle.term {
        Term::Group(group) => group
            .particles
            .iter()
            .try_for_each(|child| check_particle_elements(child, limit)),
        Term::Element(ElementTarget::Local(id)) if id.index() >= limit => {
            Err(SchemaError::UnknownElementId(id.0))
        }
        _ => Ok(()),
    }
}
