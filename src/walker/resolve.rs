//! Type and content resolution for the walker.
//!
//! Resolves type references to [`TypeInfo`] and computes the effective
//! content of complex types: attributes in scope (attribute groups and
//! references flattened, derivation merged), the attribute wildcard, and the
//! particle. Derivation chains and attribute group nesting are guarded against
//! cycles here; element recursion is the walker's job.

use std::borrow::Cow;

use tracing::trace;

use super::error::WalkError;
use super::type_info::{AttrInfo, TypeInfo, TypeKey, TypeKind};
use crate::base::{QName, XSD_NAMESPACE};
use crate::schema::{
    AttributeDecl, AttributeItem, AttributeUse, BuiltinType, ComplexContent, ComplexType,
    DerivationMethod, ElementDecl, ElementTarget, MaxOccurs, Particle, ProcessContents,
    SchemaCollection, SimpleType, SimpleVariety, TypeDef, TypeId, TypeRef, Wildcard,
};

type Result<T> = std::result::Result<T, WalkError>;

/// A type reference after lookup.
#[derive(Debug, Clone)]
pub(crate) enum TypeTarget<'s> {
    Defined(TypeId, &'s TypeDef),
    Builtin(QName, BuiltinType),
    /// Built-in list types such as `NMTOKENS`, with their item primitive.
    BuiltinList(QName, BuiltinType),
}

impl TypeTarget<'_> {
    fn any_type() -> Self {
        Self::Builtin(QName::new(XSD_NAMESPACE, "anyType"), BuiltinType::AnyType)
    }

    fn any_simple_type() -> Self {
        Self::Builtin(
            QName::new(XSD_NAMESPACE, "anySimpleType"),
            BuiltinType::AnySimpleType,
        )
    }
}

/// Effective content of a complex type.
#[derive(Debug, Clone)]
pub(crate) struct Content<'s> {
    pub attributes: Vec<AttrInfo>,
    pub any_attribute: Option<Wildcard>,
    pub particle: Option<Cow<'s, Particle>>,
}

impl<'s> Content<'s> {
    /// Content of `xs:anyType`: any attributes, any elements, both lax.
    fn any_type() -> Self {
        let lax = Wildcard::any().with_process_contents(ProcessContents::Lax);
        Self {
            attributes: Vec::new(),
            any_attribute: Some(lax.clone()),
            particle: Some(Cow::Owned(Particle::sequence(vec![
                Particle::any(lax).with_occurs(0, MaxOccurs::Unbounded),
            ]))),
        }
    }

    fn derive_from(self, base: Content<'s>, method: DerivationMethod) -> Self {
        let attributes = merge_attributes(base.attributes, self.attributes);
        match method {
            DerivationMethod::Extension => {
                let particle = match (base.particle, self.particle) {
                    (Some(inherited), Some(own)) => Some(Cow::Owned(Particle::sequence(vec![
                        inherited.into_owned(),
                        own.into_owned(),
                    ]))),
                    (inherited, own) => inherited.or(own),
                };
                Self {
                    attributes,
                    any_attribute: self.any_attribute.or(base.any_attribute),
                    particle,
                }
            }
            DerivationMethod::Restriction => Self {
                attributes,
                any_attribute: self.any_attribute,
                particle: self.particle,
            },
        }
    }
}

/// Own attributes replace same-named base attributes in place; new ones are appended.
fn merge_attributes(mut merged: Vec<AttrInfo>, own: Vec<AttrInfo>) -> Vec<AttrInfo> {
    for attr in own {
        match merged
            .iter()
            .position(|existing| existing.attribute.name == attr.attribute.name)
        {
            Some(index) => merged[index] = attr,
            None => merged.push(attr),
        }
    }
    merged
}

/// Type name for diagnostics, falling back to the arena id for anonymous types.
fn label(id: TypeId, name: Option<&QName>) -> String {
    name.map(ToString::to_string)
        .unwrap_or_else(|| id.to_string())
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'s> {
    schemas: &'s SchemaCollection,
}

impl<'s> Resolver<'s> {
    pub fn new(schemas: &'s SchemaCollection) -> Self {
        Self { schemas }
    }

    /// Look up a type reference. Named references prefer schema types over
    /// built-ins so a schema for the XML Schema namespace can shadow them.
    pub fn resolve(
        &self,
        type_ref: &TypeRef,
        context: impl Fn() -> String,
    ) -> Result<TypeTarget<'s>> {
        match type_ref {
            TypeRef::Anonymous(id) => self
                .schemas
                .type_def(*id)
                .map(|def| TypeTarget::Defined(*id, def))
                .ok_or_else(|| WalkError::unresolved("type", id, context())),
            TypeRef::Named(name) => {
                if let Some(id) = self.schemas.global_type_id(name) {
                    if let Some(def) = self.schemas.type_def(id) {
                        return Ok(TypeTarget::Defined(id, def));
                    }
                }
                if name.is_in(XSD_NAMESPACE) {
                    if let Some(builtin) = BuiltinType::from_local_name(&name.local) {
                        return Ok(TypeTarget::Builtin(name.clone(), builtin));
                    }
                    if let Some(item) = BuiltinType::list_item_of(&name.local) {
                        return Ok(TypeTarget::BuiltinList(name.clone(), item));
                    }
                }
                Err(WalkError::unresolved("type", name, context()))
            }
        }
    }

    /// The effective type of `decl`.
    ///
    /// An element without a type takes the type of its substitution group
    /// head, following heads until one declares a type; only an element
    /// outside any group defaults to `xs:anyType`.
    pub fn element_type(&self, decl: &ElementDecl) -> Result<TypeTarget<'s>> {
        let mut current = decl;
        let mut chain = vec![&decl.name];
        loop {
            if let Some(type_ref) = &current.type_ref {
                return self.resolve(type_ref, || format!("element {}", current.name));
            }
            let Some(head) = &current.substitution_group else {
                return Ok(TypeTarget::any_type());
            };
            if chain.contains(&head) {
                return Err(WalkError::SubstitutionCycle { head: head.clone() });
            }
            let head_decl = self.schemas.global_element(head).ok_or_else(|| {
                WalkError::unresolved(
                    "element",
                    head,
                    format!("substitution group of element {}", decl.name),
                )
            })?;
            trace!("[WALK] {} takes its type from head {head}", decl.name);
            chain.push(&head_decl.name);
            current = head_decl;
        }
    }

    pub fn particle_element(
        &self,
        target: &ElementTarget,
        context: impl Fn() -> String,
    ) -> Result<&'s ElementDecl> {
        match target {
            ElementTarget::Local(id) => self
                .schemas
                .element(*id)
                .ok_or_else(|| WalkError::unresolved("element", id, context())),
            ElementTarget::Ref(name) => self
                .schemas
                .global_element(name)
                .ok_or_else(|| WalkError::unresolved("element", name, context())),
        }
    }

    // ========================================================================
    // TYPE INFO
    // ========================================================================

    pub fn type_info(&self, target: &TypeTarget<'s>) -> Result<TypeInfo> {
        self.type_info_in(target, &mut Vec::new())
    }

    fn type_info_in(&self, target: &TypeTarget<'s>, active: &mut Vec<TypeId>) -> Result<TypeInfo> {
        match target {
            TypeTarget::Builtin(name, builtin) => {
                let kind = if builtin.is_simple() {
                    TypeKind::Atomic(*builtin)
                } else {
                    TypeKind::Complex {
                        mixed: true,
                        simple_content: None,
                    }
                };
                Ok(builtin_info(name.clone(), kind))
            }
            TypeTarget::BuiltinList(name, item) => {
                let item_name = QName::new(XSD_NAMESPACE, item.local_name());
                let item = builtin_info(item_name, TypeKind::Atomic(*item));
                Ok(builtin_info(name.clone(), TypeKind::List(Box::new(item))))
            }
            TypeTarget::Defined(id, def) => {
                if active.contains(id) {
                    return Err(WalkError::DerivationCycle {
                        name: label(*id, def.name()),
                    });
                }
                active.push(*id);
                let info = match *def {
                    TypeDef::Simple(simple) => self.simple_info(*id, simple, active),
                    TypeDef::Complex(complex) => self.complex_info(*id, complex, active),
                };
                active.pop();
                info
            }
        }
    }

    fn simple_info(
        &self,
        id: TypeId,
        simple: &'s SimpleType,
        active: &mut Vec<TypeId>,
    ) -> Result<TypeInfo> {
        let context = || format!("simple type {}", label(id, simple.name.as_ref()));
        let (kind, facets) = match &simple.variety {
            SimpleVariety::Restriction { base, facets } => {
                let base = self.type_info_in(&self.resolve(base, context)?, active)?;
                let mut collected = base.facets;
                collected.extend(facets.iter().cloned());
                (base.kind, collected)
            }
            SimpleVariety::List { item } => {
                let item = self.type_info_in(&self.resolve(item, context)?, active)?;
                (TypeKind::List(Box::new(item)), Vec::new())
            }
            SimpleVariety::Union { members } => {
                let members = members
                    .iter()
                    .map(|member| {
                        let target = self.resolve(member, context)?;
                        self.type_info_in(&target, active)
                    })
                    .collect::<Result<Vec<_>>>()?;
                (TypeKind::Union(members), Vec::new())
            }
        };
        Ok(TypeInfo {
            key: TypeKey::Defined(id),
            name: simple.name.clone(),
            kind,
            facets,
        })
    }

    fn complex_info(
        &self,
        id: TypeId,
        complex: &'s ComplexType,
        active: &mut Vec<TypeId>,
    ) -> Result<TypeInfo> {
        let context = || format!("complex type {}", label(id, complex.name.as_ref()));
        let simple_content = match (&complex.content, &complex.derivation) {
            (ComplexContent::Simple(value_type), _) => {
                let target = self.resolve(value_type, context)?;
                Some(Box::new(self.type_info_in(&target, active)?))
            }
            (_, Some(derivation)) => {
                let base = self.type_info_in(&self.resolve(&derivation.base, context)?, active)?;
                if base.is_complex() {
                    match base.kind {
                        TypeKind::Complex { simple_content, .. } => simple_content,
                        _ => None,
                    }
                } else {
                    Some(Box::new(base))
                }
            }
            (_, None) => None,
        };
        Ok(TypeInfo {
            key: TypeKey::Defined(id),
            name: complex.name.clone(),
            kind: TypeKind::Complex {
                mixed: complex.mixed,
                simple_content,
            },
            facets: Vec::new(),
        })
    }

    // ========================================================================
    // CONTENT
    // ========================================================================

    /// Effective content of a complex type; `None` for simple types.
    pub fn content(&self, target: &TypeTarget<'s>) -> Result<Option<Content<'s>>> {
        let content = match target {
            TypeTarget::Builtin(_, BuiltinType::AnyType) => Content::any_type(),
            TypeTarget::Defined(id, def) => match *def {
                TypeDef::Complex(complex) => self.complex_content(*id, complex, &mut Vec::new())?,
                TypeDef::Simple(_) => return Ok(None),
            },
            _ => return Ok(None),
        };
        let Content {
            mut attributes,
            any_attribute,
            particle,
        } = content;
        attributes.retain(|attr| attr.attribute.usage != AttributeUse::Prohibited);
        Ok(Some(Content {
            attributes,
            any_attribute,
            particle,
        }))
    }

    fn complex_content(
        &self,
        id: TypeId,
        complex: &'s ComplexType,
        active: &mut Vec<TypeId>,
    ) -> Result<Content<'s>> {
        if active.contains(&id) {
            return Err(WalkError::DerivationCycle {
                name: label(id, complex.name.as_ref()),
            });
        }
        active.push(id);
        let context = || format!("complex type {}", label(id, complex.name.as_ref()));

        let mut own = Content {
            attributes: Vec::new(),
            any_attribute: complex.any_attribute.clone(),
            particle: complex.particle().map(Cow::Borrowed),
        };
        self.expand_attributes(
            &complex.attributes,
            &mut own.attributes,
            &mut own.any_attribute,
            &mut Vec::new(),
            &context,
        )?;

        let content = match &complex.derivation {
            None => own,
            Some(derivation) => {
                let base = match self.resolve(&derivation.base, context)? {
                    TypeTarget::Builtin(_, BuiltinType::AnyType) => Some(Content::any_type()),
                    TypeTarget::Defined(base_id, TypeDef::Complex(base)) => {
                        Some(self.complex_content(base_id, base, active)?)
                    }
                    // simple content derived from a simple type
                    _ => None,
                };
                match base {
                    Some(base) => own.derive_from(base, derivation.method),
                    None => own,
                }
            }
        };
        active.pop();
        trace!(
            "[RESOLVE] content of {}: {} attributes, particle={}",
            label(id, complex.name.as_ref()),
            content.attributes.len(),
            content.particle.is_some()
        );
        Ok(content)
    }

    fn expand_attributes(
        &self,
        items: &'s [AttributeItem],
        out: &mut Vec<AttrInfo>,
        any_attribute: &mut Option<Wildcard>,
        groups: &mut Vec<QName>,
        context: &dyn Fn() -> String,
    ) -> Result<()> {
        for item in items {
            match item {
                AttributeItem::Local(decl) => out.push(self.attr_info(decl.clone(), false)?),
                AttributeItem::Ref { name, usage } => {
                    let mut decl = self
                        .schemas
                        .global_attribute(name)
                        .cloned()
                        .ok_or_else(|| WalkError::unresolved("attribute", name, context()))?;
                    decl.usage = *usage;
                    out.push(self.attr_info(decl, true)?);
                }
                AttributeItem::Group(name) => {
                    if groups.contains(name) {
                        return Err(WalkError::GroupCycle {
                            kind: "attributeGroup",
                            name: name.clone(),
                        });
                    }
                    let group = self.schemas.attribute_group(name).ok_or_else(|| {
                        WalkError::unresolved("attributeGroup", name, context())
                    })?;
                    groups.push(name.clone());
                    self.expand_attributes(&group.attributes, out, any_attribute, groups, context)?;
                    groups.pop();
                    if any_attribute.is_none() {
                        any_attribute.clone_from(&group.any_attribute);
                    }
                }
            }
        }
        Ok(())
    }

    fn attr_info(&self, attribute: AttributeDecl, global: bool) -> Result<AttrInfo> {
        let target = match &attribute.type_ref {
            Some(type_ref) => self.resolve(type_ref, || format!("attribute {}", attribute.name))?,
            None => TypeTarget::any_simple_type(),
        };
        let type_info = self.type_info(&target)?;
        Ok(AttrInfo {
            attribute,
            type_info,
            global,
        })
    }
}

fn builtin_info(name: QName, kind: TypeKind) -> TypeInfo {
    TypeInfo {
        key: TypeKey::Builtin(name.clone()),
        name: Some(name),
        kind,
        facets: Vec::new(),
    }
}

