//! Type definitions and attribute declarations.

use std::fmt;

use super::particle::{Particle, Wildcard};
use crate::base::{Position, QName, XSD_NAMESPACE};

/// Index of a type definition in a [`SchemaCollection`](super::SchemaCollection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Reference from a declaration to its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A global type, possibly a built-in in the XML Schema namespace.
    Named(QName),
    /// An anonymous type nested in the referring declaration.
    Anonymous(TypeId),
}

impl TypeRef {
    /// Reference to a built-in type such as `string` or `int`.
    pub fn builtin(local: &str) -> Self {
        Self::Named(QName::new(XSD_NAMESPACE, local))
    }
}

impl From<QName> for TypeRef {
    fn from(name: QName) -> Self {
        Self::Named(name)
    }
}

impl From<TypeId> for TypeRef {
    fn from(id: TypeId) -> Self {
        Self::Anonymous(id)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Anonymous(id) => write!(f, "anonymous {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueConstraint {
    Default(String),
    Fixed(String),
}

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    Simple(SimpleType),
    Complex(ComplexType),
}

impl TypeDef {
    pub fn name(&self) -> Option<&QName> {
        match self {
            TypeDef::Simple(simple) => simple.name.as_ref(),
            TypeDef::Complex(complex) => complex.name.as_ref(),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, TypeDef::Complex(_))
    }

    pub(crate) fn set_name(&mut self, name: QName) {
        match self {
            TypeDef::Simple(simple) => simple.name = Some(name),
            TypeDef::Complex(complex) => complex.name = Some(name),
        }
    }
}

/// A constraining facet of a simple type restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    Length(u32),
    MinLength(u32),
    MaxLength(u32),
    Pattern(String),
    Enumeration(Vec<String>),
    WhiteSpace(WhiteSpace),
    MinInclusive(String),
    MaxInclusive(String),
    MinExclusive(String),
    MaxExclusive(String),
    TotalDigits(u32),
    FractionDigits(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiteSpace {
    Preserve,
    Replace,
    Collapse,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimpleVariety {
    Restriction { base: TypeRef, facets: Vec<Facet> },
    List { item: TypeRef },
    Union { members: Vec<TypeRef> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleType {
    pub name: Option<QName>,
    pub variety: SimpleVariety,
}

impl SimpleType {
    pub fn restriction(base: impl Into<TypeRef>, facets: Vec<Facet>) -> Self {
        Self {
            name: None,
            variety: SimpleVariety::Restriction {
                base: base.into(),
                facets,
            },
        }
    }

    pub fn list(item: impl Into<TypeRef>) -> Self {
        Self {
            name: None,
            variety: SimpleVariety::List { item: item.into() },
        }
    }

    pub fn union(members: Vec<TypeRef>) -> Self {
        Self {
            name: None,
            variety: SimpleVariety::Union { members },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationMethod {
    Extension,
    Restriction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub base: TypeRef,
    pub method: DerivationMethod,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ComplexContent {
    #[default]
    Empty,
    Elements(Particle),
    /// Simple content with the given value type.
    Simple(TypeRef),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexType {
    pub name: Option<QName>,
    pub derivation: Option<Derivation>,
    pub content: ComplexContent,
    pub mixed: bool,
    pub attributes: Vec<AttributeItem>,
    pub any_attribute: Option<Wildcard>,
}

impl ComplexType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_particle(mut self, particle: Particle) -> Self {
        self.content = ComplexContent::Elements(particle);
        self
    }

    pub fn with_simple_content(mut self, value_type: impl Into<TypeRef>) -> Self {
        self.content = ComplexContent::Simple(value_type.into());
        self
    }

    pub fn extending(mut self, base: impl Into<TypeRef>) -> Self {
        self.derivation = Some(Derivation {
            base: base.into(),
            method: DerivationMethod::Extension,
        });
        self
    }

    pub fn restricting(mut self, base: impl Into<TypeRef>) -> Self {
        self.derivation = Some(Derivation {
            base: base.into(),
            method: DerivationMethod::Restriction,
        });
        self
    }

    pub fn mixed(mut self) -> Self {
        self.mixed = true;
        self
    }

    pub fn with_attribute(mut self, item: impl Into<AttributeItem>) -> Self {
        self.attributes.push(item.into());
        self
    }

    pub fn with_any_attribute(mut self, wildcard: Wildcard) -> Self {
        self.any_attribute = Some(wildcard);
        self
    }

    pub fn particle(&self) -> Option<&Particle> {
        match &self.content {
            ComplexContent::Elements(particle) => Some(particle),
            _ => None,
        }
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeUse {
    #[default]
    Optional,
    Required,
    Prohibited,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDecl {
    pub name: QName,
    /// `None` means `xs:anySimpleType`.
    pub type_ref: Option<TypeRef>,
    pub usage: AttributeUse,
    pub value_constraint: Option<ValueConstraint>,
    pub position: Option<Position>,
}

impl AttributeDecl {
    pub fn new(name: impl Into<QName>) -> Self {
        Self {
            name: name.into(),
            type_ref: None,
            usage: AttributeUse::default(),
            value_constraint: None,
            position: None,
        }
    }

    pub fn with_type(mut self, type_ref: impl Into<TypeRef>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.usage = AttributeUse::Required;
        self
    }

    pub fn prohibited(mut self) -> Self {
        self.usage = AttributeUse::Prohibited;
        self
    }

    pub fn with_value_constraint(mut self, constraint: ValueConstraint) -> Self {
        self.value_constraint = Some(constraint);
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Some(Position::new(line, column));
        self
    }
}

/// One entry of a complex type's or attribute group's attribute list.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeItem {
    Local(AttributeDecl),
    /// `<xs:attribute ref="..."/>` to a global attribute.
    Ref { name: QName, usage: AttributeUse },
    /// `<xs:attributeGroup ref="..."/>`.
    Group(QName),
}

impl From<AttributeDecl> for AttributeItem {
    fn from(decl: AttributeDecl) -> Self {
        Self::Local(decl)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeGroup {
    pub name: QName,
    pub attributes: Vec<AttributeItem>,
    pub any_attribute: Option<Wildcard>,
}
