//! Content model particles.
//!
//! A particle is a term with occurrence bounds. Group terms own their child
//! particles; element terms point into the collection's element table so that
//! recursive content models never form ownership cycles.

use std::fmt;

use smol_str::SmolStr;

use super::element::ElementId;
use crate::base::QName;

// ============================================================================
// OCCURRENCE BOUNDS
// ============================================================================

/// Upper occurrence bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxOccurs {
    Bounded(u32),
    Unbounded,
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{n}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// `minOccurs` / `maxOccurs` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurs {
    pub min: u32,
    pub max: MaxOccurs,
}

impl Occurs {
    pub const ONCE: Occurs = Occurs {
        min: 1,
        max: MaxOccurs::Bounded(1),
    };

    pub fn new(min: u32, max: MaxOccurs) -> Self {
        Self { min, max }
    }

    pub fn optional() -> Self {
        Self::new(0, MaxOccurs::Bounded(1))
    }

    pub fn zero_or_more() -> Self {
        Self::new(0, MaxOccurs::Unbounded)
    }

    pub fn one_or_more() -> Self {
        Self::new(1, MaxOccurs::Unbounded)
    }

    /// A particle with `maxOccurs="0"` contributes nothing to the content model.
    pub fn is_prohibited(&self) -> bool {
        self.max == MaxOccurs::Bounded(0)
    }
}

impl Default for Occurs {
    fn default() -> Self {
        Self::ONCE
    }
}

// ============================================================================
// WILDCARDS
// ============================================================================

/// Namespace constraint of an `xs:any` / `xs:anyAttribute` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceConstraint {
    /// `##any`
    Any,
    /// `##other`: any namespace other than the target namespace, and not absent.
    Other(SmolStr),
    /// An explicit list; an empty string stands for `##local`.
    List(Vec<SmolStr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessContents {
    #[default]
    Strict,
    Lax,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    pub namespaces: NamespaceConstraint,
    pub process_contents: ProcessContents,
}

impl Wildcard {
    pub fn new(namespaces: NamespaceConstraint) -> Self {
        Self {
            namespaces,
            process_contents: ProcessContents::default(),
        }
    }

    /// `##any` with strict processing.
    pub fn any() -> Self {
        Self::new(NamespaceConstraint::Any)
    }

    pub fn with_process_contents(mut self, process_contents: ProcessContents) -> Self {
        self.process_contents = process_contents;
        self
    }

    /// Whether an item in `namespace` (empty for no namespace) may match.
    pub fn allows(&self, namespace: &str) -> bool {
        match &self.namespaces {
            NamespaceConstraint::Any => true,
            NamespaceConstraint::Other(target) => !namespace.is_empty() && namespace != target,
            NamespaceConstraint::List(list) => list.iter().any(|ns| ns == namespace),
        }
    }
}

// ============================================================================
// PARTICLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compositor {
    Sequence,
    Choice,
    All,
}

/// A compositor with its ordered child particles.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelGroup {
    pub compositor: Compositor,
    pub particles: Vec<Particle>,
}

impl ModelGroup {
    pub fn new(compositor: Compositor, particles: Vec<Particle>) -> Self {
        Self {
            compositor,
            particles,
        }
    }
}

/// Target of an element particle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementTarget {
    /// A local declaration stored in the collection's element table.
    Local(ElementId),
    /// `<xs:element ref="..."/>` to a global declaration.
    Ref(QName),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Group(ModelGroup),
    Element(ElementTarget),
    /// `<xs:group ref="..."/>` to a named model group.
    GroupRef(QName),
    Any(Wildcard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub occurs: Occurs,
    pub term: Term,
}

impl Particle {
    pub fn new(occurs: Occurs, term: Term) -> Self {
        Self { occurs, term }
    }

    pub fn sequence(particles: Vec<Particle>) -> Self {
        Self::group(Compositor::Sequence, particles)
    }

    pub fn choice(particles: Vec<Particle>) -> Self {
        Self::group(Compositor::Choice, particles)
    }

    pub fn all(particles: Vec<Particle>) -> Self {
        Self::group(Compositor::All, particles)
    }

    pub fn group(compositor: Compositor, particles: Vec<Particle>) -> Self {
        Self::new(
            Occurs::ONCE,
            Term::Group(ModelGroup::new(compositor, particles)),
        )
    }

    pub fn element(id: ElementId) -> Self {
        Self::new(Occurs::ONCE, Term::Element(ElementTarget::Local(id)))
    }

    pub fn element_ref(name: impl Into<QName>) -> Self {
        Self::new(Occurs::ONCE, Term::Element(ElementTarget::Ref(name.into())))
    }

    pub fn group_ref(name: impl Into<QName>) -> Self {
        Self::new(Occurs::ONCE, Term::GroupRef(name.into()))
    }

    pub fn any(wildcard: Wildcard) -> Self {
        Self::new(Occurs::ONCE, Term::Any(wildcard))
    }

    pub fn with_occurs(mut self, min: u32, max: MaxOccurs) -> Self {
        self.occurs = Occurs::new(min, max);
        self
    }
}
