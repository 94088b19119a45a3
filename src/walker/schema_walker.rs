//! Depth-first traversal of a schema collection.

use std::mem;

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::error::WalkError;
use super::resolve::{Content, Resolver};
use super::type_info::{TypeInfo, TypeKey};
use super::visitor::SchemaVisitor;
use crate::base::QName;
use crate::schema::{Compositor, ElementDecl, ModelGroup, Occurs, Particle, SchemaCollection, Term};

type Result<T> = std::result::Result<T, WalkError>;

/// Default bound on nested element contents.
///
/// Every level of nesting costs several recursive frames, so the bound
/// keeps a walk on a default 2 MiB thread stack (including `rayon`
/// workers) well clear of overflow.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Walker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Maximum number of nested element contents on one path.
    pub max_depth: usize,
    /// Visit the members of substitution groups whenever their head is visited.
    pub expand_substitution_groups: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            expand_substitution_groups: true,
        }
    }
}

/// Walks element declarations of a [`SchemaCollection`], driving a [`SchemaVisitor`].
///
/// The walker only reads the collection, so any number of walkers may share
/// one. Recursion state lives inside a single [`walk`](Self::walk) call.
///
/// # Example
///
/// ```
/// use xmlschema_walker::schema::{ElementDecl, SchemaBuilder, TypeRef};
/// use xmlschema_walker::walker::{EventRecorder, SchemaWalker};
///
/// let mut builder = SchemaBuilder::new(None, "note.xsd");
/// builder.element(ElementDecl::new("note").with_type(TypeRef::builtin("string")));
/// let schemas = builder.build().unwrap();
///
/// let mut recorder = EventRecorder::new();
/// SchemaWalker::new(&schemas)
///     .walk_global(&"note".into(), &mut recorder)
///     .unwrap();
/// assert_eq!(recorder.entered_elements(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaWalker<'s> {
    schemas: &'s SchemaCollection,
    config: WalkerConfig,
}

impl<'s> SchemaWalker<'s> {
    pub fn new(schemas: &'s SchemaCollection) -> Self {
        Self {
            schemas,
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WalkerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WalkerConfig {
        &mut self.config
    }

    pub fn schemas(&self) -> &'s SchemaCollection {
        self.schemas
    }

    /// Walk everything reachable from `root`.
    ///
    /// Returns after the whole subtree has been visited, or at the first
    /// error. Callbacks already delivered before an error are not retracted.
    pub fn walk<V>(&self, root: &ElementDecl, visitor: &mut V) -> Result<()>
    where
        V: SchemaVisitor + ?Sized,
    {
        debug!("[WALK] Starting walk at {}", root.name);
        let mut walk = Walk {
            resolver: Resolver::new(self.schemas),
            schemas: self.schemas,
            config: &self.config,
            visitor,
            active: FxHashSet::default(),
            path: Vec::new(),
            substitution_chain: Vec::new(),
            group_chain: Vec::new(),
        };
        let result = walk.element(root);
        match &result {
            Ok(()) => debug!("[WALK] Finished walk at {}", root.name),
            Err(error) => debug!("[WALK] Walk at {} failed: {error}", root.name),
        }
        result
    }

    /// Walk the global element declaration named `name`.
    pub fn walk_global<V>(&self, name: &QName, visitor: &mut V) -> Result<()>
    where
        V: SchemaVisitor + ?Sized,
    {
        let root = self
            .schemas
            .global_element(name)
            .ok_or_else(|| WalkError::unresolved("element", name, "walk root"))?;
        self.walk(root, visitor)
    }
}

// ============================================================================
// TRAVERSAL STATE
// ============================================================================

struct Walk<'s, 'w, V: ?Sized> {
    resolver: Resolver<'s>,
    schemas: &'s SchemaCollection,
    config: &'w WalkerConfig,
    visitor: &'w mut V,
    /// (element name, type) pairs whose content is being walked on the current path.
    active: FxHashSet<(QName, TypeKey)>,
    /// Elements whose content is being walked, outermost first.
    path: Vec<QName>,
    /// Substitution heads expanded since the last element content was entered.
    substitution_chain: Vec<QName>,
    /// Model groups expanded since the last element content was entered.
    group_chain: Vec<QName>,
}

impl<V: SchemaVisitor + ?Sized> Walk<'_, '_, V> {
    fn context(&self) -> String {
        match self.path.last() {
            Some(element) => format!("content of element {element}"),
            None => "walk root".to_string(),
        }
    }

    fn element(&mut self, decl: &ElementDecl) -> Result<()> {
        if self.config.expand_substitution_groups
            && decl.global
            && self.schemas.is_substitution_head(&decl.name)
        {
            self.substitution_group(decl)
        } else {
            self.plain_element(decl)
        }
    }

    fn substitution_group(&mut self, head: &ElementDecl) -> Result<()> {
        if self.substitution_chain.contains(&head.name) {
            warn!("[WALK] Substitution group cycle through {}", head.name);
            return Err(WalkError::SubstitutionCycle {
                head: head.name.clone(),
            });
        }
        trace!("[WALK] Expanding substitution group {}", head.name);
        self.visitor.on_enter_substitution_group(head)?;
        self.substitution_chain.push(head.name.clone());

        if !head.is_abstract {
            self.plain_element(head)?;
        }
        let schemas = self.schemas;
        for &id in schemas.substitution_members(&head.name) {
            let member = schemas.element(id).ok_or_else(|| {
                WalkError::unresolved("element", id, format!("substitution group {}", head.name))
            })?;
            self.element(member)?;
        }

        self.substitution_chain.pop();
        self.visitor.on_exit_substitution_group(head)
    }

    fn plain_element(&mut self, decl: &ElementDecl) -> Result<()> {
        let target = self.resolver.element_type(decl)?;
        let type_info = self.resolver.type_info(&target)?;
        let key = (decl.name.clone(), type_info.key.clone());
        let previously_visited = self.active.contains(&key);
        trace!(
            "[WALK] Enter {} : {} (previously visited: {previously_visited})",
            decl.name, type_info.key
        );

        self.visitor
            .on_enter_element(decl, &type_info, previously_visited)?;
        if !previously_visited {
            if let Some(content) = self.resolver.content(&target)? {
                self.element_content(decl, &type_info, key, content)?;
            }
        }
        self.visitor
            .on_exit_element(decl, &type_info, previously_visited)
    }

    fn element_content(
        &mut self,
        decl: &ElementDecl,
        type_info: &TypeInfo,
        key: (QName, TypeKey),
        content: Content<'_>,
    ) -> Result<()> {
        if self.path.len() >= self.config.max_depth {
            warn!(
                "[WALK] Depth limit {} reached at {}",
                self.config.max_depth, decl.name
            );
            return Err(WalkError::DepthExceeded {
                limit: self.config.max_depth,
                element: decl.name.clone(),
            });
        }
        self.active.insert(key.clone());
        self.path.push(decl.name.clone());
        let substitution_chain = mem::take(&mut self.substitution_chain);
        let group_chain = mem::take(&mut self.group_chain);

        for attr in &content.attributes {
            self.visitor.on_visit_attribute(decl, attr)?;
        }
        if let Some(any_attribute) = &content.any_attribute {
            self.visitor.on_visit_any_attribute(decl, any_attribute)?;
        }
        self.visitor.on_end_attributes(decl, type_info)?;
        if let Some(particle) = &content.particle {
            self.particle(particle)?;
        }

        self.group_chain = group_chain;
        self.substitution_chain = substitution_chain;
        self.path.pop();
        self.active.remove(&key);
        Ok(())
    }

    fn particle(&mut self, particle: &Particle) -> Result<()> {
        if particle.occurs.is_prohibited() {
            return Ok(());
        }
        match &particle.term {
            Term::Group(group) => self.group(group, particle.occurs),
            Term::Element(target) => {
                let decl = self
                    .resolver
                    .particle_element(target, || self.context())?;
                self.element(decl)
            }
            Term::GroupRef(name) => {
                if self.group_chain.contains(name) {
                    warn!("[WALK] Model group cycle through {name}");
                    return Err(WalkError::GroupCycle {
                        kind: "group",
                        name: name.clone(),
                    });
                }
                let schemas = self.schemas;
                let group = schemas
                    .model_group(name)
                    .ok_or_else(|| WalkError::unresolved("group", name, self.context()))?;
                self.group_chain.push(name.clone());
                self.group(group, particle.occurs)?;
                self.group_chain.pop();
                Ok(())
            }
            Term::Any(wildcard) => self.visitor.on_visit_any(wildcard, particle.occurs),
        }
    }

    fn group(&mut self, group: &ModelGroup, occurs: Occurs) -> Result<()> {
        match group.compositor {
            Compositor::Sequence => self.visitor.on_enter_sequence_group(group, occurs)?,
            Compositor::Choice => self.visitor.on_enter_choice_group(group, occurs)?,
            Compositor::All => self.visitor.on_enter_all_group(group, occurs)?,
        }
        for child in &group.particles {
            self.particle(child)?;
        }
        match group.compositor {
            Compositor::Sequence => self.visitor.on_exit_sequence_group(group, occurs),
            Compositor::Choice => self.visitor.on_exit_choice_group(group, occurs),
            Compositor::All => self.visitor.on_exit_all_group(group, occurs),
        }
    }
}
