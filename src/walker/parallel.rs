//! Concurrent walks over a shared collection.
//!
//! Each root gets its own walk state and its own visitor, so the walks are
//! independent; only the read-only [`SchemaCollection`](crate::schema::SchemaCollection)
//! is shared.

use rayon::prelude::*;

use super::error::WalkError;
use super::schema_walker::SchemaWalker;
use super::visitor::SchemaVisitor;
use crate::base::QName;

impl SchemaWalker<'_> {
    /// Walk every root in parallel with a fresh visitor from `make_visitor`.
    ///
    /// Results come back in the order of `roots`; a failed walk does not stop
    /// the others.
    pub fn walk_roots_par<V, F>(&self, roots: &[QName], make_visitor: F) -> Vec<Result<V, WalkError>>
    where
        V: SchemaVisitor + Send,
        F: Fn(&QName) -> V + Sync,
    {
        roots
            .par_iter()
            .map(|root| {
                let mut visitor = make_visitor(root);
                self.walk_global(root, &mut visitor).map(|()| visitor)
            })
            .collect()
    }

    /// Walk every global element of the collection in parallel.
    pub fn walk_globals_par<V, F>(&self, make_visitor: F) -> Vec<(QName, Result<V, WalkError>)>
    where
        V: SchemaVisitor + Send,
        F: Fn(&QName) -> V + Sync,
    {
        let roots: Vec<QName> = self
            .schemas()
            .global_elements()
            .map(|(_, decl)| decl.name.clone())
            .collect();
        let results = self.walk_roots_par(&roots, make_visitor);
        roots.into_iter().zip(results).collect()
    }
}
