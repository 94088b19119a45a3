//! Visitor protocol for schema traversal.

use super::error::WalkError;
use super::type_info::{AttrInfo, TypeInfo};
use crate::schema::{ElementDecl, ModelGroup, Occurs, Wildcard};

pub type VisitResult = Result<(), WalkError>;

/// Callbacks issued by [`SchemaWalker`](super::SchemaWalker).
///
/// Implement this trait to define custom behavior when traversing a schema.
/// Default implementations are no-ops. Returning an error from any callback
/// stops the walk and surfaces that error to the caller of `walk`.
///
/// Group callbacks come in matched enter/exit pairs, as do element and
/// substitution group callbacks.
pub trait SchemaVisitor {
    /// `previously_visited` is true when the same element and type are
    /// already being walked further up the current path. The walker does not
    /// descend into such an element.
    fn on_enter_element(
        &mut self,
        _element: &ElementDecl,
        _type_info: &TypeInfo,
        _previously_visited: bool,
    ) -> VisitResult {
        Ok(())
    }

    fn on_exit_element(
        &mut self,
        _element: &ElementDecl,
        _type_info: &TypeInfo,
        _previously_visited: bool,
    ) -> VisitResult {
        Ok(())
    }

    fn on_visit_attribute(&mut self, _element: &ElementDecl, _attr_info: &AttrInfo) -> VisitResult {
        Ok(())
    }

    fn on_visit_any_attribute(
        &mut self,
        _element: &ElementDecl,
        _any_attribute: &Wildcard,
    ) -> VisitResult {
        Ok(())
    }

    /// Called after the last attribute of a complex-typed element, before its content.
    fn on_end_attributes(&mut self, _element: &ElementDecl, _type_info: &TypeInfo) -> VisitResult {
        Ok(())
    }

    fn on_enter_substitution_group(&mut self, _head: &ElementDecl) -> VisitResult {
        Ok(())
    }

    fn on_exit_substitution_group(&mut self, _head: &ElementDecl) -> VisitResult {
        Ok(())
    }

    fn on_enter_sequence_group(&mut self, _group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        Ok(())
    }

    fn on_exit_sequence_group(&mut self, _group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        Ok(())
    }

    fn on_enter_choice_group(&mut self, _group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        Ok(())
    }

    fn on_exit_choice_group(&mut self, _group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        Ok(())
    }

    fn on_enter_all_group(&mut self, _group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        Ok(())
    }

    fn on_exit_all_group(&mut self, _group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        Ok(())
    }

    fn on_visit_any(&mut self, _any: &Wildcard, _occurs: Occurs) -> VisitResult {
        Ok(())
    }
}

impl<V: SchemaVisitor + ?Sized> SchemaVisitor for &mut V {
    fn on_enter_element(
        &mut self,
        element: &ElementDecl,
        type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        (**self).on_enter_element(element, type_info, previously_visited)
    }

    fn on_exit_element(
        &mut self,
        element: &ElementDecl,
        type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        (**self).on_exit_element(element, type_info, previously_visited)
    }

    fn on_visit_attribute(&mut self, element: &ElementDecl, attr_info: &AttrInfo) -> VisitResult {
        (**self).on_visit_attribute(element, attr_info)
    }

    fn on_visit_any_attribute(
        &mut self,
        element: &ElementDecl,
        any_attribute: &Wildcard,
    ) -> VisitResult {
        (**self).on_visit_any_attribute(element, any_attribute)
    }

    fn on_end_attributes(&mut self, element: &ElementDecl, type_info: &TypeInfo) -> VisitResult {
        (**self).on_end_attributes(element, type_info)
    }

    fn on_enter_substitution_group(&mut self, head: &ElementDecl) -> VisitResult {
        (**self).on_enter_substitution_group(head)
    }

    fn on_exit_substitution_group(&mut self, head: &ElementDecl) -> VisitResult {
        (**self).on_exit_substitution_group(head)
    }

    fn on_enter_sequence_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        (**self).on_enter_sequence_group(group, occurs)
    }

    fn on_exit_sequence_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        (**self).on_exit_sequence_group(group, occurs)
    }

    fn on_enter_choice_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        (**self).on_enter_choice_group(group, occurs)
    }

    fn on_exit_choice_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        (**self).on_exit_choice_group(group, occurs)
    }

    fn on_enter_all_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        (**self).on_enter_all_group(group, occurs)
    }

    fn on_exit_all_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        (**self).on_exit_all_group(group, occurs)
    }

    fn on_visit_any(&mut self, any: &Wildcard, occurs: Occurs) -> VisitResult {
        (**self).on_visit_any(any, occurs)
    }
}
