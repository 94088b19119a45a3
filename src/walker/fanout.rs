//! Forwarding one walk to several visitors.

use super::type_info::{AttrInfo, TypeInfo};
use super::visitor::{SchemaVisitor, VisitResult};
use crate::schema::{ElementDecl, ModelGroup, Occurs, Wildcard};

/// Forwards every callback to each registered visitor in registration order.
///
/// The first visitor to return an error stops the walk; visitors after it do
/// not see that callback.
#[derive(Default)]
pub struct VisitorFanout<'a> {
    visitors: Vec<&'a mut dyn SchemaVisitor>,
}

impl<'a> VisitorFanout<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, visitor: &'a mut dyn SchemaVisitor) -> Self {
        self.visitors.push(visitor);
        self
    }

    pub fn add(&mut self, visitor: &'a mut dyn SchemaVisitor) {
        self.visitors.push(visitor);
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn each(&mut self, mut call: impl FnMut(&mut dyn SchemaVisitor) -> VisitResult) -> VisitResult {
        for visitor in &mut self.visitors {
            call(&mut **visitor)?;
        }
        Ok(())
    }
}

impl SchemaVisitor for VisitorFanout<'_> {
    fn on_enter_element(
        &mut self,
        element: &ElementDecl,
        type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        self.each(|v| v.on_enter_element(element, type_info, previously_visited))
    }

    fn on_exit_element(
        &mut self,
        element: &ElementDecl,
        type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        self.each(|v| v.on_exit_element(element, type_info, previously_visited))
    }

    fn on_visit_attribute(&mut self, element: &ElementDecl, attr_info: &AttrInfo) -> VisitResult {
        self.each(|v| v.on_visit_attribute(element, attr_info))
    }

    fn on_visit_any_attribute(
        &mut self,
        element: &ElementDecl,
        any_attribute: &Wildcard,
    ) -> VisitResult {
        self.each(|v| v.on_visit_any_attribute(element, any_attribute))
    }

    fn on_end_attributes(&mut self, element: &ElementDecl, type_info: &TypeInfo) -> VisitResult {
        self.each(|v| v.on_end_attributes(element, type_info))
    }

    fn on_enter_substitution_group(&mut self, head: &ElementDecl) -> VisitResult {
        self.each(|v| v.on_enter_substitution_group(head))
    }

    fn on_exit_substitution_group(&mut self, head: &ElementDecl) -> VisitResult {
        self.each(|v| v.on_exit_substitution_group(head))
    }

    fn on_enter_sequence_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_enter_sequence_group(group, occurs))
    }

    fn on_exit_sequence_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_exit_sequence_group(group, occurs))
    }

    fn on_enter_choice_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_enter_choice_group(group, occurs))
    }

    fn on_exit_choice_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_exit_choice_group(group, occurs))
    }

    fn on_enter_all_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_enter_all_group(group, occurs))
    }

    fn on_exit_all_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_exit_all_group(group, occurs))
    }

    fn on_visit_any(&mut self, any: &Wildcard, occurs: Occurs) -> VisitResult {
        self.each(|v| v.on_visit_any(any, occurs))
    }
}
