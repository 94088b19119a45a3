//! A visitor that records every callback as an owned event.

use super::type_info::{AttrInfo, TypeInfo, TypeKey};
use super::visitor::{SchemaVisitor, VisitResult};
use crate::base::{Location, QName};
use crate::schema::{Compositor, ElementDecl, ModelGroup, Occurs, Wildcard};

/// One visitor callback, detached from the schema it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkEvent {
    EnterElement {
        name: QName,
        type_key: TypeKey,
        previously_visited: bool,
        location: Option<Location>,
    },
    ExitElement {
        name: QName,
        previously_visited: bool,
    },
    Attribute {
        element: QName,
        attribute: AttrInfo,
    },
    AnyAttribute {
        element: QName,
        wildcard: Wildcard,
    },
    EndAttributes {
        element: QName,
    },
    EnterSubstitutionGroup {
        head: QName,
    },
    ExitSubstitutionGroup {
        head: QName,
    },
    EnterGroup {
        compositor: Compositor,
        occurs: Occurs,
    },
    ExitGroup {
        compositor: Compositor,
    },
    Any {
        wildcard: Wildcard,
        occurs: Occurs,
    },
}

/// Collects [`WalkEvent`]s in callback order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRecorder {
    events: Vec<WalkEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[WalkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<WalkEvent> {
        self.events
    }

    /// Number of `on_enter_element` calls seen, previously visited ones included.
    pub fn entered_elements(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, WalkEvent::EnterElement { .. }))
            .count()
    }

    /// Names of entered elements, in order.
    pub fn element_names(&self) -> Vec<&QName> {
        self.events
            .iter()
            .filter_map(|event| match event {
                WalkEvent::EnterElement { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.events.push(WalkEvent::EnterGroup {
            compositor: group.compositor,
            occurs,
        });
        Ok(())
    }

    fn end_group(&mut self, group: &ModelGroup) -> VisitResult {
        self.events.push(WalkEvent::ExitGroup {
            compositor: group.compositor,
        });
        Ok(())
    }
}

impl SchemaVisitor for EventRecorder {
    fn on_enter_element(
        &mut self,
        element: &ElementDecl,
        type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        self.events.push(WalkEvent::EnterElement {
            name: element.name.clone(),
            type_key: type_info.key.clone(),
            previously_visited,
            location: element.location(),
        });
        Ok(())
    }

    fn on_exit_element(
        &mut self,
        element: &ElementDecl,
        _type_info: &TypeInfo,
        previously_visited: bool,
    ) -> VisitResult {
        self.events.push(WalkEvent::ExitElement {
            name: element.name.clone(),
            previously_visited,
        });
        Ok(())
    }

    fn on_visit_attribute(&mut self, element: &ElementDecl, attr_info: &AttrInfo) -> VisitResult {
        self.events.push(WalkEvent::Attribute {
            element: element.name.clone(),
            attribute: attr_info.clone(),
        });
        Ok(())
    }

    fn on_visit_any_attribute(
        &mut self,
        element: &ElementDecl,
        any_attribute: &Wildcard,
    ) -> VisitResult {
        self.events.push(WalkEvent::AnyAttribute {
            element: element.name.clone(),
            wildcard: any_attribute.clone(),
        });
        Ok(())
    }

    fn on_end_attributes(&mut self, element: &ElementDecl, _type_info: &TypeInfo) -> VisitResult {
        self.events.push(WalkEvent::EndAttributes {
            element: element.name.clone(),
        });
        Ok(())
    }

    fn on_enter_substitution_group(&mut self, head: &ElementDecl) -> VisitResult {
        self.events.push(WalkEvent::EnterSubstitutionGroup {
            head: head.name.clone(),
        });
        Ok(())
    }

    fn on_exit_substitution_group(&mut self, head: &ElementDecl) -> VisitResult {
        self.events.push(WalkEvent::ExitSubstitutionGroup {
            head: head.name.clone(),
        });
        Ok(())
    }

    fn on_enter_sequence_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.group(group, occurs)
    }

    fn on_exit_sequence_group(&mut self, group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        self.end_group(group)
    }

    fn on_enter_choice_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.group(group, occurs)
    }

    fn on_exit_choice_group(&mut self, group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        self.end_group(group)
    }

    fn on_enter_all_group(&mut self, group: &ModelGroup, occurs: Occurs) -> VisitResult {
        self.group(group, occurs)
    }

    fn on_exit_all_group(&mut self, group: &ModelGroup, _occurs: Occurs) -> VisitResult {
        self.end_group(group)
    }

    fn on_visit_any(&mut self, any: &Wildcard, occurs: Occurs) -> VisitResult {
        self.events.push(WalkEvent::Any {
            wildcard: any.clone(),
            occurs,
        });
        Ok(())
    }
}
