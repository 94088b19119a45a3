//! Building a [`Document`] from parse events.

use std::mem;

use tracing::{debug, trace};

use super::error::BuildError;
use super::event::XmlEvent;
use super::handler::ContentHandler;
use super::tree::{Attribute, Document, Element, NamespaceBinding, Node};
use crate::base::{Location, QName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Building,
    Finished,
}

/// A [`ContentHandler`] that assembles the events of one document into a tree.
///
/// Each element records the location of its start event. Consecutive
/// `characters` calls inside one element-content run become a single text
/// node. A builder is single use: after `end_document` it only hands out
/// the finished [`Document`].
///
/// # Example
///
/// ```
/// use xmlschema_walker::base::Location;
/// use xmlschema_walker::dom::{DomBuilder, XmlEvent};
///
/// let at = |column| Location::new(1, column, "memo.xml");
/// let document = DomBuilder::build([
///     XmlEvent::StartDocument,
///     XmlEvent::start_element("memo", at(1)),
///     XmlEvent::characters("call ", at(7)),
///     XmlEvent::characters("home", at(12)),
///     XmlEvent::end_element("memo"),
///     XmlEvent::EndDocument,
/// ])
/// .unwrap();
/// assert_eq!(document.root.text(), "call home");
/// assert_eq!(document.root.children.len(), 1);
/// ```
#[derive(Debug)]
pub struct DomBuilder {
    state: State,
    /// Open elements, innermost last.
    stack: Vec<Element>,
    root: Option<Element>,
    /// Character data not yet attached to the innermost open element.
    text: String,
    /// Declarations for the next element.
    namespaces: Vec<NamespaceBinding>,
}

impl Default for DomBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DomBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Ready,
            stack: Vec::new(),
            root: None,
            text: String::new(),
            namespaces: Vec::new(),
        }
    }

    /// Feed a complete event stream and return the document.
    pub fn build<I>(events: I) -> Result<Document, BuildError>
    where
        I: IntoIterator<Item = XmlEvent>,
    {
        let mut builder = Self::new();
        for event in events {
            event.dispatch(&mut builder)?;
        }
        builder.into_document()
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// The finished document; fails until `end_document` has been received.
    pub fn into_document(self) -> Result<Document, BuildError> {
        if self.state != State::Finished {
            return Err(BuildError::Incomplete);
        }
        self.root
            .map(|root| Document { root })
            .ok_or(BuildError::EmptyDocument)
    }

    fn check_building(&self) -> Result<(), BuildError> {
        match self.state {
            State::Building => Ok(()),
            State::Ready => Err(BuildError::NotStarted),
            State::Finished => Err(BuildError::Finished),
        }
    }

    /// Move pending character data into a text node of the innermost element.
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = mem::take(&mut self.text);
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(Node::Text(text));
        }
    }
}

impl ContentHandler for DomBuilder {
    fn start_document(&mut self) -> Result<(), BuildError> {
        match self.state {
            State::Ready => {
                self.state = State::Building;
                Ok(())
            }
            State::Building => Err(BuildError::AlreadyStarted),
            State::Finished => Err(BuildError::Finished),
        }
    }

    fn start_prefix_mapping(&mut self, prefix: Option<&str>, uri: &str) -> Result<(), BuildError> {
        self.check_building()?;
        self.namespaces.push(NamespaceBinding {
            prefix: prefix.map(Into::into),
            uri: uri.into(),
        });
        Ok(())
    }

    fn start_element(
        &mut self,
        name: &QName,
        attributes: &[Attribute],
        location: &Location,
    ) -> Result<(), BuildError> {
        self.check_building()?;
        if !location.position.is_valid() {
            return Err(BuildError::InvalidPosition {
                name: name.clone(),
                line: location.line(),
                column: location.column(),
            });
        }
        if self.stack.is_empty() && self.root.is_some() {
            return Err(BuildError::MultipleRoots {
                name: name.clone(),
                location: location.clone(),
            });
        }
        trace!("[DOM] start {name} at {location}");

        self.flush_text();
        let mut element = Element::new(name.clone(), location.clone());
        element.attributes = attributes.to_vec();
        element.namespaces = mem::take(&mut self.namespaces);
        self.stack.push(element);
        Ok(())
    }

    fn characters(&mut self, text: &str, location: &Location) -> Result<(), BuildError> {
        self.check_building()?;
        if self.stack.is_empty() {
            if text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n')) {
                return Ok(());
            }
            return Err(BuildError::TextOutsideRoot {
                location: location.clone(),
            });
        }
        self.text.push_str(text);
        Ok(())
    }

    fn end_element(&mut self, name: &QName) -> Result<(), BuildError> {
        self.check_building()?;
        let Some(open) = self.stack.last() else {
            return Err(BuildError::UnbalancedEnd { name: name.clone() });
        };
        if &open.name != name {
            return Err(BuildError::MismatchedEnd {
                expected: open.name.clone(),
                found: name.clone(),
            });
        }

        self.flush_text();
        let Some(element) = self.stack.pop() else {
            return Err(BuildError::UnbalancedEnd { name: name.clone() });
        };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), BuildError> {
        self.check_building()?;
        if let Some(open) = self.stack.last() {
            return Err(BuildError::UnclosedElements {
                open: self.stack.len(),
                name: open.name.clone(),
            });
        }
        if self.root.is_none() {
            return Err(BuildError::EmptyDocument);
        }
        self.state = State::Finished;
        debug!(
            "[DOM] Document complete: {} elements",
            self.root.as_ref().map_or(0, |root| root.descendants().count())
        );
        Ok(())
    }
}
