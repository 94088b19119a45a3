//! The event-consumer interface.

use super::error::BuildError;
use super::tree::Attribute;
use crate::base::{Location, QName};

/// Receives the parse events of one document, in document order.
///
/// Names arrive already namespace-resolved. Every `start_element` must be
/// matched by an `end_element`, and the whole stream is bracketed by
/// `start_document` / `end_document`.
pub trait ContentHandler {
    fn start_document(&mut self) -> Result<(), BuildError>;

    /// A namespace declaration on the next element; `prefix` is `None` for
    /// the default namespace.
    fn start_prefix_mapping(&mut self, _prefix: Option<&str>, _uri: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn start_element(
        &mut self,
        name: &QName,
        attributes: &[Attribute],
        location: &Location,
    ) -> Result<(), BuildError>;

    /// Character data; may be split over several calls.
    fn characters(&mut self, text: &str, location: &Location) -> Result<(), BuildError>;

    fn end_element(&mut self, name: &QName) -> Result<(), BuildError>;

    fn end_document(&mut self) -> Result<(), BuildError>;
}

impl<H: ContentHandler + ?Sized> ContentHandler for &mut H {
    fn start_document(&mut self) -> Result<(), BuildError> {
        (**self).start_document()
    }

    fn start_prefix_mapping(&mut self, prefix: Option<&str>, uri: &str) -> Result<(), BuildError> {
        (**self).start_prefix_mapping(prefix, uri)
    }

    fn start_element(
        &mut self,
        name: &QName,
        attributes: &[Attribute],
        location: &Location,
    ) -> Result<(), BuildError> {
        (**self).start_element(name, attributes, location)
    }

    fn characters(&mut self, text: &str, location: &Location) -> Result<(), BuildError> {
        (**self).characters(text, location)
    }

    fn end_element(&mut self, name: &QName) -> Result<(), BuildError> {
        (**self).end_element(name)
    }

    fn end_document(&mut self) -> Result<(), BuildError> {
        (**self).end_document()
    }
}
