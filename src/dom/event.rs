//! Owned parse events.

use smol_str::SmolStr;

use super::error::BuildError;
use super::handler::ContentHandler;
use super::tree::Attribute;
use crate::base::{Location, QName};

/// One [`ContentHandler`] call as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    StartDocument,
    StartPrefixMapping {
        prefix: Option<SmolStr>,
        uri: SmolStr,
    },
    StartElement {
        name: QName,
        attributes: Vec<Attribute>,
        location: Location,
    },
    Characters {
        text: String,
        location: Location,
    },
    EndElement {
        name: QName,
    },
    EndDocument,
}

impl XmlEvent {
    pub fn start_element(name: impl Into<QName>, location: Location) -> Self {
        Self::StartElement {
            name: name.into(),
            attributes: Vec::new(),
            location,
        }
    }

    pub fn characters(text: impl Into<String>, location: Location) -> Self {
        Self::Characters {
            text: text.into(),
            location,
        }
    }

    pub fn end_element(name: impl Into<QName>) -> Self {
        Self::EndElement { name: name.into() }
    }

    /// Deliver this event to `handler`.
    pub fn dispatch<H>(&self, handler: &mut H) -> Result<(), BuildError>
    where
        H: ContentHandler + ?Sized,
    {
        match self {
            XmlEvent::StartDocument => handler.start_document(),
            XmlEvent::StartPrefixMapping { prefix, uri } => {
                handler.start_prefix_mapping(prefix.as_deref(), uri)
            }
            XmlEvent::StartElement {
                name,
                attributes,
                location,
            } => handler.start_element(name, attributes, location),
            XmlEvent::Characters { text, location } => handler.characters(text, location),
            XmlEvent::EndElement { name } => handler.end_element(name),
            XmlEvent::EndDocument => handler.end_document(),
        }
    }
}

/// Records the stream so it can be replayed with [`XmlEvent::dispatch`].
impl ContentHandler for Vec<XmlEvent> {
    fn start_document(&mut self) -> Result<(), BuildError> {
        self.push(XmlEvent::StartDocument);
        Ok(())
    }

    fn start_prefix_mapping(&mut self, prefix: Option<&str>, uri: &str) -> Result<(), BuildError> {
        self.push(XmlEvent::StartPrefixMapping {
            prefix: prefix.map(SmolStr::from),
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
        self.push(XmlEvent::StartElement {
            name: name.clone(),
            attributes: attributes.to_vec(),
            location: location.clone(),
        });
        Ok(())
    }

    fn characters(&mut self, text: &str, location: &Location) -> Result<(), BuildError> {
        self.push(XmlEvent::characters(text, location.clone()));
        Ok(())
    }

    fn end_element(&mut self, name: &QName) -> Result<(), BuildError> {
        self.push(XmlEvent::end_element(name.clone()));
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), BuildError> {
        self.push(XmlEvent::EndDocument);
        Ok(())
    }
}
