//! Driving a [`ContentHandler`] from XML text with `quick-xml`.

use std::fmt::Display;
use std::sync::Arc;

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{PrefixDeclaration, ResolveResult};
use text_size::TextSize;
use tracing::debug;

use super::builder::DomBuilder;
use super::error::ReadError;
use super::handler::ContentHandler;
use super::tree::{Attribute, Document};
use crate::base::{LineIndex, Location, Position, QName, clamp_offset};

/// Tokenize `input` and feed the events to `handler`.
///
/// Names are namespace-resolved, text and attribute values unescaped, CDATA
/// sections delivered as character data, and comments, processing
/// instructions and the doctype skipped. Locations are 1-based and carry
/// `system_id`.
pub fn read_str<H>(input: &str, system_id: &str, handler: &mut H) -> Result<(), ReadError>
where
    H: ContentHandler + ?Sized,
{
    let mut driver = Driver {
        input,
        index: LineIndex::new(input),
        system_id: Arc::from(system_id),
        reader: NsReader::from_str(input),
    };
    driver.reader.config_mut().expand_empty_elements = true;
    driver.run(handler)
}

impl Document {
    /// Parse `input` into a document; `system_id` names the source in locations.
    pub fn parse_str(input: &str, system_id: &str) -> Result<Document, ReadError> {
        let mut builder = DomBuilder::new();
        read_str(input, system_id, &mut builder)?;
        Ok(builder.into_document()?)
    }
}

struct Driver<'i> {
    input: &'i str,
    index: LineIndex,
    system_id: Arc<str>,
    reader: NsReader<&'i [u8]>,
}

impl<'i> Driver<'i> {
    fn run<H: ContentHandler + ?Sized>(&mut self, handler: &mut H) -> Result<(), ReadError> {
        handler.start_document()?;
        let mut elements = 0usize;
        loop {
            let offset = clamp_offset(self.reader.buffer_position());
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(error) => {
                    let position = clamp_offset(self.reader.error_position());
                    return Err(self.error(error, position));
                }
            };
            match event {
                Event::Start(start) => {
                    elements += 1;
                    self.start_element(&start, offset, handler)?;
                }
                Event::End(end) => {
                    let name = self.element_name(end.name(), offset)?;
                    handler.end_element(&name)?;
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| self.error(e, offset))?;
                    handler.characters(&text, &self.location(offset))?;
                }
                Event::CData(cdata) => {
                    let text = std::str::from_utf8(&cdata).map_err(|e| self.error(e, offset))?;
                    handler.characters(text, &self.location(offset))?;
                }
                Event::Eof => break,
                // comments, processing instructions, declaration, doctype
                _ => {}
            }
        }
        handler.end_document()?;
        debug!("[READ] {}: {elements} elements", self.system_id);
        Ok(())
    }

    fn start_element<H: ContentHandler + ?Sized>(
        &self,
        start: &BytesStart<'_>,
        offset: u32,
        handler: &mut H,
    ) -> Result<(), ReadError> {
        let name = self.element_name(start.name(), offset)?;
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.error(e, offset))?;
            let value = attr.unescape_value().map_err(|e| self.error(e, offset))?;
            if let Some(declaration) = attr.key.as_namespace_binding() {
                let prefix = match declaration {
                    PrefixDeclaration::Default => None,
                    PrefixDeclaration::Named(prefix) => Some(self.utf8(prefix, offset)?),
                };
                handler.start_prefix_mapping(prefix, &value)?;
                continue;
            }
            let (namespace, local) = self.reader.resolve_attribute(attr.key);
            let namespace = self.namespace(namespace, offset)?;
            let local = self.utf8(local.into_inner(), offset)?;
            attributes.push(Attribute::new(
                QName::new(namespace, local),
                value.into_owned(),
            ));
        }
        handler.start_element(&name, &attributes, &self.location(offset))?;
        Ok(())
    }

    fn element_name(
        &self,
        name: quick_xml::name::QName<'_>,
        offset: u32,
    ) -> Result<QName, ReadError> {
        let (namespace, local) = self.reader.resolve_element(name);
        let namespace = self.namespace(namespace, offset)?;
        let local = self.utf8(local.into_inner(), offset)?;
        Ok(QName::new(namespace, local))
    }

    fn namespace<'n>(
        &self,
        resolved: ResolveResult<'n>,
        offset: u32,
    ) -> Result<&'n str, ReadError> {
        match resolved {
            ResolveResult::Bound(namespace) => self.utf8(namespace.into_inner(), offset),
            ResolveResult::Unbound => Ok(""),
            ResolveResult::Unknown(prefix) => Err(self.error(
                format!("unknown namespace prefix '{}'", String::from_utf8_lossy(&prefix)),
                offset,
            )),
        }
    }

    fn utf8<'b>(&self, bytes: &'b [u8], offset: u32) -> Result<&'b str, ReadError> {
        std::str::from_utf8(bytes).map_err(|e| self.error(e, offset))
    }

    fn position(&self, offset: u32) -> Position {
        self.index.position(self.input, TextSize::new(offset))
    }

    fn location(&self, offset: u32) -> Location {
        Location {
            position: self.position(offset),
            system_id: self.system_id.clone(),
        }
    }

    fn error(&self, message: impl Display, offset: u32) -> ReadError {
        ReadError::xml(message.to_string(), self.position(offset))
    }
}
