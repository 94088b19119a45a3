//! Position-tracking document trees.
//!
//! A [`DomBuilder`] consumes [`ContentHandler`] events and assembles a
//! [`Document`] whose elements remember where their start tag was seen.
//! Events come from any tokenizer; with the `reader` feature,
//! [`read_str`] drives a handler from XML text using `quick-xml`.
//!
//! ```text
//! XML text ──► read_str ──► ContentHandler ──► DomBuilder ──► Document
//!                             ▲
//!                  XmlEvent::dispatch (recorded streams)
//! ```

mod builder;
mod error;
mod event;
mod handler;
#[cfg(feature = "reader")]
mod reader;
mod tree;

pub use builder::DomBuilder;
pub use error::{BuildError, ReadError};
pub use event::XmlEvent;
pub use handler::ContentHandler;
#[cfg(feature = "reader")]
pub use reader::read_str;
pub use tree::{Attribute, Descendants, Document, Element, NamespaceBinding, Node};

#[cfg(test)]
mod tests;
