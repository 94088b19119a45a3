//! The document tree produced by [`DomBuilder`](super::DomBuilder).

use smol_str::SmolStr;

use crate::base::{Location, QName};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<QName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A namespace declaration (`xmlns` / `xmlns:prefix`) made on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespaceBinding {
    /// `None` for the default namespace.
    pub prefix: Option<SmolStr>,
    pub uri: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: QName,
    /// In document order.
    pub attributes: Vec<Attribute>,
    pub namespaces: Vec<NamespaceBinding>,
    pub children: Vec<Node>,
    /// Where the start tag was observed.
    pub location: Location,
}

impl Element {
    pub fn new(name: QName, location: Location) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            namespaces: Vec::new(),
            children: Vec::new(),
            location,
        }
    }

    pub fn attribute(&self, name: &QName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| &attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children.iter().filter_map(Node::as_text).collect()
    }

    /// This element and every element below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Structural equality: names, attribute sets, child order and text.
    ///
    /// Provenance and namespace declarations are not compared. With
    /// `ignore_whitespace`, whitespace-only text nodes are skipped and the
    /// remaining text is compared with surrounding whitespace trimmed.
    pub fn is_equivalent(&self, other: &Element, ignore_whitespace: bool) -> bool {
        if self.name != other.name || self.attributes.len() != other.attributes.len() {
            return false;
        }
        let same_attributes = self
            .attributes
            .iter()
            .all(|attr| other.attribute(&attr.name) == Some(attr.value.as_str()));
        if !same_attributes {
            return false;
        }

        let mut mine = significant_children(&self.children, ignore_whitespace);
        let mut theirs = significant_children(&other.children, ignore_whitespace);
        loop {
            match (mine.next(), theirs.next()) {
                (None, None) => return true,
                (Some(Node::Element(a)), Some(Node::Element(b))) => {
                    if !a.is_equivalent(b, ignore_whitespace) {
                        return false;
                    }
                }
                (Some(Node::Text(a)), Some(Node::Text(b))) => {
                    let equal = if ignore_whitespace {
                        a.trim() == b.trim()
                    } else {
                        a == b
                    };
                    if !equal {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

fn significant_children(
    children: &[Node],
    ignore_whitespace: bool,
) -> impl Iterator<Item = &Node> {
    children.iter().filter(move |node| match node {
        Node::Text(text) => !(ignore_whitespace && text.trim().is_empty()),
        Node::Element(_) => true,
    })
}

/// Pre-order iterator over an element subtree.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.child_elements().rev());
        Some(element)
    }
}

/// A complete document: exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn descendants(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    pub fn is_equivalent(&self, other: &Document, ignore_whitespace: bool) -> bool {
        self.root.is_equivalent(&other.root, ignore_whitespace)
    }
}
