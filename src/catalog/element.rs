//! Strict accessors over the parsed catalog tree.
//!
//! Each `Element` remembers the path it was reached by (`Vehicle[car]/Axles/
//! FrontAxle`) so a missing element or attribute is reported exactly where it
//! was expected. Nothing here substitutes defaults.

use crate::catalog::identity::XmlEnum;
use crate::error::{CatalogError, CatalogResult};
use roxmltree::{Document, Node};
use std::path::Path;

const CATALOG_TAG: &str = "Catalog";

/// Parses catalog text, mapping syntax errors to `CatalogMalformed`.
pub(crate) fn parse_document<'input>(
    xml: &'input str,
    source: &Path,
) -> CatalogResult<Document<'input>> {
    Document::parse(xml).map_err(|err| CatalogError::malformed(source, "document", err.to_string()))
}

/// The `<Catalog>` element directly below the document root.
pub(crate) fn catalog_element<'a, 'input>(
    doc: &'a Document<'input>,
    source: &'a Path,
) -> CatalogResult<Element<'a, 'input>> {
    let root = doc.root_element();
    root.children()
        .find(|node| node.is_element() && node.tag_name().name() == CATALOG_TAG)
        .map(|node| Element {
            node,
            location: CATALOG_TAG.to_string(),
            source,
        })
        .ok_or_else(|| {
            CatalogError::malformed(
                source,
                CATALOG_TAG,
                format!(
                    "missing <{CATALOG_TAG}> below root <{}>",
                    root.tag_name().name()
                ),
            )
        })
}

#[derive(Clone, Debug)]
pub(crate) struct Element<'a, 'input: 'a> {
    node: Node<'a, 'input>,
    location: String,
    source: &'a Path,
}

impl<'a, 'input: 'a> Element<'a, 'input> {
    pub(crate) fn tag(&self) -> &str {
        self.node.tag_name().name()
    }

    pub(crate) fn location(&self) -> &str {
        &self.location
    }

    /// Re-labels an entry element with its name once known.
    pub(crate) fn named(mut self, name: &str) -> Self {
        self.location = format!("{}[{name}]", self.tag());
        self
    }

    /// Element children in document order; text and comments are skipped.
    pub(crate) fn children(&self) -> impl Iterator<Item = Element<'a, 'input>> + '_ {
        self.node
            .children()
            .filter(|node| node.is_element())
            .map(move |node| Element {
                location: format!("{}/{}", self.location, node.tag_name().name()),
                node,
                source: self.source,
            })
    }

    /// Mandatory sub-element; the first one wins when repeated.
    pub(crate) fn child(&self, tag: &str) -> CatalogResult<Element<'a, 'input>> {
        self.children()
            .find(|child| child.tag() == tag)
            .ok_or_else(|| {
                CatalogError::malformed(
                    self.source,
                    format!("{}/{tag}", self.location),
                    "missing element",
                )
            })
    }

    /// Optional section: present only when it exists and holds at least one
    /// element child.
    pub(crate) fn section(&self, tag: &str) -> Option<Element<'a, 'input>> {
        self.children()
            .find(|child| child.tag() == tag)
            .filter(|section| section.children().next().is_some())
    }

    pub(crate) fn attr(&self, name: &str) -> CatalogResult<&'a str> {
        self.node.attribute(name).ok_or_else(|| {
            CatalogError::malformed(self.source, self.attr_location(name), "missing attribute")
        })
    }

    pub(crate) fn string(&self, name: &str) -> CatalogResult<String> {
        self.attr(name).map(str::to_string)
    }

    pub(crate) fn float(&self, name: &str) -> CatalogResult<f64> {
        let raw = self.attr(name)?;
        raw.trim().parse::<f64>().map_err(|_| {
            CatalogError::malformed(
                self.source,
                self.attr_location(name),
                format!("expected a number, found '{raw}'"),
            )
        })
    }

    pub(crate) fn enumeration<E: XmlEnum>(&self, name: &str) -> CatalogResult<E> {
        let raw = self.attr(name)?;
        E::from_xml(raw).ok_or_else(|| CatalogError::UnknownEnumValue {
            path: self.source.to_path_buf(),
            location: self.attr_location(name),
            kind: E::KIND,
            value: raw.to_string(),
        })
    }

    fn attr_location(&self, name: &str) -> String {
        format!("{}@{name}", self.location)
    }
}
