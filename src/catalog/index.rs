//! Listing of the entries one catalog file declares.
//!
//! The index applies the decoder's strictness to the whole file: a foreign tag
//! or a nameless entry fails the load, and so does a `(kind, name)` pair that
//! appears twice. Entries keep document order.

use crate::catalog::decoder::{catalog_path, read_catalog};
use crate::catalog::element::{catalog_element, parse_document};
use crate::catalog::identity::EntryKind;
use crate::error::{CatalogError, CatalogResult};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One `<Vehicle>`/`<Pedestrian>` declaration.
pub struct IndexEntry {
    pub kind: EntryKind,
    pub name: String,
}

#[derive(Debug)]
pub struct CatalogIndex {
    path: PathBuf,
    entries: Vec<IndexEntry>,
}

impl CatalogIndex {
    /// Read and index `<catalog_dir>/<catalog_name>.xosc`.
    pub fn load(catalog_dir: &Path, catalog_name: &str) -> CatalogResult<Self> {
        let path = catalog_path(catalog_dir, catalog_name);
        let xml = read_catalog(&path)?;
        Self::parse(&xml, &path)
    }

    /// Index catalog text already in memory; `source` labels errors.
    pub fn parse(xml: &str, source: &Path) -> CatalogResult<Self> {
        let doc = parse_document(xml, source)?;
        let catalog = catalog_element(&doc, source)?;

        let mut seen: BTreeSet<(EntryKind, &str)> = BTreeSet::new();
        let mut entries = Vec::new();
        for child in catalog.children() {
            let Some(kind) = EntryKind::from_tag(child.tag()) else {
                return Err(CatalogError::UnsupportedCatalogType {
                    path: source.to_path_buf(),
                    tag: child.tag().to_string(),
                });
            };
            let name = child.attr("name")?;
            if !seen.insert((kind, name)) {
                return Err(CatalogError::malformed(
                    source,
                    child.named(name).location(),
                    "duplicate catalog entry",
                ));
            }
            entries.push(IndexEntry {
                kind,
                name: name.to_string(),
            });
        }

        debug!(
            catalog = %source.display(),
            entries = entries.len(),
            "indexed catalog"
        );
        Ok(Self {
            path: source.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn contains(&self, kind: EntryKind, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.kind == kind && entry.name == name)
    }

    /// Names declared under one kind, in document order.
    pub fn names(&self, kind: EntryKind) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.kind == kind)
            .map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(entries: &str) -> CatalogResult<CatalogIndex> {
        let xml = format!("<OpenSCENARIO><Catalog name=\"Mixed\">{entries}</Catalog></OpenSCENARIO>");
        CatalogIndex::parse(&xml, Path::new("Mixed.xosc"))
    }

    #[test]
    fn lists_entries_in_document_order() {
        let idx = index(
            r#"<Vehicle name="car_red"/><Pedestrian name="walker"/><Vehicle name="car_blue"/>"#,
        )
        .unwrap();
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.entries()[1].kind, EntryKind::Pedestrian);
        assert_eq!(
            idx.names(EntryKind::Vehicle).collect::<Vec<_>>(),
            vec!["car_red", "car_blue"]
        );
        assert!(idx.contains(EntryKind::Pedestrian, "walker"));
        assert!(!idx.contains(EntryKind::Vehicle, "walker"));
        assert_eq!(idx.path(), Path::new("Mixed.xosc"));
    }

    #[test]
    fn same_name_under_different_kinds_is_allowed() {
        let idx = index(r#"<Vehicle name="x"/><Pedestrian name="x"/>"#).unwrap();
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn rejects_duplicates() {
        let err = index(r#"<Vehicle name="car"/><Vehicle name="car"/>"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::CatalogMalformed { ref location, ref reason, .. }
                if location == "Vehicle[car]" && reason.contains("duplicate")
        ));
    }

    #[test]
    fn rejects_foreign_tags() {
        let err = index(r#"<Vehicle name="car"/><MiscObject name="cone"/>"#).unwrap_err();
        assert_eq!(err.kind(), "unsupported_catalog_type");
    }

    #[test]
    fn empty_catalog_is_empty_index() {
        let idx = index("").unwrap();
        assert!(idx.is_empty());
    }
}
