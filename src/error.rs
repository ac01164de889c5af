//! Typed failures raised while reading a catalog.
//!
//! Every variant names the catalog file it came from so a caller can report
//! the problem without re-running the decode. None of them are retried.

use std::io;
use std::path::PathBuf;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("catalog not found: {}", .path.display())]
    CatalogNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog {}: {location}: {reason}", .path.display())]
    CatalogMalformed {
        path: PathBuf,
        location: String,
        reason: String,
    },

    #[error("unsupported catalog entry type <{tag}> in {}", .path.display())]
    UnsupportedCatalogType { path: PathBuf, tag: String },

    #[error("unknown {kind} '{value}' at {location} in {}", .path.display())]
    UnknownEnumValue {
        path: PathBuf,
        location: String,
        kind: &'static str,
        value: String,
    },

    #[error("catalog entry '{entry}' not found in {}", .path.display())]
    CatalogEntryNotFound { path: PathBuf, entry: String },
}

impl CatalogError {
    /// Stable label for the failure class, used by the helper binary output.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::CatalogNotFound { .. } => "catalog_not_found",
            CatalogError::CatalogMalformed { .. } => "catalog_malformed",
            CatalogError::UnsupportedCatalogType { .. } => "unsupported_catalog_type",
            CatalogError::UnknownEnumValue { .. } => "unknown_enum_value",
            CatalogError::CatalogEntryNotFound { .. } => "catalog_entry_not_found",
        }
    }

    /// Catalog file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CatalogError::CatalogNotFound { path, .. }
            | CatalogError::CatalogMalformed { path, .. }
            | CatalogError::UnsupportedCatalogType { path, .. }
            | CatalogError::UnknownEnumValue { path, .. }
            | CatalogError::CatalogEntryNotFound { path, .. } => path,
        }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        location: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CatalogMalformed {
            path: path.into(),
            location: location.into(),
            reason: reason.into(),
        }
    }
}
