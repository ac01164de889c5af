//! Reader for OpenSCENARIO catalogs.
//!
//! The crate decodes `<Vehicle>` and `<Pedestrian>` entries of `.xosc` catalog
//! files into typed values. Public functions here form the contract the
//! `catalog-entry` helper depends on: catalog directory discovery plus the
//! re-exported decoder, index and model types.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod error;

pub use catalog::{
    Axle, BoundingBox, CatalogEntry, CatalogIndex, CatalogReference, EntryKind, IndexEntry,
    ParameterDeclaration, ParameterType, Pedestrian, PedestrianCategory, Property, Vehicle,
    VehicleCategory, XmlEnum, catalog_path, decode, decode_str,
};
pub use error::{CatalogError, CatalogResult};

/// Environment variable naming the default catalog directory.
pub const CATALOG_DIR_ENV: &str = "XOSC_CATALOG_DIR";

/// Verifies that a catalog directory hint points at a real directory.
fn catalog_dir_from_hint(hint: &Path) -> Option<PathBuf> {
    if hint.as_os_str().is_empty() || !hint.is_dir() {
        return None;
    }
    fs::canonicalize(hint).ok()
}

/// Locate the catalog directory.
///
/// Search order: an explicit path (which must exist), then `XOSC_CATALOG_DIR`
/// when it names a directory, then the current working directory.
pub fn resolve_catalog_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return match catalog_dir_from_hint(path) {
            Some(dir) => Ok(dir),
            None => bail!("catalog directory not found: {}", path.display()),
        };
    }

    if let Some(env_dir) = env::var_os(CATALOG_DIR_ENV).filter(|value| !value.is_empty()) {
        if let Some(dir) = catalog_dir_from_hint(Path::new(&env_dir)) {
            return Ok(dir);
        }
        bail!(
            "{CATALOG_DIR_ENV} does not point at a directory: {}",
            Path::new(&env_dir).display()
        );
    }

    Ok(env::current_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_must_exist() {
        let err =
            resolve_catalog_dir(Some(Path::new("/definitely/not/a/catalog/dir"))).unwrap_err();
        assert!(err.to_string().contains("catalog directory not found"));
    }

    #[test]
    fn explicit_dir_is_canonicalized() {
        let dir = std::env::temp_dir();
        let resolved = resolve_catalog_dir(Some(&dir)).unwrap();
        assert_eq!(resolved, fs::canonicalize(&dir).unwrap());
    }
}
