//! OpenSCENARIO catalog reading.
//!
//! `decoder` turns one named entry of a catalog file into a typed value;
//! `index` lists what a catalog declares. Both share the strict tree accessors
//! in `element`, so they agree on which files are acceptable.

mod element;

pub mod decoder;
pub mod identity;
pub mod index;
pub mod model;

pub use decoder::{catalog_path, decode, decode_str, read_catalog};
pub use identity::{
    CATALOG_EXTENSION, CatalogReference, EntryKind, ParameterType, PedestrianCategory,
    VehicleCategory, XmlEnum,
};
pub use index::{CatalogIndex, IndexEntry};
pub use model::{
    Axle, BoundingBox, CatalogEntry, ParameterDeclaration, Pedestrian, Property, Vehicle,
};
