//! Catalog entry decoder.
//!
//! Loads `<dir>/<catalog>.xosc`, scans the children of `<Catalog>` in document
//! order and turns the first `<Vehicle>`/`<Pedestrian>` whose `name` matches
//! into a typed value. Scanning is fail-fast: any other tag met before the
//! match aborts the decode with `UnsupportedCatalogType`, even when the wanted
//! entry appears further down.

use crate::catalog::element::{Element, catalog_element, parse_document};
use crate::catalog::identity::{CATALOG_EXTENSION, CatalogReference, EntryKind};
use crate::catalog::model::{
    Axle, BoundingBox, CatalogEntry, ParameterDeclaration, Pedestrian, Property, Vehicle,
};
use crate::error::{CatalogError, CatalogResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a catalog named `catalog_name` lives inside `catalog_dir`.
pub fn catalog_path(catalog_dir: &Path, catalog_name: &str) -> PathBuf {
    catalog_dir.join(format!("{catalog_name}.{CATALOG_EXTENSION}"))
}

/// Reads a catalog file.
///
/// A file that cannot be opened or read is `CatalogNotFound`; one that reads
/// but is not UTF-8 text is `CatalogMalformed`.
pub fn read_catalog(path: &Path) -> CatalogResult<String> {
    let bytes = fs::read(path).map_err(|source| CatalogError::CatalogNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|err| {
        CatalogError::malformed(
            path,
            "document",
            format!(
                "catalog is not valid UTF-8 (byte offset {})",
                err.utf8_error().valid_up_to()
            ),
        )
    })
}

/// Decode the entry `reference` points at.
///
/// One file read, one parse; nothing is cached between calls.
pub fn decode(catalog_dir: &Path, reference: &CatalogReference) -> CatalogResult<CatalogEntry> {
    let path = catalog_path(catalog_dir, &reference.catalog_name);
    let xml = read_catalog(&path)?;
    decode_str(&xml, &path, &reference.entry_name)
}

/// Decode `entry_name` from catalog text already in memory.
///
/// `source` only labels errors.
pub fn decode_str(xml: &str, source: &Path, entry_name: &str) -> CatalogResult<CatalogEntry> {
    let doc = parse_document(xml, source)?;
    let catalog = catalog_element(&doc, source)?;

    for child in catalog.children() {
        let Some(kind) = EntryKind::from_tag(child.tag()) else {
            return Err(CatalogError::UnsupportedCatalogType {
                path: source.to_path_buf(),
                tag: child.tag().to_string(),
            });
        };
        let name = child.attr("name")?;
        if name != entry_name {
            debug!(kind = kind.as_str(), name, "skipping catalog entry");
            continue;
        }

        let entry = child.named(name);
        let decoded = match kind {
            EntryKind::Vehicle => CatalogEntry::Vehicle(parse_vehicle(&entry)?),
            EntryKind::Pedestrian => CatalogEntry::Pedestrian(parse_pedestrian(&entry)?),
        };
        info!(
            kind = kind.as_str(),
            name,
            catalog = %source.display(),
            "decoded catalog entry"
        );
        return Ok(decoded);
    }

    Err(CatalogError::CatalogEntryNotFound {
        path: source.to_path_buf(),
        entry: entry_name.to_string(),
    })
}

fn parse_vehicle(vehicle: &Element<'_, '_>) -> CatalogResult<Vehicle> {
    let bounding_box = parse_bounding_box(vehicle)?;

    let performance = vehicle.child("Performance")?;
    let axles = vehicle.child("Axles")?;
    let front_axle = parse_axle(&axles.child("FrontAxle")?)?;
    let rear_axle = parse_axle(&axles.child("RearAxle")?)?;

    Ok(Vehicle {
        name: vehicle.string("name")?,
        category: vehicle.enumeration("vehicleCategory")?,
        bounding_box,
        front_axle,
        rear_axle,
        max_speed: performance.float("maxSpeed")?,
        max_acceleration: performance.float("maxAcceleration")?,
        max_deceleration: performance.float("maxDeceleration")?,
        properties: parse_properties(vehicle)?,
        parameters: parse_parameters(vehicle)?,
    })
}

fn parse_pedestrian(pedestrian: &Element<'_, '_>) -> CatalogResult<Pedestrian> {
    let bounding_box = parse_bounding_box(pedestrian)?;

    Ok(Pedestrian {
        name: pedestrian.string("name")?,
        model: pedestrian.string("model")?,
        mass: pedestrian.float("mass")?,
        category: pedestrian.enumeration("pedestrianCategory")?,
        bounding_box,
        properties: parse_properties(pedestrian)?,
        parameters: parse_parameters(pedestrian)?,
    })
}

fn parse_bounding_box(entry: &Element<'_, '_>) -> CatalogResult<BoundingBox> {
    let bounding_box = entry.child("BoundingBox")?;
    let center = bounding_box.child("Center")?;
    let dimensions = bounding_box.child("Dimensions")?;

    Ok(BoundingBox {
        width: dimensions.float("width")?,
        length: dimensions.float("length")?,
        height: dimensions.float("height")?,
        center_x: center.float("x")?,
        center_y: center.float("y")?,
        center_z: center.float("z")?,
    })
}

// positionY is not carried; see DESIGN.md.
fn parse_axle(axle: &Element<'_, '_>) -> CatalogResult<Axle> {
    Ok(Axle {
        max_steering: axle.float("maxSteering")?,
        wheel_diameter: axle.float("wheelDiameter")?,
        track_width: axle.float("trackWidth")?,
        position_x: axle.float("positionX")?,
        position_z: axle.float("positionZ")?,
    })
}

fn parse_properties(entry: &Element<'_, '_>) -> CatalogResult<Vec<Property>> {
    let Some(section) = entry.section("Properties") else {
        return Ok(Vec::new());
    };
    section
        .children()
        .map(|prop| -> CatalogResult<Property> {
            if prop.tag() == "File" {
                Ok(Property::File {
                    filepath: prop.string("filepath")?,
                })
            } else {
                Ok(Property::Value {
                    name: prop.string("name")?,
                    value: prop.string("value")?,
                })
            }
        })
        .collect()
}

fn parse_parameters(entry: &Element<'_, '_>) -> CatalogResult<Vec<ParameterDeclaration>> {
    let Some(section) = entry.section("ParameterDeclarations") else {
        return Ok(Vec::new());
    };
    section
        .children()
        .map(|param| -> CatalogResult<ParameterDeclaration> {
            Ok(ParameterDeclaration {
                name: param.string("name")?,
                parameter_type: param.enumeration("parameterType")?,
                value: param.string("value")?,
            })
        })
        .collect()
}
