//! Typed values decoded from catalog entries.
//!
//! The structs mirror the attributes a `<Vehicle>` or `<Pedestrian>` carries
//! in the catalog XML. They are plain values: built once by the decoder and
//! never mutated afterwards.

use crate::catalog::identity::{EntryKind, ParameterType, PedestrianCategory, VehicleCategory};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Physical envelope of an entity: dimensions plus the center offset.
pub struct BoundingBox {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub center_z: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Geometry of one wheel axle.
pub struct Axle {
    pub max_steering: f64,
    pub wheel_diameter: f64,
    pub track_width: f64,
    pub position_x: f64,
    pub position_z: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One entry of a `<Properties>` block.
pub enum Property {
    Value { name: String, value: String },
    File { filepath: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Named parameter an entry exposes; the value stays as written.
pub struct ParameterDeclaration {
    pub name: String,
    pub parameter_type: ParameterType,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vehicle {
    pub name: String,
    pub category: VehicleCategory,
    pub bounding_box: BoundingBox,
    pub front_axle: Axle,
    pub rear_axle: Axle,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub max_deceleration: f64,
    pub properties: Vec<Property>,
    pub parameters: Vec<ParameterDeclaration>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pedestrian {
    pub name: String,
    pub model: String,
    pub mass: f64,
    pub category: PedestrianCategory,
    pub bounding_box: BoundingBox,
    pub properties: Vec<Property>,
    pub parameters: Vec<ParameterDeclaration>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Decoded catalog entry.
pub enum CatalogEntry {
    Vehicle(Vehicle),
    Pedestrian(Pedestrian),
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Vehicle(vehicle) => &vehicle.name,
            CatalogEntry::Pedestrian(pedestrian) => &pedestrian.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Vehicle(_) => EntryKind::Vehicle,
            CatalogEntry::Pedestrian(_) => EntryKind::Pedestrian,
        }
    }

    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match self {
            CatalogEntry::Vehicle(vehicle) => Some(vehicle),
            CatalogEntry::Pedestrian(_) => None,
        }
    }

    pub fn as_pedestrian(&self) -> Option<&Pedestrian> {
        match self {
            CatalogEntry::Pedestrian(pedestrian) => Some(pedestrian),
            CatalogEntry::Vehicle(_) => None,
        }
    }

    pub fn properties(&self) -> &[Property] {
        match self {
            CatalogEntry::Vehicle(vehicle) => &vehicle.properties,
            CatalogEntry::Pedestrian(pedestrian) => &pedestrian.properties,
        }
    }

    pub fn parameters(&self) -> &[ParameterDeclaration] {
        match self {
            CatalogEntry::Vehicle(vehicle) => &vehicle.parameters,
            CatalogEntry::Pedestrian(pedestrian) => &pedestrian.parameters,
        }
    }
}
