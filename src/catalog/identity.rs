use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// File extension every catalog on disk carries.
pub const CATALOG_EXTENSION: &str = "xosc";

/// Points at one named entry inside one catalog file.
///
/// `catalog_name` is the file stem (no `.xosc`), `entry_name` the `name`
/// attribute of the wanted `<Vehicle>`/`<Pedestrian>`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct CatalogReference {
    pub catalog_name: String,
    pub entry_name: String,
}

impl CatalogReference {
    pub fn new(catalog_name: impl Into<String>, entry_name: impl Into<String>) -> Self {
        Self {
            catalog_name: catalog_name.into(),
            entry_name: entry_name.into(),
        }
    }

    /// File name the reference resolves to, e.g. `VehicleCatalog.xosc`.
    pub fn catalog_file_name(&self) -> String {
        format!("{}.{CATALOG_EXTENSION}", self.catalog_name)
    }
}

/// Catalog entry tags the reader understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum EntryKind {
    Vehicle,
    Pedestrian,
}

impl EntryKind {
    /// XML tag of the entry element.
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Vehicle => "Vehicle",
            EntryKind::Pedestrian => "Pedestrian",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Vehicle => "vehicle",
            EntryKind::Pedestrian => "pedestrian",
        }
    }

    /// Maps an element tag to a kind; `None` for tags the reader rejects.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Vehicle" => Some(EntryKind::Vehicle),
            "Pedestrian" => Some(EntryKind::Pedestrian),
            _ => None,
        }
    }
}

impl Serialize for EntryKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// `vehicleCategory` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VehicleCategory {
    Car,
    Van,
    Truck,
    Trailer,
    Semitrailer,
    Bus,
    Motorbike,
    Bicycle,
    Train,
    Tram,
}

/// `pedestrianCategory` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PedestrianCategory {
    Pedestrian,
    Wheelchair,
    Animal,
}

/// `parameterType` values of a parameter declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParameterType {
    Integer,
    Double,
    String,
    UnsignedInt,
    UnsignedShort,
    Boolean,
    DateTime,
}

/// Closed string enumeration as spelled in catalog XML.
///
/// Lookups never fall back to a default variant: an unknown spelling is
/// `None` and the caller turns it into an error.
pub trait XmlEnum: Sized + Copy + 'static {
    /// Human label used in error messages.
    const KIND: &'static str;
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_xml(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }
}

impl XmlEnum for VehicleCategory {
    const KIND: &'static str = "vehicle category";
    const VARIANTS: &'static [Self] = &[
        VehicleCategory::Car,
        VehicleCategory::Van,
        VehicleCategory::Truck,
        VehicleCategory::Trailer,
        VehicleCategory::Semitrailer,
        VehicleCategory::Bus,
        VehicleCategory::Motorbike,
        VehicleCategory::Bicycle,
        VehicleCategory::Train,
        VehicleCategory::Tram,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Van => "van",
            VehicleCategory::Truck => "truck",
            VehicleCategory::Trailer => "trailer",
            VehicleCategory::Semitrailer => "semitrailer",
            VehicleCategory::Bus => "bus",
            VehicleCategory::Motorbike => "motorbike",
            VehicleCategory::Bicycle => "bicycle",
            VehicleCategory::Train => "train",
            VehicleCategory::Tram => "tram",
        }
    }
}

impl XmlEnum for PedestrianCategory {
    const KIND: &'static str = "pedestrian category";
    const VARIANTS: &'static [Self] = &[
        PedestrianCategory::Pedestrian,
        PedestrianCategory::Wheelchair,
        PedestrianCategory::Animal,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PedestrianCategory::Pedestrian => "pedestrian",
            PedestrianCategory::Wheelchair => "wheelchair",
            PedestrianCategory::Animal => "animal",
        }
    }
}

impl XmlEnum for ParameterType {
    const KIND: &'static str = "parameter type";
    const VARIANTS: &'static [Self] = &[
        ParameterType::Integer,
        ParameterType::Double,
        ParameterType::String,
        ParameterType::UnsignedInt,
        ParameterType::UnsignedShort,
        ParameterType::Boolean,
        ParameterType::DateTime,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Integer => "integer",
            ParameterType::Double => "double",
            ParameterType::String => "string",
            ParameterType::UnsignedInt => "unsignedInt",
            ParameterType::UnsignedShort => "unsignedShort",
            ParameterType::Boolean => "boolean",
            ParameterType::DateTime => "dateTime",
        }
    }

    // OpenSCENARIO 1.2 renamed `integer` to `int`; both name the same type.
    fn from_xml(value: &str) -> Option<Self> {
        match value {
            "int" => Some(ParameterType::Integer),
            other => Self::VARIANTS
                .iter()
                .copied()
                .find(|variant| variant.as_str() == other),
        }
    }
}

macro_rules! xml_enum_serde {
    ($($ty:ty),* $(,)?) => {$(
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                <$ty>::from_xml(&value).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} '{}'",
                        <$ty as XmlEnum>::KIND,
                        value
                    ))
                })
            }
        }
    )*};
}

xml_enum_serde!(VehicleCategory, PedestrianCategory, ParameterType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_back_to_itself() {
        for variant in VehicleCategory::VARIANTS {
            assert_eq!(VehicleCategory::from_xml(variant.as_str()), Some(*variant));
        }
        for variant in PedestrianCategory::VARIANTS {
            assert_eq!(
                PedestrianCategory::from_xml(variant.as_str()),
                Some(*variant)
            );
        }
        for variant in ParameterType::VARIANTS {
            assert_eq!(ParameterType::from_xml(variant.as_str()), Some(*variant));
        }
    }

    #[test]
    fn lookups_are_exact() {
        assert_eq!(VehicleCategory::from_xml("Car"), None);
        assert_eq!(VehicleCategory::from_xml(" car"), None);
        assert_eq!(VehicleCategory::from_xml("hovercraft"), None);
        assert_eq!(PedestrianCategory::from_xml("cyclist"), None);
        assert_eq!(ParameterType::from_xml("int"), Some(ParameterType::Integer));
        assert_eq!(
            ParameterType::from_xml("integer"),
            Some(ParameterType::Integer)
        );
        assert_eq!(ParameterType::from_xml("Int"), None);
        assert_eq!(ParameterType::from_xml("uint"), None);
        assert_eq!(
            ParameterType::from_xml("unsignedInt"),
            Some(ParameterType::UnsignedInt)
        );
        assert_eq!(
            ParameterType::from_xml("unsignedShort"),
            Some(ParameterType::UnsignedShort)
        );
        assert_eq!(
            ParameterType::from_xml("dateTime"),
            Some(ParameterType::DateTime)
        );
    }

    #[test]
    fn serde_uses_xml_spelling_and_rejects_unknown() {
        let json = serde_json::to_string(&ParameterType::DateTime).unwrap();
        assert_eq!(json, "\"dateTime\"");
        let back: ParameterType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ParameterType::DateTime);

        let int: ParameterType = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(int, ParameterType::Integer);

        let err = serde_json::from_str::<VehicleCategory>("\"hovercraft\"").unwrap_err();
        assert!(err.to_string().contains("unknown vehicle category 'hovercraft'"));
    }

    #[test]
    fn entry_kind_tags() {
        assert_eq!(EntryKind::from_tag("Vehicle"), Some(EntryKind::Vehicle));
        assert_eq!(EntryKind::from_tag("Pedestrian"), Some(EntryKind::Pedestrian));
        assert_eq!(EntryKind::from_tag("MiscObject"), None);
        assert_eq!(EntryKind::Pedestrian.tag(), "Pedestrian");
        assert_eq!(
            serde_json::to_string(&EntryKind::Vehicle).unwrap(),
            "\"vehicle\""
        );
    }

    #[test]
    fn reference_file_name() {
        let reference = CatalogReference::new("VehicleCatalog", "car_white");
        assert_eq!(reference.catalog_file_name(), "VehicleCatalog.xosc");
        assert_eq!(reference.entry_name, "car_white");
    }
}
