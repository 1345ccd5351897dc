//! Declarative dataset descriptions: each output file gets a static tree of
//! field specs (type, required-ness, attached checks) that the generic walker
//! in [crate::schema::validate] consumes. No reflection, no dynamic dispatch.

use std::fmt;

/// The output file families the publish gate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    CoalCapacityLandscape,
    CoalPowerGeneration,
    CountryBoundingBoxes,
    CountryCoalStatus,
    CountryIsoLookup,
    CountryMain,
    Homepage,
    IsoCountryLookup,
    MapboxFeatures,
    NewsFeed,
    WebsiteTexts,
}

impl DatasetKind {
    /// All kinds, in the canonical listing order.
    pub fn all() -> &'static [DatasetKind] {
        &[
            DatasetKind::CoalCapacityLandscape,
            DatasetKind::CoalPowerGeneration,
            DatasetKind::CountryBoundingBoxes,
            DatasetKind::CountryCoalStatus,
            DatasetKind::CountryIsoLookup,
            DatasetKind::CountryMain,
            DatasetKind::Homepage,
            DatasetKind::IsoCountryLookup,
            DatasetKind::MapboxFeatures,
            DatasetKind::NewsFeed,
            DatasetKind::WebsiteTexts,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoalCapacityLandscape => "coal_capacity_landscape",
            Self::CoalPowerGeneration => "coal_power_generation",
            Self::CountryBoundingBoxes => "country_bounding_boxes",
            Self::CountryCoalStatus => "country_coal_status",
            Self::CountryIsoLookup => "country_iso_lookup",
            Self::CountryMain => "country_main",
            Self::Homepage => "homepage",
            Self::IsoCountryLookup => "iso_country_lookup",
            Self::MapboxFeatures => "mapbox_features",
            Self::NewsFeed => "newsfeed",
            Self::WebsiteTexts => "website_texts",
        }
    }

    /// Parse a registry/CLI kind name.
    pub fn from_name(name: &str) -> Option<DatasetKind> {
        DatasetKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
    }

    /// The two lookup datasets are the referential authority and must be
    /// loaded before any dependent file is validated.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::IsoCountryLookup | Self::CountryIsoLookup)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How map keys are checked.
#[derive(Debug, Clone, Copy)]
pub enum KeyKind {
    /// Lowercase ISO alpha-2 code; membership checked against the lookup store.
    Iso,
    /// Country display name; membership checked against the lookup store.
    Country,
    /// News article id (`coalwire`/`newsapi` prefix convention).
    ArticleId,
    /// Member of a closed set.
    Enum(&'static [&'static str]),
}

/// Leaf and composite value types. Numeric types are strict: an integer
/// where a float is declared (or the reverse) is a violation, matching the
/// generation process's own typing.
#[derive(Debug, Clone)]
pub enum FieldType {
    Str,
    Int,
    /// Non-negative integer.
    PosInt,
    Float,
    /// Non-negative float.
    PosFloat,
    Bool,
    /// Integer in the plausible publication range [2000, 2050].
    Year,
    /// `"N/A"` or a string like `"-3.2%"`.
    Percentage,
    /// Long-form date, e.g. `"March 4, 2025"`.
    AmericanDate,
    /// Absolute http(s) URL.
    Url,
    /// URL or the literal `"N/A"` (footnote links).
    UrlOrNa,
    /// Integer or the literal `"N/A"` (plant age).
    IntOrNa,
    /// News article id.
    ArticleId,
    /// Lowercase ISO alpha-2 code; referential check against the lookup store.
    IsoCode,
    /// Country display name; referential check against the lookup store.
    CountryName,
    /// Exact string, e.g. GeoJSON `"type": "Feature"`.
    Literal(&'static str),
    /// JSON array of one element shape.
    List(Box<FieldSpec>),
    /// Closed JSON object: all declared fields checked, unknown fields rejected.
    Object(&'static str, Vec<Field>),
    /// JSON object used as a homogeneous map.
    Map(KeyKind, Box<FieldSpec>),
}

impl FieldType {
    /// Short name used in expected-vs-actual messages.
    pub fn expected_name(&self) -> String {
        match self {
            Self::Str => "string".to_string(),
            Self::Int => "integer".to_string(),
            Self::PosInt => "non-negative integer".to_string(),
            Self::Float => "float".to_string(),
            Self::PosFloat => "non-negative float".to_string(),
            Self::Bool => "boolean".to_string(),
            Self::Year => "year in [2000, 2050]".to_string(),
            Self::Percentage => "percentage string or \"N/A\"".to_string(),
            Self::AmericanDate => "long-form date (\"March 4, 2025\")".to_string(),
            Self::Url => "http(s) URL".to_string(),
            Self::UrlOrNa => "http(s) URL or \"N/A\"".to_string(),
            Self::IntOrNa => "integer or \"N/A\"".to_string(),
            Self::ArticleId => "article id".to_string(),
            Self::IsoCode => "ISO alpha-2 code".to_string(),
            Self::CountryName => "country name".to_string(),
            Self::Literal(lit) => format!("literal \"{lit}\""),
            Self::List(_) => "array".to_string(),
            Self::Object(name, _) => format!("{name} object"),
            Self::Map(_, _) => "object map".to_string(),
        }
    }
}

/// Constraint attached to a field beyond its type, checked after the type
/// matches. Collection checks see the whole array/map at once.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Array/map/string length at least `n`.
    MinLen(usize),
    /// Array/string length exactly `n`.
    Len(usize),
    /// String member of a closed set.
    Enum(&'static [&'static str]),
    /// `[lon, lat]` pair within world bounds.
    LonLat,
    /// `[left, top, right, bottom]` bounding box.
    Bounds,
    /// Array elements unique by their whole value.
    Unique,
    /// Array elements (objects) unique by the named field.
    UniqueBy(&'static str),
    /// Array of objects sorted by `capacity_mw` descending.
    SortedByCapacityDesc,
    /// Map must contain these keys.
    RequiredKeys(&'static [&'static str]),
}

/// One value position in the schema tree.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub ty: FieldType,
    pub checks: Vec<Check>,
}

impl FieldSpec {
    pub fn new(ty: FieldType) -> FieldSpec {
        FieldSpec {
            ty,
            checks: Vec::new(),
        }
    }

    pub fn with_checks(ty: FieldType, checks: Vec<Check>) -> FieldSpec {
        FieldSpec { ty, checks }
    }
}

/// A named field of a closed object.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub spec: FieldSpec,
}

impl Field {
    pub fn required(name: &'static str, spec: FieldSpec) -> Field {
        Field {
            name,
            required: true,
            spec,
        }
    }
}

/// The complete declared shape of one dataset file.
#[derive(Debug, Clone)]
pub struct Schema {
    pub kind: DatasetKind,
    pub root: FieldSpec,
}
