//! Closed value sets and the ISO country table used by the schemas.
//! All tables are immutable static data loaded into the binary; the lookup
//! dataset files are cross-checked against them before anything else runs.

/// Unit/plant lifecycle status as published by the tracker.
pub const PLANT_STATUS_ENUM: &[&str] = &[
    "Cancelled",
    "Construction",
    "Halted",
    "Operational",
    "Planned",
    "Retired",
];

/// Coal type labels on map features.
pub const COAL_TYPE_ENUM: &[&str] = &[
    "Anthracite",
    "Biomass & Bituminous",
    "Bituminous",
    "Bituminous & Anthracite",
    "Lignite",
    "Lignite & Bituminous",
    "Lignite & Sub-Bituminous",
    "Sub-Bituminous",
    "Sub-Bituminous & Bituminous",
    "Unknown",
    "Waste Coal",
];

/// Long-form combustion technology labels on map features.
pub const TECHNOLOGY_ENUM: &[&str] = &[
    "Integrated Gasification Combined Cycle",
    "Integrated Gasification Combined Cycle with Carbon Capture & Storage",
    "Subcritical",
    "Subcritical with Carbon Capture & Storage",
    "Subcritical with Circulating Fluidized Bed",
    "Supercritical",
    "Supercritical with Carbon Capture & Storage",
    "Ultra-Supercritical",
    "Unknown",
    "Unknown with Carbon Capture & Storage",
];

/// Collapsed technology buckets used by the plant-swarm and
/// capacity-by-technology charts.
pub const SIMPLE_TECHNOLOGY_ENUM: &[&str] = &[
    "other",
    "subcritical",
    "supercritical",
    "ultra_supercritical",
    "unknown",
];

/// Per-country coal phase-out commitment stage.
pub const PHASE_OUT_ENUM: &[&str] = &[
    "N/A",
    "coal_free",
    "phase_out_by_2030",
    "phase_out_by_2040",
    "phase_out_in_consideration",
];

/// Per-country new-coal pipeline stage.
pub const NEW_COAL_ENUM: &[&str] = &[
    "N/A",
    "cancelled_coal",
    "committed_to_no_new_coal",
    "constructing_new_coal",
    "part_of_no_new_coal_power_compact",
    "planning_new_coal",
];

/// Regions used to tag analysis pieces.
pub const ANALYSIS_REGION_ENUM: &[&str] = &[
    "africa",
    "caribbean",
    "central_asia",
    "china",
    "europe",
    "global",
    "india",
    "indo_pacific",
    "middle_east",
    "north_america",
    "south_america",
];

/// Continental regions used by the news feed.
pub const NEWS_REGION_ENUM: &[&str] = &["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Regional aggregation groups for capacity and generation series.
pub const REGIONAL_GROUP_ENUM: &[&str] = &["china", "non_oecd_no_china", "oecd_and_eu"];

/// ISO 3166-1 alpha-2 code -> display name for every country the tracker
/// covers. Codes are lowercase; names match the published datasets.
pub const ISO_COUNTRIES: &[(&str, &str)] = &[
    ("ae", "United Arab Emirates"),
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("ba", "Bosnia and Herzegovina"),
    ("bd", "Bangladesh"),
    ("be", "Belgium"),
    ("bg", "Bulgaria"),
    ("br", "Brazil"),
    ("bw", "Botswana"),
    ("ca", "Canada"),
    ("cd", "DR Congo"),
    ("ci", "Ivory Coast"),
    ("cl", "Chile"),
    ("cn", "China"),
    ("co", "Colombia"),
    ("cz", "Czech Republic"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("do", "Dominican Republic"),
    ("eg", "Egypt"),
    ("es", "Spain"),
    ("et", "Ethiopia"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("ge", "Georgia"),
    ("gh", "Ghana"),
    ("gn", "Guinea"),
    ("gr", "Greece"),
    ("gt", "Guatemala"),
    ("hn", "Honduras"),
    ("hr", "Croatia"),
    ("hu", "Hungary"),
    ("id", "Indonesia"),
    ("ie", "Ireland"),
    ("il", "Israel"),
    ("in", "India"),
    ("ir", "Iran"),
    ("it", "Italy"),
    ("jm", "Jamaica"),
    ("jo", "Jordan"),
    ("jp", "Japan"),
    ("ke", "Kenya"),
    ("kg", "Kyrgyzstan"),
    ("kh", "Cambodia"),
    ("kp", "North Korea"),
    ("kr", "South Korea"),
    ("kz", "Kazakhstan"),
    ("la", "Laos"),
    ("lk", "Sri Lanka"),
    ("ma", "Morocco"),
    ("md", "Moldova"),
    ("me", "Montenegro"),
    ("mg", "Madagascar"),
    ("mk", "North Macedonia"),
    ("mm", "Myanmar"),
    ("mn", "Mongolia"),
    ("mw", "Malawi"),
    ("mx", "Mexico"),
    ("my", "Malaysia"),
    ("mz", "Mozambique"),
    ("na", "Namibia"),
    ("ne", "Niger"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("nz", "New Zealand"),
    ("pa", "Panama"),
    ("ph", "Philippines"),
    ("pk", "Pakistan"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("ro", "Romania"),
    ("rs", "Serbia"),
    ("ru", "Russia"),
    ("se", "Sweden"),
    ("si", "Slovenia"),
    ("sk", "Slovakia"),
    ("sn", "Senegal"),
    ("sv", "El Salvador"),
    ("th", "Thailand"),
    ("tj", "Tajikistan"),
    ("tr", "Turkey"),
    ("tw", "Taiwan"),
    ("tz", "Tanzania"),
    ("ua", "Ukraine"),
    ("us", "United States"),
    ("uz", "Uzbekistan"),
    ("ve", "Venezuela"),
    ("vn", "Vietnam"),
    ("xk", "Kosovo"),
    ("za", "South Africa"),
    ("zm", "Zambia"),
    ("zw", "Zimbabwe"),
];

/// Display name for a lowercase ISO alpha-2 code.
pub fn country_for_code(code: &str) -> Option<&'static str> {
    ISO_COUNTRIES
        .iter()
        .find(|(iso, _)| *iso == code)
        .map(|(_, name)| *name)
}

/// Lowercase ISO alpha-2 code for a display name.
pub fn code_for_country(name: &str) -> Option<&'static str> {
    ISO_COUNTRIES
        .iter()
        .find(|(_, country)| *country == name)
        .map(|(iso, _)| *iso)
}
