//! Schema definitions, one constructor per published dataset. Shapes follow
//! the generation process exactly: closed objects, strict numeric types, and
//! the per-file collection constraints the frontend relies on.

use crate::data::enums::{
    ANALYSIS_REGION_ENUM, COAL_TYPE_ENUM, NEWS_REGION_ENUM, NEW_COAL_ENUM, PHASE_OUT_ENUM,
    PLANT_STATUS_ENUM, REGIONAL_GROUP_ENUM, SIMPLE_TECHNOLOGY_ENUM, TECHNOLOGY_ENUM,
};
use crate::schema::model::{Check, DatasetKind, Field, FieldSpec, FieldType, KeyKind, Schema};

/// Schema for a dataset kind.
pub fn schema_for(kind: DatasetKind) -> Schema {
    let root = match kind {
        DatasetKind::CoalCapacityLandscape => coal_capacity_landscape(),
        DatasetKind::CoalPowerGeneration => coal_power_generation(),
        DatasetKind::CountryBoundingBoxes => country_bounding_boxes(),
        DatasetKind::CountryCoalStatus => country_coal_status(),
        DatasetKind::CountryIsoLookup => country_iso_lookup(),
        DatasetKind::CountryMain => country_main(),
        DatasetKind::Homepage => homepage(),
        DatasetKind::IsoCountryLookup => iso_country_lookup(),
        DatasetKind::MapboxFeatures => mapbox_features(),
        DatasetKind::NewsFeed => newsfeed(),
        DatasetKind::WebsiteTexts => website_texts(),
    };
    Schema { kind, root }
}

fn spec(ty: FieldType) -> FieldSpec {
    FieldSpec::new(ty)
}

fn checked(ty: FieldType, checks: Vec<Check>) -> FieldSpec {
    FieldSpec::with_checks(ty, checks)
}

fn req(name: &'static str, field_spec: FieldSpec) -> Field {
    Field::required(name, field_spec)
}

fn obj(name: &'static str, fields: Vec<Field>) -> FieldSpec {
    spec(FieldType::Object(name, fields))
}

fn list(element: FieldSpec) -> FieldSpec {
    spec(FieldType::List(Box::new(element)))
}

fn list_checked(element: FieldSpec, checks: Vec<Check>) -> FieldSpec {
    checked(FieldType::List(Box::new(element)), checks)
}

fn iso_map(element: FieldSpec, checks: Vec<Check>) -> FieldSpec {
    checked(FieldType::Map(KeyKind::Iso, Box::new(element)), checks)
}

fn str_enum(allowed: &'static [&'static str]) -> FieldSpec {
    checked(FieldType::Str, vec![Check::Enum(allowed)])
}

/// The six lifecycle statuses as counter fields of the given numeric type.
fn status_fields(ty: FieldType) -> Vec<Field> {
    [
        "operational",
        "construction",
        "planned",
        "cancelled",
        "halted",
        "retired",
    ]
    .into_iter()
    .map(|name| req(name, spec(ty.clone())))
    .collect()
}

/// The nine generation fuels as fields of the given numeric type.
fn fuel_fields(ty: FieldType) -> Vec<Field> {
    [
        "bioenergy",
        "coal",
        "gas",
        "hydro",
        "nuclear",
        "other_fossil",
        "other_renewables",
        "wind",
        "solar",
    ]
    .into_iter()
    .map(|name| req(name, spec(ty.clone())))
    .collect()
}

/// Year-keyed status counters plus the 2030 retirement projection.
fn capacity_snapshot() -> FieldSpec {
    let mut fields = vec![req("year", spec(FieldType::Year))];
    fields.extend(status_fields(FieldType::PosInt));
    fields.push(req(
        "expected_retirements_by_2030",
        spec(FieldType::PosInt),
    ));
    obj("capacity_snapshot", fields)
}

/// Per-country phase-out / new-coal / PPCA status block.
fn country_statuses() -> FieldSpec {
    obj(
        "statuses",
        vec![
            req("phase_out", str_enum(PHASE_OUT_ENUM)),
            req("new_coal", str_enum(NEW_COAL_ENUM)),
            req("ppca_member", spec(FieldType::Bool)),
        ],
    )
}

fn progress_ratios() -> FieldSpec {
    obj(
        "progress_ratios",
        vec![
            req("year_2010", spec(FieldType::Float)),
            req("now", spec(FieldType::Float)),
        ],
    )
}

fn progress_comparisons() -> FieldSpec {
    obj(
        "progress",
        vec![
            req("clean_energy", progress_ratios()),
            req("phase_out", progress_ratios()),
        ],
    )
}

// Website texts

fn website_texts() -> FieldSpec {
    let analysis = obj(
        "analysis",
        vec![
            req("date", spec(FieldType::AmericanDate)),
            req("timestamp", spec(FieldType::PosInt)),
            req("link", spec(FieldType::Url)),
            req("summary", spec(FieldType::Str)),
            req("title", spec(FieldType::Str)),
            req("countries", list(spec(FieldType::IsoCode))),
            req("region", str_enum(ANALYSIS_REGION_ENUM)),
        ],
    );
    let footnote = obj(
        "footnote",
        vec![
            req("text", spec(FieldType::Str)),
            req("link", spec(FieldType::UrlOrNa)),
        ],
    );
    let country_texts = obj(
        "country_texts",
        vec![
            req(
                "country_overview",
                list_checked(spec(FieldType::Str), vec![Check::MinLen(1)]),
            ),
            req(
                "coal_overview",
                list_checked(spec(FieldType::Str), vec![Check::MinLen(1)]),
            ),
            req(
                "electricity_overview",
                list_checked(spec(FieldType::Str), vec![Check::MinLen(1)]),
            ),
            req("footnotes", list(footnote)),
        ],
    );
    obj(
        "website_texts",
        vec![
            req("analysis", list(analysis)),
            req(
                "countries",
                iso_map(country_texts, vec![Check::RequiredKeys(&["id"])]),
            ),
        ],
    )
}

// Map features

fn mapbox_features() -> FieldSpec {
    let geometry = obj(
        "geometry",
        vec![
            req(
                "coordinates",
                list_checked(spec(FieldType::Float), vec![Check::LonLat]),
            ),
            req("type", spec(FieldType::Literal("Point"))),
        ],
    );
    let properties = obj(
        "properties",
        vec![
            req("age", spec(FieldType::IntOrNa)),
            req("capacity_mw", spec(FieldType::PosInt)),
            req("coal_type", str_enum(COAL_TYPE_ENUM)),
            req("country", spec(FieldType::CountryName)),
            req("emission_factor_kg_co2_per_tj", spec(FieldType::PosInt)),
            req("plant_name", spec(FieldType::Str)),
            req("status", str_enum(PLANT_STATUS_ENUM)),
            req("technology", str_enum(TECHNOLOGY_ENUM)),
            req("thermal_efficiency", spec(FieldType::PosFloat)),
            req("unit_id", spec(FieldType::PosInt)),
            req("unit_name", spec(FieldType::Str)),
        ],
    );
    let feature = obj(
        "feature",
        vec![
            req("geometry", geometry),
            req("id", spec(FieldType::Str)),
            req("properties", properties),
            req("type", spec(FieldType::Literal("Feature"))),
        ],
    );
    obj(
        "mapbox_features",
        vec![
            req(
                "features",
                list_checked(feature, vec![Check::UniqueBy("id")]),
            ),
            req("type", spec(FieldType::Literal("FeatureCollection"))),
        ],
    )
}

// News feed

fn newsfeed() -> FieldSpec {
    let item = obj(
        "newsfeed_item",
        vec![
            req("date", spec(FieldType::AmericanDate)),
            req("title", spec(FieldType::Str)),
            req("summary", spec(FieldType::Str)),
            req(
                "links",
                list_checked(
                    spec(FieldType::Url),
                    vec![Check::Unique, Check::MinLen(1)],
                ),
            ),
            req("timestamp", spec(FieldType::Int)),
        ],
    );
    let country_feed = obj(
        "country_newsfeed",
        vec![
            req("region", str_enum(NEWS_REGION_ENUM)),
            req(
                "national_article_ids",
                list_checked(spec(FieldType::ArticleId), vec![Check::Unique]),
            ),
            req(
                "regional_article_ids",
                list_checked(spec(FieldType::ArticleId), vec![Check::Unique]),
            ),
            req(
                "global_article_ids",
                list_checked(spec(FieldType::ArticleId), vec![Check::Unique]),
            ),
        ],
    );
    obj(
        "newsfeed",
        vec![
            req(
                "recent_news_article_ids",
                list_checked(
                    spec(FieldType::ArticleId),
                    vec![Check::Unique, Check::MinLen(5)],
                ),
            ),
            req(
                "countries",
                iso_map(country_feed, vec![Check::RequiredKeys(&["id"])]),
            ),
            req(
                "articles",
                checked(
                    FieldType::Map(KeyKind::ArticleId, Box::new(item)),
                    vec![Check::MinLen(1)],
                ),
            ),
            req("latest_issue", spec(FieldType::Int)),
            req("latest_date", spec(FieldType::AmericanDate)),
        ],
    )
}

// Country bounding boxes

fn country_bounding_boxes() -> FieldSpec {
    let bounding_box = obj(
        "bounding_box",
        vec![
            req("iso", checked(FieldType::Str, vec![Check::Len(2)])),
            req("name", spec(FieldType::CountryName)),
            req(
                "bounds",
                list_checked(spec(FieldType::Float), vec![Check::Bounds]),
            ),
        ],
    );
    obj(
        "country_bounding_boxes",
        vec![req(
            "countries",
            iso_map(bounding_box, vec![Check::RequiredKeys(&["in", "us"])]),
        )],
    )
}

// Homepage

fn homepage() -> FieldSpec {
    let ranked_country = obj(
        "ranked_country",
        vec![
            req("country", spec(FieldType::CountryName)),
            req("capacity_mw", spec(FieldType::PosInt)),
        ],
    );
    let ranking = || {
        list_checked(
            ranked_country.clone(),
            vec![
                Check::Len(10),
                Check::SortedByCapacityDesc,
                Check::UniqueBy("country"),
            ],
        )
    };
    let rankings = obj(
        "country_rankings_by_status",
        vec![
            req("operational", ranking()),
            req("construction", ranking()),
            req("planned", ranking()),
            req("cancelled", ranking()),
            req("halted", ranking()),
            req("retired", ranking()),
        ],
    );
    let pathway_point = obj(
        "emission_pathway_point",
        vec![
            req("current", spec(FieldType::PosFloat)),
            req("no_action", spec(FieldType::PosFloat)),
            req("target_1_5_deg", spec(FieldType::PosFloat)),
            req("target_2_deg", spec(FieldType::PosFloat)),
            req("year", spec(FieldType::Year)),
        ],
    );
    let regional_series = || list_checked(capacity_snapshot(), vec![Check::UniqueBy("year")]);
    obj(
        "homepage",
        vec![
            req(
                "global_totals",
                obj(
                    "global_totals",
                    vec![
                        req("total_number", spec(FieldType::PosInt)),
                        req("total_number_net_change", spec(FieldType::Percentage)),
                        req("total_capacity_mw", spec(FieldType::PosInt)),
                        req(
                            "total_capacity_mw_net_change",
                            spec(FieldType::Percentage),
                        ),
                    ],
                ),
            ),
            req("country_rankings_by_status", rankings),
            req(
                "coal_plants_by_status",
                obj("coal_plants_by_status", status_fields(FieldType::PosInt)),
            ),
            req(
                "emission_pathways",
                list_checked(pathway_point, vec![Check::UniqueBy("year")]),
            ),
            req(
                "regional_capacity_changes",
                obj(
                    "regional_capacity_changes",
                    vec![
                        req("oecd_and_eu", regional_series()),
                        req("china", regional_series()),
                        req("non_oecd_no_china", regional_series()),
                    ],
                ),
            ),
        ],
    )
}

// Country coal status

fn country_coal_status() -> FieldSpec {
    let iso_list = || {
        list_checked(
            spec(FieldType::IsoCode),
            vec![Check::Unique, Check::MinLen(1)],
        )
    };
    let phase_out = obj(
        "phase_out_statuses",
        vec![
            req("no_coal", iso_list()),
            req("phase_out_in_consideration", iso_list()),
            req("phase_out_by_2030", iso_list()),
            req("phase_out_by_2040", iso_list()),
            req("coal_free", iso_list()),
            req("ppca_member", iso_list()),
        ],
    );
    // The compact list may legitimately be empty; uniqueness still holds.
    let new_coal = obj(
        "new_coal_statuses",
        vec![
            req("constructing_new_coal", iso_list()),
            req("planning_new_coal", iso_list()),
            req("committed_to_no_new_coal", iso_list()),
            req(
                "part_of_no_new_coal_power_compact",
                list_checked(spec(FieldType::IsoCode), vec![Check::Unique]),
            ),
            req("cancelled_coal", iso_list()),
        ],
    );
    obj(
        "country_coal_status",
        vec![req("phase_out", phase_out), req("new_coal", new_coal)],
    )
}

// Country main

fn country_main() -> FieldSpec {
    let series_point = obj(
        "capacity_time_series_point",
        vec![
            req("year", spec(FieldType::Year)),
            req("capacity", spec(FieldType::PosInt)),
            req("net_change", spec(FieldType::Percentage)),
        ],
    );
    let entry = obj(
        "country_main",
        vec![
            req(
                "capacity_time_series",
                list_checked(
                    series_point,
                    vec![Check::UniqueBy("year"), Check::MinLen(1)],
                ),
            ),
            req(
                "capacity_trends",
                list_checked(
                    capacity_snapshot(),
                    vec![Check::UniqueBy("year"), Check::MinLen(1)],
                ),
            ),
            req("statuses", country_statuses()),
        ],
    );
    obj(
        "country_main",
        vec![req(
            "countries",
            iso_map(entry, vec![Check::RequiredKeys(&["in", "us"])]),
        )],
    )
}

// Coal capacity landscape

fn coal_capacity_landscape() -> FieldSpec {
    let swarm_point = obj(
        "plant_swarm_point",
        vec![
            req("id", str_enum(SIMPLE_TECHNOLOGY_ENUM)),
            req("unit_id", spec(FieldType::Str)),
            // Commissioning years predate 2000, so no year-range check here.
            req("year", spec(FieldType::Int)),
            req("capacity_mw_sqrt", spec(FieldType::PosFloat)),
        ],
    );
    let landscape = obj(
        "coal_capacity_landscape",
        vec![
            req("statuses", country_statuses()),
            req(
                "rankings",
                obj(
                    "rankings",
                    vec![
                        req("operational", spec(FieldType::PosInt)),
                        req("new_coal_risk", spec(FieldType::PosInt)),
                    ],
                ),
            ),
            req(
                "current_capacity",
                obj(
                    "current_capacity",
                    vec![
                        req("capacity", spec(FieldType::PosInt)),
                        req("capacity_net_change", spec(FieldType::Percentage)),
                    ],
                ),
            ),
            req(
                "capacity_by_status",
                obj("capacity_by_status", status_fields(FieldType::PosInt)),
            ),
            req(
                "capacity_by_technology",
                obj(
                    "capacity_by_technology",
                    vec![
                        req("subcritical", spec(FieldType::PosInt)),
                        req("supercritical", spec(FieldType::PosInt)),
                        req("ultra_supercritical", spec(FieldType::PosInt)),
                        req("other", spec(FieldType::PosInt)),
                        req("unknown", spec(FieldType::PosInt)),
                    ],
                ),
            ),
            req(
                "historical_capacities",
                list_checked(
                    capacity_snapshot(),
                    vec![Check::MinLen(1), Check::UniqueBy("year")],
                ),
            ),
            req(
                "plant_swarm",
                list_checked(swarm_point, vec![Check::UniqueBy("unit_id")]),
            ),
        ],
    );
    obj(
        "coal_capacity_landscape",
        vec![req(
            "countries",
            iso_map(landscape, vec![Check::RequiredKeys(&["cn"])]),
        )],
    )
}

// Coal power generation

fn coal_power_generation() -> FieldSpec {
    let year_series = |element: FieldSpec| {
        list_checked(element, vec![Check::MinLen(1), Check::UniqueBy("year")])
    };
    let demand_point = obj(
        "electricity_demand",
        vec![
            req("year", spec(FieldType::Year)),
            req("demand", spec(FieldType::PosFloat)),
        ],
    );
    let demand_change_point = obj(
        "electricity_demand_change",
        vec![
            req("year", spec(FieldType::Year)),
            req("demand", spec(FieldType::Float)),
        ],
    );
    let yearly_fuels = |name: &'static str, ty: FieldType| {
        let mut fields = vec![req("year", spec(FieldType::Year))];
        fields.extend(fuel_fields(ty));
        obj(name, fields)
    };
    let country_generation = obj(
        "country_power_generation",
        vec![
            req("progress", progress_comparisons()),
            req("energy_mix", obj("energy_mix", fuel_fields(FieldType::PosInt))),
            req(
                "electricity_demand_per_capita",
                year_series(demand_point.clone()),
            ),
            req(
                "electricity_generation_by_fuel",
                year_series(yearly_fuels("electricity_generation", FieldType::PosInt)),
            ),
            req(
                "cumulative_generation_changes",
                year_series(yearly_fuels("generation_change", FieldType::Int)),
            ),
            req(
                "cumulative_demand_changes",
                year_series(demand_change_point),
            ),
            req(
                "electricity_generation_ratios",
                year_series(yearly_fuels(
                    "electricity_generation_ratio",
                    FieldType::PosFloat,
                )),
            ),
        ],
    );
    let world = obj(
        "world_power_generation",
        vec![
            req("progress", progress_comparisons()),
            req("energy_mix", obj("energy_mix", fuel_fields(FieldType::PosInt))),
            req("electricity_demand_per_capita", year_series(demand_point)),
        ],
    );
    let regions = obj(
        "regional_power_generation",
        vec![req(
            "progress",
            spec(FieldType::Map(
                KeyKind::Enum(REGIONAL_GROUP_ENUM),
                Box::new(progress_comparisons()),
            )),
        )],
    );
    obj(
        "coal_power_generation",
        vec![
            req("world", world),
            req("regions", regions),
            req(
                "countries",
                iso_map(country_generation, vec![Check::RequiredKeys(&["cn"])]),
            ),
        ],
    )
}

// Lookups

fn iso_country_lookup() -> FieldSpec {
    spec(FieldType::Map(
        KeyKind::Iso,
        Box::new(spec(FieldType::CountryName)),
    ))
}

fn country_iso_lookup() -> FieldSpec {
    spec(FieldType::Map(
        KeyKind::Country,
        Box::new(spec(FieldType::IsoCode)),
    ))
}
