//! End-to-end validation of representative payloads for every dataset kind:
//! valid fixtures pass, and each violation class is reported with the exact
//! field path.

use coaltracker::data::lookup::LookupStore;
use coaltracker::schema::model::{DatasetKind, Field, FieldSpec, FieldType, Schema};
use coaltracker::schema::validate::ViolationKind;
use coaltracker::schema::{schema_for, validate};
use serde_json::{json, Value};

fn store() -> LookupStore {
    LookupStore::from_static_table()
}

fn check(kind: DatasetKind, payload: &Value) -> coaltracker::schema::ValidationReport {
    validate(payload, &schema_for(kind), &store())
}

fn capacity_snapshot(year: i64) -> Value {
    json!({
        "year": year,
        "operational": 100,
        "construction": 10,
        "planned": 5,
        "cancelled": 20,
        "halted": 2,
        "retired": 50,
        "expected_retirements_by_2030": 30
    })
}

fn statuses() -> Value {
    json!({
        "phase_out": "phase_out_by_2030",
        "new_coal": "committed_to_no_new_coal",
        "ppca_member": true
    })
}

fn ranking() -> Value {
    let countries = [
        "China",
        "India",
        "United States",
        "Japan",
        "Indonesia",
        "Russia",
        "Germany",
        "South Korea",
        "South Africa",
        "Poland",
    ];
    Value::Array(
        countries
            .iter()
            .enumerate()
            .map(|(index, country)| {
                json!({"country": country, "capacity_mw": 1000 - 50 * index as i64})
            })
            .collect(),
    )
}

fn valid_homepage() -> Value {
    json!({
        "global_totals": {
            "total_number": 2500,
            "total_number_net_change": "-1.2%",
            "total_capacity_mw": 2100000,
            "total_capacity_mw_net_change": "0.8%"
        },
        "country_rankings_by_status": {
            "operational": ranking(),
            "construction": ranking(),
            "planned": ranking(),
            "cancelled": ranking(),
            "halted": ranking(),
            "retired": ranking()
        },
        "coal_plants_by_status": {
            "operational": 2000,
            "construction": 200,
            "planned": 150,
            "cancelled": 300,
            "halted": 40,
            "retired": 900
        },
        "emission_pathways": [
            {"current": 10.0, "no_action": 12.5, "target_1_5_deg": 4.0, "target_2_deg": 6.5, "year": 2030},
            {"current": 9.5, "no_action": 13.0, "target_1_5_deg": 2.0, "target_2_deg": 5.0, "year": 2035}
        ],
        "regional_capacity_changes": {
            "oecd_and_eu": [capacity_snapshot(2023), capacity_snapshot(2024)],
            "china": [capacity_snapshot(2024)],
            "non_oecd_no_china": [capacity_snapshot(2024)]
        }
    })
}

#[test]
fn valid_homepage_passes() {
    let report = check(DatasetKind::Homepage, &valid_homepage());
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn homepage_missing_field_names_exactly_that_field() {
    let mut payload = valid_homepage();
    payload
        .as_object_mut()
        .unwrap()
        .get_mut("global_totals")
        .unwrap()
        .as_object_mut()
        .unwrap()
        .remove("total_capacity_mw");
    let report = check(DatasetKind::Homepage, &payload);
    assert!(report.has_errors());
    let missing: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|diag| diag.message.contains("missing required field"))
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].path, "global_totals.total_capacity_mw");
}

#[test]
fn homepage_unsorted_ranking_is_reported() {
    let mut payload = valid_homepage();
    let operational = payload
        .pointer_mut("/country_rankings_by_status/operational")
        .unwrap()
        .as_array_mut()
        .unwrap();
    operational.reverse();
    let report = check(DatasetKind::Homepage, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.message.contains("sorted descending")));
}

#[test]
fn valid_mapbox_features_pass() {
    let payload = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "unit-7",
            "geometry": {"type": "Point", "coordinates": [106.8, -6.2]},
            "properties": {
                "age": 12,
                "capacity_mw": 660,
                "coal_type": "Bituminous",
                "country": "Indonesia",
                "emission_factor_kg_co2_per_tj": 94600,
                "plant_name": "Suralaya",
                "status": "Operational",
                "technology": "Supercritical",
                "thermal_efficiency": 0.38,
                "unit_id": 7,
                "unit_name": "Unit 7"
            }
        }]
    });
    let report = check(DatasetKind::MapboxFeatures, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn mapbox_duplicate_feature_ids_are_reported() {
    let feature = json!({
        "type": "Feature",
        "id": "unit-7",
        "geometry": {"type": "Point", "coordinates": [106.8, -6.2]},
        "properties": {
            "age": "N/A",
            "capacity_mw": 660,
            "coal_type": "Lignite",
            "country": "Indonesia",
            "emission_factor_kg_co2_per_tj": 101000,
            "plant_name": "Suralaya",
            "status": "Planned",
            "technology": "Subcritical",
            "thermal_efficiency": 0.33,
            "unit_id": 8,
            "unit_name": "Unit 8"
        }
    });
    let payload = json!({
        "type": "FeatureCollection",
        "features": [feature.clone(), feature]
    });
    let report = check(DatasetKind::MapboxFeatures, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "features" && diag.message.contains("unique id")));
}

#[test]
fn mapbox_coordinates_out_of_range_are_reported() {
    let payload = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "unit-1",
            "geometry": {"type": "Point", "coordinates": [200.5, -6.2]},
            "properties": {
                "age": 3,
                "capacity_mw": 100,
                "coal_type": "Bituminous",
                "country": "Indonesia",
                "emission_factor_kg_co2_per_tj": 94600,
                "plant_name": "P",
                "status": "Operational",
                "technology": "Subcritical",
                "thermal_efficiency": 0.3,
                "unit_id": 1,
                "unit_name": "U"
            }
        }]
    });
    let report = check(DatasetKind::MapboxFeatures, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "features[0].geometry.coordinates"));
}

#[test]
fn valid_website_texts_pass() {
    let payload = json!({
        "analysis": [{
            "date": "March 4, 2025",
            "timestamp": 1741046400,
            "link": "https://example.org/analysis/coal-in-asia",
            "summary": "Regional pipeline trends.",
            "title": "Coal in Asia",
            "countries": ["id", "in"],
            "region": "indo_pacific"
        }],
        "countries": {
            "id": {
                "country_overview": ["Overview."],
                "coal_overview": ["Coal."],
                "electricity_overview": ["Grid."],
                "footnotes": [{"text": "Source note.", "link": "N/A"}]
            }
        }
    });
    let report = check(DatasetKind::WebsiteTexts, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn website_texts_unknown_region_is_enum_violation() {
    let payload = json!({
        "analysis": [{
            "date": "March 4, 2025",
            "timestamp": 1741046400,
            "link": "https://example.org/a",
            "summary": "s",
            "title": "t",
            "countries": ["id"],
            "region": "atlantis"
        }],
        "countries": {
            "id": {
                "country_overview": ["o"],
                "coal_overview": ["c"],
                "electricity_overview": ["e"],
                "footnotes": []
            }
        }
    });
    let report = check(DatasetKind::WebsiteTexts, &payload);
    let enum_violation = report
        .diagnostics
        .iter()
        .find(|diag| diag.path == "analysis[0].region")
        .expect("region violation should be reported");
    assert_eq!(enum_violation.kind, ViolationKind::Schema);
    assert!(enum_violation.message.contains("enumeration"));
}

#[test]
fn website_texts_requires_indonesia_entry() {
    let payload = json!({
        "analysis": [],
        "countries": {
            "us": {
                "country_overview": ["o"],
                "coal_overview": ["c"],
                "electricity_overview": ["e"],
                "footnotes": []
            }
        }
    });
    let report = check(DatasetKind::WebsiteTexts, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "countries" && diag.message.contains("\"id\"")));
}

#[test]
fn valid_newsfeed_passes() {
    let payload = json!({
        "recent_news_article_ids": [
            "coalwire-2025-30-1",
            "coalwire-2025-30-2",
            "coalwire-2025-29-1",
            "newsapi-88120",
            "newsapi-88121"
        ],
        "countries": {
            "id": {
                "region": "Asia",
                "national_article_ids": ["coalwire-2025-30-1"],
                "regional_article_ids": ["coalwire-2025-29-1"],
                "global_article_ids": ["newsapi-88120"]
            }
        },
        "articles": {
            "coalwire-2025-30-1": {
                "date": "July 17, 2025",
                "title": "Plant retired",
                "summary": "A unit closed.",
                "links": ["https://example.org/news/1"],
                "timestamp": 1752710400
            }
        },
        "latest_issue": 512,
        "latest_date": "July 17, 2025"
    });
    let report = check(DatasetKind::NewsFeed, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn newsfeed_rejects_malformed_article_id_and_short_recent_list() {
    let payload = json!({
        "recent_news_article_ids": ["rss-1"],
        "countries": {
            "id": {
                "region": "Asia",
                "national_article_ids": [],
                "regional_article_ids": [],
                "global_article_ids": []
            }
        },
        "articles": {
            "coalwire-1": {
                "date": "July 17, 2025",
                "title": "t",
                "summary": "s",
                "links": ["https://example.org/1"],
                "timestamp": 1752710400
            }
        },
        "latest_issue": 512,
        "latest_date": "July 17, 2025"
    });
    let report = check(DatasetKind::NewsFeed, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "recent_news_article_ids[0]"
            && diag.message.contains("coalwire")));
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "recent_news_article_ids"
            && diag.message.contains("at least 5")));
}

#[test]
fn valid_country_coal_status_passes() {
    let payload = json!({
        "phase_out": {
            "no_coal": ["tj"],
            "phase_out_in_consideration": ["id"],
            "phase_out_by_2030": ["gb"],
            "phase_out_by_2040": ["de"],
            "coal_free": ["be"],
            "ppca_member": ["fr", "gb"]
        },
        "new_coal": {
            "constructing_new_coal": ["cn", "in"],
            "planning_new_coal": ["id"],
            "committed_to_no_new_coal": ["cl"],
            "part_of_no_new_coal_power_compact": [],
            "cancelled_coal": ["eg"]
        }
    });
    let report = check(DatasetKind::CountryCoalStatus, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn country_coal_status_unknown_code_is_referential() {
    let payload = json!({
        "phase_out": {
            "no_coal": ["zz"],
            "phase_out_in_consideration": ["id"],
            "phase_out_by_2030": ["gb"],
            "phase_out_by_2040": ["de"],
            "coal_free": ["be"],
            "ppca_member": ["fr"]
        },
        "new_coal": {
            "constructing_new_coal": ["cn"],
            "planning_new_coal": ["id"],
            "committed_to_no_new_coal": ["cl"],
            "part_of_no_new_coal_power_compact": [],
            "cancelled_coal": ["eg"]
        }
    });
    let report = check(DatasetKind::CountryCoalStatus, &payload);
    let referential = report
        .diagnostics
        .iter()
        .find(|diag| diag.kind == ViolationKind::Referential)
        .expect("referential violation should be reported");
    assert_eq!(referential.path, "phase_out.no_coal[0]");
    assert!(referential.message.contains("\"zz\""));
}

fn country_main_entry() -> Value {
    json!({
        "capacity_time_series": [
            {"year": 2023, "capacity": 1100, "net_change": "N/A"},
            {"year": 2024, "capacity": 1000, "net_change": "-9.1%"}
        ],
        "capacity_trends": [capacity_snapshot(2024)],
        "statuses": statuses()
    })
}

#[test]
fn valid_country_main_passes() {
    let payload = json!({
        "countries": {"us": country_main_entry(), "in": country_main_entry()}
    });
    let report = check(DatasetKind::CountryMain, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn country_main_duplicate_years_are_reported() {
    let mut entry = country_main_entry();
    let series = entry
        .get_mut("capacity_time_series")
        .unwrap()
        .as_array_mut()
        .unwrap();
    series[0]["year"] = json!(2024);
    let payload = json!({"countries": {"us": entry.clone(), "in": entry}});
    let report = check(DatasetKind::CountryMain, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.message.contains("unique year")));
}

#[test]
fn valid_coal_capacity_landscape_passes() {
    let payload = json!({
        "countries": {
            "cn": {
                "statuses": statuses(),
                "rankings": {"operational": 1, "new_coal_risk": 1},
                "current_capacity": {"capacity": 1094000, "capacity_net_change": "1.1%"},
                "capacity_by_status": {
                    "operational": 1094000,
                    "construction": 30000,
                    "planned": 80000,
                    "cancelled": 600000,
                    "halted": 10000,
                    "retired": 120000
                },
                "capacity_by_technology": {
                    "subcritical": 300000,
                    "supercritical": 350000,
                    "ultra_supercritical": 400000,
                    "other": 24000,
                    "unknown": 20000
                },
                "historical_capacities": [capacity_snapshot(2023), capacity_snapshot(2024)],
                "plant_swarm": [
                    {"id": "subcritical", "unit_id": "u-1", "year": 1995, "capacity_mw_sqrt": 25.7},
                    {"id": "ultra_supercritical", "unit_id": "u-2", "year": 2019, "capacity_mw_sqrt": 31.6}
                ]
            }
        }
    });
    let report = check(DatasetKind::CoalCapacityLandscape, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

fn progress() -> Value {
    json!({
        "clean_energy": {"year_2010": 0.12, "now": 0.31},
        "phase_out": {"year_2010": 0.05, "now": 0.18}
    })
}

fn fuels_int() -> Value {
    json!({
        "bioenergy": 10, "coal": 900, "gas": 120, "hydro": 300,
        "nuclear": 90, "other_fossil": 15, "other_renewables": 20,
        "wind": 250, "solar": 310
    })
}

#[test]
fn valid_coal_power_generation_passes() {
    let mut generation_point = fuels_int();
    generation_point["year"] = json!(2024);
    let mut change_point = json!({
        "bioenergy": 1, "coal": -40, "gas": 6, "hydro": 12,
        "nuclear": 2, "other_fossil": -3, "other_renewables": 4,
        "wind": 50, "solar": 80
    });
    change_point["year"] = json!(2024);
    let ratio_point = json!({
        "year": 2024,
        "bioenergy": 0.5, "coal": 44.7, "gas": 6.0, "hydro": 14.9,
        "nuclear": 4.5, "other_fossil": 0.7, "other_renewables": 1.0,
        "wind": 12.4, "solar": 15.3
    });
    let payload = json!({
        "world": {
            "progress": progress(),
            "energy_mix": fuels_int(),
            "electricity_demand_per_capita": [{"year": 2024, "demand": 3.6}]
        },
        "regions": {
            "progress": {
                "china": progress(),
                "non_oecd_no_china": progress(),
                "oecd_and_eu": progress()
            }
        },
        "countries": {
            "cn": {
                "progress": progress(),
                "energy_mix": fuels_int(),
                "electricity_demand_per_capita": [{"year": 2024, "demand": 5.3}],
                "electricity_generation_by_fuel": [generation_point],
                "cumulative_generation_changes": [change_point],
                "cumulative_demand_changes": [{"year": 2024, "demand": -0.4}],
                "electricity_generation_ratios": [ratio_point]
            }
        }
    });
    let report = check(DatasetKind::CoalPowerGeneration, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn power_generation_requires_china_entry() {
    let payload = json!({
        "world": {
            "progress": progress(),
            "energy_mix": fuels_int(),
            "electricity_demand_per_capita": [{"year": 2024, "demand": 3.6}]
        },
        "regions": {"progress": {"china": progress(), "non_oecd_no_china": progress(), "oecd_and_eu": progress()}},
        "countries": {}
    });
    let report = check(DatasetKind::CoalPowerGeneration, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "countries" && diag.message.contains("\"cn\"")));
}

#[test]
fn valid_country_bounding_boxes_pass() {
    let payload = json!({
        "countries": {
            "us": {"iso": "us", "name": "United States", "bounds": [-125.0, 24.0, -66.0, 49.5]},
            "in": {"iso": "in", "name": "India", "bounds": [68.1, 6.5, 97.4, 35.7]}
        }
    });
    let report = check(DatasetKind::CountryBoundingBoxes, &payload);
    assert!(report.is_valid(), "{:?}", report.diagnostics);
}

#[test]
fn bounding_box_with_flipped_edges_is_reported() {
    let payload = json!({
        "countries": {
            "us": {"iso": "us", "name": "United States", "bounds": [-66.0, 49.5, -125.0, 24.0]},
            "in": {"iso": "in", "name": "India", "bounds": [68.1, 6.5, 97.4, 35.7]}
        }
    });
    let report = check(DatasetKind::CountryBoundingBoxes, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "countries.us.bounds"));
}

#[test]
fn top_level_shape_mismatch_short_circuits() {
    let payload = json!([1, 2, 3]);
    let report = check(DatasetKind::Homepage, &payload);
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.kind, ViolationKind::Structural);
    assert_eq!(diagnostic.path, "");
    assert!(diagnostic.message.contains("expected top-level object"));
}

#[test]
fn unknown_field_in_closed_object_is_reported() {
    let mut payload = valid_homepage();
    payload
        .as_object_mut()
        .unwrap()
        .insert("extra_block".to_string(), json!(1));
    let report = check(DatasetKind::Homepage, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "extra_block" && diag.message.contains("unknown field")));
}

#[test]
fn validation_is_idempotent() {
    let payload = valid_homepage();
    let first = check(DatasetKind::Homepage, &payload);
    let second = check(DatasetKind::Homepage, &payload);
    assert_eq!(first, second);

    let mut broken = payload;
    broken.as_object_mut().unwrap().remove("global_totals");
    let first = check(DatasetKind::Homepage, &broken);
    let second = check(DatasetKind::Homepage, &broken);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn negative_capacity_and_unknown_code_yield_two_violations() {
    // The canonical two-violation scenario: a range violation on
    // capacity_mw and a referential violation on country.
    let schema = Schema {
        kind: DatasetKind::Homepage,
        root: FieldSpec::new(FieldType::Object(
            "ranked_country",
            vec![
                Field::required("country", FieldSpec::new(FieldType::IsoCode)),
                Field::required("capacity_mw", FieldSpec::new(FieldType::PosInt)),
            ],
        )),
    };
    let payload = json!({"country": "XX", "capacity_mw": -5});
    let report = validate(&payload, &schema, &store());
    assert_eq!(report.diagnostics.len(), 2);
    let range = report
        .diagnostics
        .iter()
        .find(|diag| diag.path == "capacity_mw")
        .expect("capacity violation");
    assert_eq!(range.kind, ViolationKind::Schema);
    assert!(range.message.contains("-5"));
    let referential = report
        .diagnostics
        .iter()
        .find(|diag| diag.path == "country")
        .expect("country violation");
    assert_eq!(referential.kind, ViolationKind::Referential);
    assert!(referential.message.contains("\"XX\""));
}

#[test]
fn strict_numeric_types_reject_drift() {
    // thermal_efficiency must be a float, unit_id an integer.
    let payload = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "unit-1",
            "geometry": {"type": "Point", "coordinates": [106.8, -6.2]},
            "properties": {
                "age": 3,
                "capacity_mw": 100,
                "coal_type": "Bituminous",
                "country": "Indonesia",
                "emission_factor_kg_co2_per_tj": 94600,
                "plant_name": "P",
                "status": "Operational",
                "technology": "Subcritical",
                "thermal_efficiency": 1,
                "unit_id": 1.5,
                "unit_name": "U"
            }
        }]
    });
    let report = check(DatasetKind::MapboxFeatures, &payload);
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "features[0].properties.thermal_efficiency"));
    assert!(report
        .diagnostics
        .iter()
        .any(|diag| diag.path == "features[0].properties.unit_id"));
}
