//! Lookup pair properties: schema validation of the two lookup files and
//! the code/name round-trip invariant between them.

use coaltracker::data::lookup::LookupStore;
use coaltracker::schema::model::DatasetKind;
use coaltracker::schema::validate::{ValidationReport, ViolationKind};
use coaltracker::schema::{schema_for, validate};
use serde_json::json;

#[test]
fn valid_lookup_pair_round_trips() {
    let iso = json!({"id": "Indonesia", "in": "India", "us": "United States"});
    let country = json!({"Indonesia": "id", "India": "in", "United States": "us"});

    let static_store = LookupStore::from_static_table();
    let iso_report = validate(&iso, &schema_for(DatasetKind::IsoCountryLookup), &static_store);
    assert!(iso_report.is_valid(), "{:?}", iso_report.diagnostics);
    let country_report = validate(
        &country,
        &schema_for(DatasetKind::CountryIsoLookup),
        &static_store,
    );
    assert!(country_report.is_valid(), "{:?}", country_report.diagnostics);

    let store = LookupStore::from_payloads(&iso, &country);
    assert_eq!(store.name_for_code("id"), Some("Indonesia"));
    assert_eq!(store.code_for_name("Indonesia"), Some("id"));

    let mut round_trip = ValidationReport::default();
    store.push_round_trip_diagnostics(&mut round_trip);
    assert!(round_trip.is_valid());
}

#[test]
fn unknown_code_in_iso_lookup_is_referential() {
    let iso = json!({"zz": "Atlantis"});
    let store = LookupStore::from_static_table();
    let report = validate(&iso, &schema_for(DatasetKind::IsoCountryLookup), &store);
    assert!(report.has_errors());
    // Both the key and the value miss the static table.
    assert!(report
        .diagnostics
        .iter()
        .all(|diag| diag.kind == ViolationKind::Referential));
    assert!(report.diagnostics.iter().any(|diag| diag.path == "zz"));
}

#[test]
fn lookup_value_type_mismatch_is_schema_violation() {
    let iso = json!({"id": 7});
    let store = LookupStore::from_static_table();
    let report = validate(&iso, &schema_for(DatasetKind::IsoCountryLookup), &store);
    let diagnostic = report
        .diagnostics
        .iter()
        .find(|diag| diag.path == "id")
        .expect("value violation should be reported");
    assert_eq!(diagnostic.kind, ViolationKind::Schema);
    assert!(diagnostic.message.contains("country name"));
}
