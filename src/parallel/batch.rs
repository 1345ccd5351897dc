//! Release batch driver: validate every dataset named in the registry and
//! collect per-file outcomes. The lookup datasets load first and become the
//! referential authority for everything else; the dependent files are
//! independent of one another and validate in parallel.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::data::loader::load_payload;
use crate::data::lookup::LookupStore;
use crate::data::registry::{DatasetEntry, Registry};
use crate::parallel::pool::WorkerPool;
use crate::schema::datasets::schema_for;
use crate::schema::model::DatasetKind;
use crate::schema::validate::{
    validate, ValidationReport, ValidationSeverity, ViolationKind,
};

/// Outcome for one registry entry.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub name: String,
    pub kind: String,
    pub path: String,
    pub source: String,
    pub passed: bool,
    pub report: ValidationReport,
}

/// Outcome for the whole registry walk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn push(&mut self, outcome: FileOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.files.push(outcome);
    }
}

/// Validate every registry entry against its declared schema.
///
/// Phase one loads and validates the two lookup datasets and builds the
/// [LookupStore]; phase two validates the remaining files in parallel on
/// `pool`. Every file is always checked; the report says which failed.
pub fn validate_release(data_dir: &Path, registry: &Registry, pool: &WorkerPool) -> BatchReport {
    let static_store = LookupStore::from_static_table();

    let mut lookup_entries: Vec<(&String, &DatasetEntry)> = Vec::new();
    let mut dependent_entries: Vec<(&String, &DatasetEntry)> = Vec::new();
    for (name, entry) in registry {
        let is_lookup = DatasetKind::from_name(&entry.kind)
            .map(|kind| kind.is_lookup())
            .unwrap_or(false);
        if is_lookup {
            lookup_entries.push((name, entry));
        } else {
            dependent_entries.push((name, entry));
        }
    }
    lookup_entries.sort_by(|a, b| a.0.cmp(b.0));
    dependent_entries.sort_by(|a, b| a.0.cmp(b.0));

    // Phase one: lookups against the static table.
    let mut iso_payload: Option<Value> = None;
    let mut country_payload: Option<Value> = None;
    let mut lookup_outcomes: Vec<(DatasetKind, FileOutcome)> = Vec::new();
    for (name, entry) in lookup_entries {
        let kind = DatasetKind::from_name(&entry.kind)
            .unwrap_or(DatasetKind::IsoCountryLookup);
        let (payload, report) = load_and_validate(data_dir, entry, kind, &static_store);
        if let Some(payload) = payload {
            if payload.is_object() {
                match kind {
                    DatasetKind::IsoCountryLookup => iso_payload = Some(payload),
                    DatasetKind::CountryIsoLookup => country_payload = Some(payload),
                    _ => {}
                }
            }
        }
        lookup_outcomes.push((kind, outcome(name, entry, report)));
    }

    // The loaded lookup pair becomes the referential authority; without a
    // usable pair the dependent phase still runs against the static table.
    let store = match (&iso_payload, &country_payload) {
        (Some(iso), Some(country)) => {
            let store = LookupStore::from_payloads(iso, country);
            let mut round_trip = ValidationReport::default();
            store.push_round_trip_diagnostics(&mut round_trip);
            if let Some((_, reverse_outcome)) = lookup_outcomes
                .iter_mut()
                .find(|(kind, _)| *kind == DatasetKind::CountryIsoLookup)
            {
                reverse_outcome
                    .report
                    .diagnostics
                    .extend(round_trip.diagnostics);
                reverse_outcome.passed = reverse_outcome.report.is_valid();
            }
            store
        }
        _ => static_store,
    };

    // Phase two: dependent files, one worker per file.
    let dependent_outcomes: Vec<FileOutcome> = pool.install(|| {
        dependent_entries
            .par_iter()
            .map(|&(name, entry)| validate_dependent(data_dir, name, entry, &store))
            .collect()
    });

    let mut batch = BatchReport::default();
    for (_, file_outcome) in lookup_outcomes {
        batch.push(file_outcome);
    }
    for file_outcome in dependent_outcomes {
        batch.push(file_outcome);
    }
    batch
}

fn validate_dependent(
    data_dir: &Path,
    name: &str,
    entry: &DatasetEntry,
    store: &LookupStore,
) -> FileOutcome {
    let Some(kind) = DatasetKind::from_name(&entry.kind) else {
        let mut report = ValidationReport::default();
        report.push(
            ValidationSeverity::Error,
            ViolationKind::Structural,
            "",
            format!("unknown dataset kind \"{}\"", entry.kind),
        );
        return outcome(name, entry, report);
    };

    let (_, mut report) = load_and_validate(data_dir, entry, kind, store);
    if store.is_static() {
        report.push(
            ValidationSeverity::Warning,
            ViolationKind::Referential,
            "",
            "referential checks ran against the built-in ISO table (lookup datasets unavailable)",
        );
    }
    outcome(name, entry, report)
}

fn load_and_validate(
    data_dir: &Path,
    entry: &DatasetEntry,
    kind: DatasetKind,
    store: &LookupStore,
) -> (Option<Value>, ValidationReport) {
    let path = data_dir.join(&entry.path);
    match load_payload(&path) {
        Ok(payload) => {
            let report = validate(&payload, &schema_for(kind), store);
            (Some(payload), report)
        }
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push(
                ValidationSeverity::Error,
                ViolationKind::Structural,
                "",
                err.to_string(),
            );
            (None, report)
        }
    }
}

fn outcome(name: &str, entry: &DatasetEntry, report: ValidationReport) -> FileOutcome {
    FileOutcome {
        name: name.to_string(),
        kind: entry.kind.clone(),
        path: entry.path.clone(),
        source: entry.source.clone(),
        passed: report.is_valid(),
        report,
    }
}
