//! Generic recursive validation of a candidate payload against a dataset
//! schema. All violations for a payload are collected into one report; only
//! a top-level shape mismatch short-circuits, since field-level checks are
//! meaningless on the wrong container.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::lookup::LookupStore;
use crate::schema::checks;
use crate::schema::model::{Check, Field, FieldSpec, FieldType, KeyKind, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which part of the contract a diagnostic violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// Top-level shape mismatch; reported once per file.
    Structural,
    /// Field missing, wrong type, or value outside its declared constraint.
    Schema,
    /// Identifier absent from the authoritative lookup.
    Referential,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Schema => "schema",
            Self::Referential => "referential",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field-level violation: where, what kind, and expected vs actual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub kind: ViolationKind,
    /// Dot/array-index path to the violating field; empty for the root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(root)"
        } else {
            self.path.as_str()
        };
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.kind, path, self.message
        )
    }
}

/// Accumulated outcome of validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        kind: ViolationKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            kind,
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
            .count()
    }
}

/// Validate `payload` against `schema`, consulting `lookups` for country
/// identifier membership. Pure over its inputs: the payload is never
/// mutated and repeated calls yield identical reports.
pub fn validate(payload: &Value, schema: &Schema, lookups: &LookupStore) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(mismatch) = root_shape_mismatch(&schema.root.ty, payload) {
        report.push(
            ValidationSeverity::Error,
            ViolationKind::Structural,
            "",
            mismatch,
        );
        return report;
    }

    walk(payload, &schema.root, "", lookups, &mut report);
    report
}

/// Top-level container mismatch message, if any. Field-level checks are
/// skipped for the file when this fires.
fn root_shape_mismatch(ty: &FieldType, payload: &Value) -> Option<String> {
    let expected = match ty {
        FieldType::Object(_, _) | FieldType::Map(_, _) => "object",
        FieldType::List(_) => "list",
        _ => return None,
    };
    let actual = json_type_name(payload);
    if expected == actual {
        None
    } else {
        Some(format!("expected top-level {expected}, found {actual}"))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

fn type_error(spec: &FieldSpec, value: &Value, path: &str, report: &mut ValidationReport) {
    report.push(
        ValidationSeverity::Error,
        ViolationKind::Schema,
        path,
        format!(
            "expected {}, found {}",
            spec.ty.expected_name(),
            checks::render_value(value)
        ),
    );
}

fn schema_error(path: &str, message: String, report: &mut ValidationReport) {
    report.push(ValidationSeverity::Error, ViolationKind::Schema, path, message);
}

fn referential_error(path: &str, message: String, report: &mut ValidationReport) {
    report.push(
        ValidationSeverity::Error,
        ViolationKind::Referential,
        path,
        message,
    );
}

fn walk(
    value: &Value,
    spec: &FieldSpec,
    path: &str,
    lookups: &LookupStore,
    report: &mut ValidationReport,
) {
    match &spec.ty {
        FieldType::Str => {
            let Some(text) = value.as_str() else {
                type_error(spec, value, path, report);
                return;
            };
            run_string_checks(text, spec, path, report);
        }
        FieldType::Int => {
            if !is_integer(value) {
                type_error(spec, value, path, report);
            }
        }
        FieldType::PosInt => match value.as_i64() {
            Some(number) if number < 0 => schema_error(
                path,
                format!("expected non-negative integer, found {number}"),
                report,
            ),
            Some(_) => {}
            None if value.is_u64() => {}
            None => type_error(spec, value, path, report),
        },
        FieldType::Float => {
            if !value.is_f64() {
                type_error(spec, value, path, report);
            }
        }
        FieldType::PosFloat => {
            if !value.is_f64() {
                type_error(spec, value, path, report);
            } else if let Some(number) = value.as_f64() {
                if number < 0.0 {
                    schema_error(
                        path,
                        format!("expected non-negative float, found {number}"),
                        report,
                    );
                }
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                type_error(spec, value, path, report);
            }
        }
        FieldType::Year => match value.as_i64() {
            Some(year) => {
                if let Err(message) = checks::check_year(year) {
                    schema_error(path, message, report);
                }
            }
            None => type_error(spec, value, path, report),
        },
        FieldType::Percentage => {
            string_leaf(value, spec, path, report, checks::check_percentage)
        }
        FieldType::AmericanDate => {
            string_leaf(value, spec, path, report, checks::check_american_date)
        }
        FieldType::Url => string_leaf(value, spec, path, report, checks::check_url),
        FieldType::UrlOrNa => {
            let Some(text) = value.as_str() else {
                type_error(spec, value, path, report);
                return;
            };
            if text != "N/A" {
                if let Err(message) = checks::check_url(text) {
                    schema_error(path, message, report);
                }
            }
        }
        FieldType::IntOrNa => {
            if is_integer(value) || value.as_str() == Some("N/A") {
                return;
            }
            type_error(spec, value, path, report);
        }
        FieldType::ArticleId => string_leaf(value, spec, path, report, checks::check_article_id),
        FieldType::IsoCode => {
            let Some(code) = value.as_str() else {
                type_error(spec, value, path, report);
                return;
            };
            if !lookups.contains_code(code) {
                referential_error(
                    path,
                    format!("country code \"{code}\" is not present in the iso lookup"),
                    report,
                );
            }
        }
        FieldType::CountryName => {
            let Some(name) = value.as_str() else {
                type_error(spec, value, path, report);
                return;
            };
            if !lookups.contains_country(name) {
                referential_error(
                    path,
                    format!("country name \"{name}\" is not present in the iso lookup"),
                    report,
                );
            }
        }
        FieldType::Literal(expected) => {
            if value.as_str() != Some(*expected) {
                type_error(spec, value, path, report);
            }
        }
        FieldType::List(element) => {
            let Some(entries) = value.as_array() else {
                type_error(spec, value, path, report);
                return;
            };
            for (index, entry) in entries.iter().enumerate() {
                walk(entry, element, &format!("{path}[{index}]"), lookups, report);
            }
            run_array_checks(entries, spec, path, report);
        }
        FieldType::Object(_, fields) => {
            let Some(object) = value.as_object() else {
                type_error(spec, value, path, report);
                return;
            };
            walk_object(object, fields, path, lookups, report);
        }
        FieldType::Map(key_kind, element) => {
            let Some(object) = value.as_object() else {
                type_error(spec, value, path, report);
                return;
            };
            for (key, entry) in object {
                let entry_path = join(path, key);
                check_map_key(key, key_kind, &entry_path, lookups, report);
                walk(entry, element, &entry_path, lookups, report);
            }
            run_map_checks(object, spec, path, report);
        }
    }
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn string_leaf(
    value: &Value,
    spec: &FieldSpec,
    path: &str,
    report: &mut ValidationReport,
    check: fn(&str) -> Result<(), String>,
) {
    let Some(text) = value.as_str() else {
        type_error(spec, value, path, report);
        return;
    };
    if let Err(message) = check(text) {
        schema_error(path, message, report);
    }
}

fn walk_object(
    object: &Map<String, Value>,
    fields: &[Field],
    path: &str,
    lookups: &LookupStore,
    report: &mut ValidationReport,
) {
    for field in fields {
        let field_path = join(path, field.name);
        match object.get(field.name) {
            Some(value) => walk(value, &field.spec, &field_path, lookups, report),
            None if field.required => schema_error(
                &field_path,
                format!(
                    "missing required field, expected {}",
                    field.spec.ty.expected_name()
                ),
                report,
            ),
            None => {}
        }
    }
    for key in object.keys() {
        if !fields.iter().any(|field| field.name == key) {
            schema_error(
                &join(path, key),
                "unknown field, schema is closed".to_string(),
                report,
            );
        }
    }
}

fn check_map_key(
    key: &str,
    kind: &KeyKind,
    entry_path: &str,
    lookups: &LookupStore,
    report: &mut ValidationReport,
) {
    match kind {
        KeyKind::Iso => {
            if !lookups.contains_code(key) {
                referential_error(
                    entry_path,
                    format!("map key \"{key}\" is not a known country code"),
                    report,
                );
            }
        }
        KeyKind::Country => {
            if !lookups.contains_country(key) {
                referential_error(
                    entry_path,
                    format!("map key \"{key}\" is not a known country name"),
                    report,
                );
            }
        }
        KeyKind::ArticleId => {
            if let Err(message) = checks::check_article_id(key) {
                schema_error(entry_path, message, report);
            }
        }
        KeyKind::Enum(allowed) => {
            if !allowed.contains(&key) {
                schema_error(
                    entry_path,
                    format!("map key \"{key}\" is not in the enumeration"),
                    report,
                );
            }
        }
    }
}

fn run_string_checks(text: &str, spec: &FieldSpec, path: &str, report: &mut ValidationReport) {
    for check in &spec.checks {
        match check {
            Check::MinLen(min) => {
                if text.chars().count() < *min {
                    schema_error(
                        path,
                        format!("expected string of at least {min} characters, found \"{text}\""),
                        report,
                    );
                }
            }
            Check::Len(expected) => {
                if text.chars().count() != *expected {
                    schema_error(
                        path,
                        format!("expected string of length {expected}, found \"{text}\""),
                        report,
                    );
                }
            }
            Check::Enum(allowed) => {
                if !allowed.contains(&text) {
                    schema_error(
                        path,
                        format!("\"{text}\" is not a member of the enumeration"),
                        report,
                    );
                }
            }
            _ => {}
        }
    }
}

fn run_array_checks(entries: &[Value], spec: &FieldSpec, path: &str, report: &mut ValidationReport) {
    for check in &spec.checks {
        match check {
            Check::MinLen(min) => {
                if entries.len() < *min {
                    schema_error(
                        path,
                        format!("expected at least {min} entries, found {}", entries.len()),
                        report,
                    );
                }
            }
            Check::Len(expected) => {
                if entries.len() != *expected {
                    schema_error(
                        path,
                        format!("expected exactly {expected} entries, found {}", entries.len()),
                        report,
                    );
                }
            }
            Check::LonLat => {
                if let Err(message) = checks::check_lon_lat(entries) {
                    schema_error(path, message, report);
                }
            }
            Check::Bounds => {
                if let Err(message) = checks::check_bounds(entries) {
                    schema_error(path, message, report);
                }
            }
            Check::Unique => {
                let mut seen = HashSet::new();
                for entry in entries {
                    let rendered = entry.to_string();
                    if !seen.insert(rendered) {
                        schema_error(
                            path,
                            format!(
                                "expected unique entries, found duplicate {}",
                                checks::render_value(entry)
                            ),
                            report,
                        );
                    }
                }
            }
            Check::UniqueBy(field) => {
                let mut seen = HashSet::new();
                for entry in entries {
                    let Some(keyed) = entry.get(field) else {
                        continue;
                    };
                    if !seen.insert(keyed.to_string()) {
                        schema_error(
                            path,
                            format!(
                                "expected unique {field} values, found duplicate {}",
                                checks::render_value(keyed)
                            ),
                            report,
                        );
                    }
                }
            }
            Check::SortedByCapacityDesc => {
                if let Err(message) = checks::check_sorted_by_capacity_desc(entries) {
                    schema_error(path, message, report);
                }
            }
            Check::RequiredKeys(_) => {}
            Check::Enum(_) => {}
        }
    }
}

fn run_map_checks(
    object: &Map<String, Value>,
    spec: &FieldSpec,
    path: &str,
    report: &mut ValidationReport,
) {
    for check in &spec.checks {
        match check {
            Check::MinLen(min) => {
                if object.len() < *min {
                    schema_error(
                        path,
                        format!("expected at least {min} entries, found {}", object.len()),
                        report,
                    );
                }
            }
            Check::RequiredKeys(keys) => {
                for key in *keys {
                    if !object.contains_key(*key) {
                        schema_error(
                            path,
                            format!("missing required map key \"{key}\""),
                            report,
                        );
                    }
                }
            }
            _ => {}
        }
    }
}
