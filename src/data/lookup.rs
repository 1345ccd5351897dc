//! Referential authority for country identifiers. Built once per run, either
//! from the two validated lookup dataset files (batch mode) or from the
//! static ISO table (single-file mode and fallback), then shared read-only
//! into every dependent validation.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::data::enums::ISO_COUNTRIES;
use crate::schema::validate::{
    ValidationReport, ValidationSeverity, ViolationKind,
};

/// Code <-> name maps consulted by the walker for `IsoCode`/`CountryName`
/// fields and ISO-keyed maps. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct LookupStore {
    code_to_name: BTreeMap<String, String>,
    name_to_code: BTreeMap<String, String>,
    from_static_table: bool,
}

impl LookupStore {
    /// Membership from the built-in ISO table. Used when validating a single
    /// file without the lookup datasets, and as the batch fallback when a
    /// lookup file is broken.
    pub fn from_static_table() -> LookupStore {
        let code_to_name: BTreeMap<String, String> = ISO_COUNTRIES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        let name_to_code: BTreeMap<String, String> = ISO_COUNTRIES
            .iter()
            .map(|(code, name)| (name.to_string(), code.to_string()))
            .collect();
        LookupStore {
            code_to_name,
            name_to_code,
            from_static_table: true,
        }
    }

    /// Membership from the loaded lookup dataset payloads. Non-object
    /// payloads and non-string entries contribute nothing; their defects are
    /// already reported by the lookup files' own schema validation.
    pub fn from_payloads(iso_lookup: &Value, country_lookup: &Value) -> LookupStore {
        let mut code_to_name = BTreeMap::new();
        if let Some(entries) = iso_lookup.as_object() {
            for (code, name) in entries {
                if let Some(name) = name.as_str() {
                    code_to_name.insert(code.clone(), name.to_string());
                }
            }
        }
        let mut name_to_code = BTreeMap::new();
        if let Some(entries) = country_lookup.as_object() {
            for (name, code) in entries {
                if let Some(code) = code.as_str() {
                    name_to_code.insert(name.clone(), code.to_string());
                }
            }
        }
        LookupStore {
            code_to_name,
            name_to_code,
            from_static_table: false,
        }
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.code_to_name.contains_key(code)
    }

    pub fn contains_country(&self, name: &str) -> bool {
        self.name_to_code.contains_key(name)
    }

    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    pub fn code_count(&self) -> usize {
        self.code_to_name.len()
    }

    /// True when this store was synthesized from the built-in table rather
    /// than loaded from the lookup datasets.
    pub fn is_static(&self) -> bool {
        self.from_static_table
    }

    /// The two lookup maps must be mutual inverses: looking up a code's name
    /// and mapping the name back must return the same code, and vice versa.
    /// Violations are appended to `report` as referential diagnostics.
    pub fn push_round_trip_diagnostics(&self, report: &mut ValidationReport) {
        for (code, name) in &self.code_to_name {
            match self.name_to_code.get(name) {
                Some(reverse) if reverse == code => {}
                Some(reverse) => report.push(
                    ValidationSeverity::Error,
                    ViolationKind::Referential,
                    name.clone(),
                    format!(
                        "reverse lookup maps \"{name}\" to \"{reverse}\", expected \"{code}\""
                    ),
                ),
                None => report.push(
                    ValidationSeverity::Error,
                    ViolationKind::Referential,
                    code.clone(),
                    format!("country \"{name}\" is missing from the reverse lookup"),
                ),
            }
        }
        for (name, code) in &self.name_to_code {
            if !self.code_to_name.contains_key(code) {
                report.push(
                    ValidationSeverity::Error,
                    ViolationKind::Referential,
                    name.clone(),
                    format!("code \"{code}\" is missing from the iso lookup"),
                );
            }
        }
    }
}
