//! Leaf value checks shared by the schema walker. Each returns the error
//! message for the diagnostic, or `Ok(())` when the value conforms.

use chrono::NaiveDate;
use serde_json::Value;

/// Years outside this window are almost certainly unit drift in the
/// generation process, not real data.
pub const YEAR_MIN: i64 = 2000;
pub const YEAR_MAX: i64 = 2050;

pub fn check_year(value: i64) -> Result<(), String> {
    if (YEAR_MIN..=YEAR_MAX).contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "expected year in [{YEAR_MIN}, {YEAR_MAX}], found {value}"
        ))
    }
}

/// `"N/A"` or a number with a trailing percent sign, e.g. `"-3.2%"`.
pub fn check_percentage(value: &str) -> Result<(), String> {
    if value == "N/A" {
        return Ok(());
    }
    let trimmed = value.strip_suffix('%').unwrap_or(value);
    if trimmed.parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err(format!(
            "expected percentage string or \"N/A\", found \"{value}\""
        ))
    }
}

/// Long-form American date, e.g. `"March 4, 2025"`.
pub fn check_american_date(value: &str) -> Result<(), String> {
    match NaiveDate::parse_from_str(value, "%B %d, %Y") {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "expected long-form date (\"March 4, 2025\"), found \"{value}\""
        )),
    }
}

/// Absolute http(s) URL with a non-empty host.
pub fn check_url(value: &str) -> Result<(), String> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(format!("expected http(s) URL, found \"{value}\"")),
    }
}

/// Article ids carry their source pipeline in the id itself.
pub fn check_article_id(value: &str) -> Result<(), String> {
    let lowered = value.to_lowercase();
    if lowered.contains("coalwire") || lowered.contains("newsapi") {
        Ok(())
    } else {
        Err(format!(
            "expected article id containing 'coalwire' or 'newsapi', found \"{value}\""
        ))
    }
}

fn as_strict_float(value: &Value) -> Option<f64> {
    if value.is_f64() {
        value.as_f64()
    } else {
        None
    }
}

/// `[lon, lat]` pair: exactly two floats, lon in [-180, 180], lat in [-90, 90].
pub fn check_lon_lat(values: &[Value]) -> Result<(), String> {
    if values.len() != 2 {
        return Err(format!(
            "expected [lon, lat] pair of length 2, found length {}",
            values.len()
        ));
    }
    let (Some(lon), Some(lat)) = (as_strict_float(&values[0]), as_strict_float(&values[1]))
    else {
        return Err("expected [lon, lat] pair of floats".to_string());
    };
    if (-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(format!(
            "expected lon in [-180, 180] and lat in [-90, 90], found [{lon}, {lat}]"
        ))
    }
}

/// `[left, top, right, bottom]` box: two valid lon/lat pairs with
/// left <= right and top <= bottom.
pub fn check_bounds(values: &[Value]) -> Result<(), String> {
    if values.len() != 4 {
        return Err(format!(
            "expected bounds of length 4, found length {}",
            values.len()
        ));
    }
    check_lon_lat(&values[0..2])?;
    check_lon_lat(&values[2..4])?;
    let left = as_strict_float(&values[0]).unwrap_or_default();
    let top = as_strict_float(&values[1]).unwrap_or_default();
    let right = as_strict_float(&values[2]).unwrap_or_default();
    let bottom = as_strict_float(&values[3]).unwrap_or_default();
    if left <= right && top <= bottom {
        Ok(())
    } else {
        Err(format!(
            "expected left <= right and top <= bottom, found [{left}, {top}, {right}, {bottom}]"
        ))
    }
}

/// Ranked-country lists are published largest-first.
pub fn check_sorted_by_capacity_desc(values: &[Value]) -> Result<(), String> {
    let capacities: Vec<f64> = values
        .iter()
        .filter_map(|entry| entry.get("capacity_mw"))
        .filter_map(numeric)
        .collect();
    for (index, pair) in capacities.windows(2).enumerate() {
        if pair[0] < pair[1] {
            return Err(format!(
                "expected capacity_mw sorted descending, found {} before {} at index {}",
                pair[0],
                pair[1],
                index + 1
            ));
        }
    }
    Ok(())
}

fn numeric(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Compact single-line rendering of a JSON value for diagnostics.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => format!("\"{text}\""),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
        other => other.to_string(),
    }
}
