use crate::domain::{
    metric::{catalog::MetricCatalog, category::MetricCategory, table::MetricTable},
    shared::errors::DomainError,
    style::color::Color,
};
use std::sync::Arc;

/// Catalog of every built-in table.
///
/// # Errors
///
/// Returns [`DomainError::InvalidColor`] if a stored color is not a
/// `#rrggbb` / `#rrggbbaa` hex string.
pub fn india_utility_catalog() -> Result<Arc<MetricCatalog>, DomainError> {
    Ok(Arc::new(
        MetricCatalog::new()
            .with_table(MetricCategory::Electricity, electricity_coverage())
            .with_table(MetricCategory::Water, tap_water_access())
            .with_table(MetricCategory::Utility, direct_table(&UTILITY_SCORE)?),
    ))
}

/// Household electrification, percent. Keys follow the legacy `NAME_1` names.
fn electricity_coverage() -> MetricTable {
    MetricTable::bucketed([
        ("Andhra Pradesh", 85.0),
        ("Arunachal Pradesh", 45.0),
        ("Assam", 60.0),
        ("Bihar", 52.0),
        ("Gujarat", 95.0),
        ("Karnataka", 88.0),
        ("Kerala", 99.0),
        ("Maharashtra", 92.0),
        ("Orissa", 65.0),
        ("Tamil Nadu", 98.0),
        ("Uttar Pradesh", 70.0),
        ("West Bengal", 82.0),
        ("Rajasthan", 75.0),
        ("Madhya Pradesh", 68.0),
        ("Punjab", 90.0),
        ("Haryana", 89.0),
    ])
}

/// Households with a tap connection, percent.
fn tap_water_access() -> MetricTable {
    MetricTable::bucketed([
        ("Andhra Pradesh", 70.0),
        ("Gujarat", 80.0),
        ("Karnataka", 75.0),
        ("Kerala", 95.0),
        ("Maharashtra", 85.0),
        ("Orissa", 50.0),
        ("Tamil Nadu", 90.0),
        ("West Bengal", 60.0),
    ])
}

/// Combined utility score with hand-picked colors. Keys follow the current
/// `shapeName` names (Odisha, Telangana).
const UTILITY_SCORE: [(&str, f64, &str); 20] = [
    ("Andhra Pradesh", 84.0, "#f28e2bff"),
    ("Arunachal Pradesh", 48.0, "#76b7b2ff"),
    ("Assam", 61.0, "#59a14fff"),
    ("Bihar", 55.0, "#edc948ff"),
    ("Chhattisgarh", 63.0, "#b07aa1ff"),
    ("Goa", 97.0, "#e9e911ff"),
    ("Gujarat", 91.0, "#ff9da7ff"),
    ("Haryana", 88.0, "#9c755fff"),
    ("Jharkhand", 57.0, "#bab0acff"),
    ("Karnataka", 86.0, "#4e79a7ff"),
    ("Kerala", 98.0, "#e15759ff"),
    ("Madhya Pradesh", 66.0, "#8cd17dff"),
    ("Maharashtra", 89.0, "#86bcb6ff"),
    ("Odisha", 62.0, "#f1ce63ff"),
    ("Punjab", 92.0, "#d37295ff"),
    ("Rajasthan", 72.0, "#fabfd2ff"),
    ("Tamil Nadu", 95.0, "#a0cbe8ff"),
    ("Telangana", 83.0, "#ffbe7dff"),
    ("Uttar Pradesh", 69.0, "#499894ff"),
    ("West Bengal", 80.0, "#d4a6c8ff"),
];

fn direct_table(entries: &[(&str, f64, &str)]) -> Result<MetricTable, DomainError> {
    let entries = entries
        .iter()
        .map(|&(region, value, color)| Color::parse(color).map(|color| (region, value, color)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MetricTable::direct(entries))
}
