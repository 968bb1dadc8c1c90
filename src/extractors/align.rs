// src/extractors/align.rs

// --- Imports ---
use crate::extractors::relation::RelationRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
static SUPPRESSED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Gesupprimeerd").expect("Failed to compile SUPPRESSED_RE")
});

// National registry number, e.g. "23.45.67 890-12"
static REGISTRY_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{2}\s+[0-9]{3}-[0-9]{2}")
        .expect("Failed to compile REGISTRY_NUMBER_RE")
});

// --- Data Structures ---
/// A value shape that must land in one column across the whole export.
pub struct SpecialColumn {
    pub name: &'static str,
    /// Lowest column the shape may be moved to, if any.
    pub min_target_index: Option<usize>,
    pub matcher: fn(&str) -> bool,
}

fn is_suppression_marker(value: &str) -> bool {
    SUPPRESSED_RE.is_match(value)
}

fn is_registry_number(value: &str) -> bool {
    REGISTRY_NUMBER_RE.is_match(value.trim())
}

/// Applied in this order; the registry number sees the rows after the
/// suppression marker has moved.
pub static SPECIAL_COLUMNS: [SpecialColumn; 2] = [
    SpecialColumn {
        name: "gesupprimeerd",
        min_target_index: Some(3),
        matcher: is_suppression_marker,
    },
    SpecialColumn {
        name: "rijksregisternummer",
        min_target_index: None,
        matcher: is_registry_number,
    },
];

/// Moves each special value to a column shared by every record.
///
/// Targets are the highest index at which each shape occurs anywhere in
/// `records` (raised to the column's floor), computed before anything moves.
/// Shapes that never occur are left alone.
pub fn align_special_columns(records: &mut [RelationRecord]) {
    let targets: Vec<(&SpecialColumn, usize)> = SPECIAL_COLUMNS
        .iter()
        .filter_map(|column| target_index(column, records).map(|target| (column, target)))
        .collect();

    for (column, target) in &targets {
        tracing::debug!("Aligning '{}' values to column {}", column.name, target);
    }

    for record in records.iter_mut() {
        for (column, target) in &targets {
            move_to_column(&mut record.entity_values, column.matcher, *target);
        }
    }
}

fn target_index(column: &SpecialColumn, records: &[RelationRecord]) -> Option<usize> {
    let observed = records
        .iter()
        .flat_map(|record| {
            record
                .entity_values
                .iter()
                .enumerate()
                .filter(|(_, value)| (column.matcher)(value))
                .map(|(idx, _)| idx)
        })
        .max()?;

    Some(column.min_target_index.map_or(observed, |floor| observed.max(floor)))
}

/// Takes the first matching value out, pads with empty fields up to
/// `target` and reinserts it there.
fn move_to_column(values: &mut Vec<String>, matcher: fn(&str) -> bool, target: usize) {
    let Some(idx) = values.iter().position(|value| matcher(value)) else {
        return;
    };

    let value = values.remove(idx);
    if values.len() < target {
        values.resize(target, String::new());
    }
    values.insert(target, value);
}
