// src/extractors/relation.rs

// --- Imports ---
use crate::extractors::align::align_special_columns;
use crate::extractors::headers::match_header;
use crate::extractors::lines::{classify_date_line, refine_for_section, split_entity_values};
use crate::extractors::person::extract_person_name;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\n|\r").expect("Failed to compile LINE_BREAK_RE")
});

// --- Data Structures ---
/// One dated fact from a register section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationRecord {
    pub person: String,        // Same for every record of a document
    pub link_type: &'static str, // Section header the line was found under
    pub date: String,          // DD.MM.YYYY, as written
    pub entity_values: Vec<String>,
}

/// Trimmed, non-empty lines regardless of line ending convention.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Parses a register transcription into relation records, in line order.
///
/// Never fails: lines that are neither a known header nor a dated line
/// under a header are skipped.
pub fn parse_relations(text: &str) -> Vec<RelationRecord> {
    let person = extract_person_name(text);
    let mut current_header: Option<&'static str> = None;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in split_lines(text) {
        if let Some(header) = match_header(line) {
            tracing::trace!("Entering section '{}'", header);
            current_header = Some(header);
            continue;
        }

        let (Some(date_line), Some(link_type)) = (classify_date_line(line), current_header) else {
            skipped += 1;
            continue;
        };
        if date_line.rest.is_empty() {
            skipped += 1;
            continue;
        }

        let mut entity_values = split_entity_values(date_line.rest);
        refine_for_section(link_type, &mut entity_values);

        records.push(RelationRecord {
            person: person.clone(),
            link_type,
            date: date_line.date.to_string(),
            entity_values,
        });
    }

    align_special_columns(&mut records);

    tracing::debug!(
        "Parsed {} relation(s) for '{}', skipped {} line(s)",
        records.len(),
        person,
        skipped
    );
    records
}

/// Widest entity value row; decides how many `entity_value` columns to emit.
pub fn max_entity_columns(records: &[RelationRecord]) -> usize {
    records
        .iter()
        .map(|record| record.entity_values.len())
        .max()
        .unwrap_or(0)
}
