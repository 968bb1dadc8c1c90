// src/export/mod.rs
use crate::extractors::{max_entity_columns, RelationRecord};

const FIXED_COLUMNS: [&str; 3] = ["person", "link_type", "date"];

/// Serializes records as CSV: fixed columns, then one `entity_value{i}`
/// column per position of the widest record. Rows are `\n`-joined with no
/// trailing newline.
pub fn to_csv(records: &[RelationRecord]) -> String {
    let columns = max_entity_columns(records);

    let mut header: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
    header.extend((0..columns).map(|idx| format!("entity_value{}", idx)));

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(join_row(header.iter().map(String::as_str)));

    for record in records {
        let fixed = [record.person.as_str(), record.link_type, record.date.as_str()];
        let entities = (0..columns).map(|idx| record.entity_values.get(idx).map_or("", String::as_str));
        lines.push(join_row(fixed.into_iter().chain(entities)));
    }

    tracing::debug!("Serialized {} record(s) with {} entity column(s)", records.len(), columns);
    lines.join("\n")
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(escape_cell).collect::<Vec<_>>().join(",")
}

/// Quotes a cell only when it holds a quote, comma or newline.
pub fn escape_cell(cell: &str) -> String {
    if cell.contains(|c: char| matches!(c, '"' | ',' | '\n')) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
