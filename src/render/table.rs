// src/render/table.rs
use crate::extractors::{max_entity_columns, RelationRecord};
use crate::render::EMPTY_NOTICE;

/// Fixed-width text preview, one line per record.
pub fn render_table(records: &[RelationRecord]) -> String {
    if records.is_empty() {
        return EMPTY_NOTICE.to_string();
    }

    let columns = max_entity_columns(records);

    let mut header: Vec<String> = ["#", "Person", "Link type (section)", "Date"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    header.extend((0..columns).map(|idx| format!("entity_value{}", idx)));

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let mut cells = vec![
                (row + 1).to_string(),
                record.person.clone(),
                record.link_type.to_string(),
                record.date.clone(),
            ];
            cells.extend((0..columns).map(|idx| {
                record.entity_values.get(idx).cloned().unwrap_or_default()
            }));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&header, &widths));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    for cells in &rows {
        out.push('\n');
        out.push_str(&format_row(cells, &widths));
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    // Trailing empty cells are dropped rather than padded
    let used = cells.iter().rposition(|cell| !cell.is_empty()).map_or(0, |idx| idx + 1);
    cells[..used]
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
