// src/render/mod.rs
pub mod html;
pub mod table;

use crate::extractors::RelationRecord;

pub use html::render_html;
pub use table::render_table;

/// Shown instead of a table when a parse produced nothing.
pub const EMPTY_NOTICE: &str = "No relations found. Check the input and parse again.";

/// One-line description of a parse, `None` when there is nothing to describe.
pub fn summary(records: &[RelationRecord]) -> Option<String> {
    let first = records.first()?;
    Some(format!(
        "{} relation(s) parsed for \"{}\"",
        records.len(),
        first.person
    ))
}
