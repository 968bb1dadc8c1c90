// src/render/html.rs
use crate::extractors::{max_entity_columns, RelationRecord};
use crate::render::{summary, EMPTY_NOTICE};

/// Renders the records as a standalone HTML page with one table row per record.
pub fn render_html(records: &[RelationRecord]) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Relations preview</title>\n<style>\n");

    html.push_str("table { border-collapse: collapse; font-family: sans-serif; font-size: 13px; }\n");
    html.push_str("th, td { border: 1px solid #ccc; padding: 2px 6px; text-align: left; }\n");
    html.push_str("th { background-color: #EEEEEE; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    if records.is_empty() {
        html.push_str(&format!("<p><i>{}</i></p>\n", escape_html(EMPTY_NOTICE)));
        html.push_str("</body>\n</html>");
        return html;
    }

    if let Some(line) = summary(records) {
        html.push_str(&format!("<p>{}</p>\n", escape_html(&line)));
    }

    let columns = max_entity_columns(records);

    html.push_str("<table><thead><tr>");
    html.push_str("<th>#</th><th>Person</th><th>Link type (section)</th><th>Date</th>");
    for idx in 0..columns {
        html.push_str(&format!("<th>entity_value{}</th>", idx));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (row, record) in records.iter().enumerate() {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", row + 1));
        push_cell(&mut html, &record.person);
        push_cell(&mut html, record.link_type);
        push_cell(&mut html, &record.date);
        for idx in 0..columns {
            push_cell(&mut html, record.entity_values.get(idx).map_or("", String::as_str));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody></table>\n</body>\n</html>");
    html
}

fn push_cell(html: &mut String, value: &str) {
    html.push_str("<td>");
    html.push_str(&escape_html(value));
    html.push_str("</td>");
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
