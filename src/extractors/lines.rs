// src/extractors/lines.rs

// --- Imports ---
use crate::extractors::headers::{CIVIL_STATUS_HEADER, DESCENDANTS_HEADER};
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// DD.MM.YYYY, at least one whitespace, then the payload. ASCII digits only.
pub(crate) static DATE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}\.[0-9]{2}\.[0-9]{4})\s+(.*)$")
        .expect("Failed to compile DATE_LINE_RE")
});

// Contents of each non-empty parenthesised group, left to right
static PAREN_GROUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([^)]+)\)").expect("Failed to compile PAREN_GROUP_RE")
});

// Whole groups (including empty ones) to cut out of the description
static PAREN_STRIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(.*?\)").expect("Failed to compile PAREN_STRIP_RE")
});

static TE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+te\s+").expect("Failed to compile TE_SPLIT_RE")
});

const PARENT_TAG: &str = "Ouder";
const MARRIED_TAG: &str = "Gehuwd";

// --- Data Structures ---
/// A content line anchored on a leading date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLine<'a> {
    pub date: &'a str,
    /// Payload after the date, trimmed. May be empty.
    pub rest: &'a str,
}

/// Recognizes `DD.MM.YYYY <payload>` lines.
pub fn classify_date_line(line: &str) -> Option<DateLine<'_>> {
    let caps = DATE_LINE_RE.captures(line)?;
    let date = caps.get(1)?.as_str();
    let rest = caps.get(2).map_or("", |m| m.as_str().trim());
    Some(DateLine { date, rest })
}

/// Splits a line payload into entity values: the leading tag, the free-text
/// description without parenthesised groups, then each group's content.
pub fn split_entity_values(entity_line: &str) -> Vec<String> {
    let trimmed = entity_line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut values = Vec::new();

    let tag_end = trimmed
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(trimmed.len());
    let (tag, remainder) = trimmed.split_at(tag_end);
    if !tag.is_empty() {
        values.push(tag.to_string());
    }

    let remainder = remainder.trim();
    let groups: Vec<String> = PAREN_GROUP_RE
        .captures_iter(remainder)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    let description = PAREN_STRIP_RE.replace_all(remainder, "");
    let description = description.trim();
    if !description.is_empty() {
        values.push(description.to_string());
    }

    values.extend(groups);
    values
}

/// Applies section-specific cleanups to freshly split values.
pub fn refine_for_section(link_type: &str, values: &mut Vec<String>) {
    let has_tag = |tag: &str| values.first().is_some_and(|first| first == tag);

    if link_type == DESCENDANTS_HEADER && has_tag(PARENT_TAG) {
        if let Some(parent) = values.get_mut(1) {
            if let Some(stripped) = strip_prefix_ignore_case(parent, "van ") {
                *parent = stripped.to_string();
            }
        }
    } else if link_type == CIVIL_STATUS_HEADER && has_tag(MARRIED_TAG) {
        split_spouse_field(values);
    }
}

/// "met Jansen te Brussel te Gent" -> "Jansen", "Brussel", "Gent", spliced in
/// at position 1 ahead of whatever followed.
fn split_spouse_field(values: &mut Vec<String>) {
    let Some(spouse) = values.get(1) else {
        return;
    };

    let mut spouse_text = spouse.trim();
    if let Some(stripped) = strip_prefix_ignore_case(spouse_text, "met ") {
        spouse_text = stripped.trim();
    }

    let chunks: Vec<String> = TE_SPLIT_RE
        .split(spouse_text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect();

    if chunks.is_empty() {
        values[1] = spouse_text.to_string();
        return;
    }

    tracing::trace!("Split spouse field into {} chunk(s)", chunks.len());
    values.splice(1..2, chunks);
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn refined(link_type: &str, rest: &str) -> Vec<String> {
        let mut values = split_entity_values(rest);
        refine_for_section(link_type, &mut values);
        values
    }

    #[test]
    fn test_date_line_extracts_date_and_trimmed_rest() {
        let line = classify_date_line("12.05.1930   Gehuwd met Jansen  ").expect("date line");
        assert_eq!(line.date, "12.05.1930");
        assert_eq!(line.rest, "Gehuwd met Jansen");
    }

    #[test]
    fn test_date_line_requires_exact_shape() {
        assert!(classify_date_line("1.05.1930 Werkman").is_none());
        assert!(classify_date_line("12.05.30 Werkman").is_none());
        assert!(classify_date_line("12-05-1930 Werkman").is_none());
        assert!(classify_date_line("12.05.1930Werkman").is_none());
        assert!(classify_date_line("Werkman 12.05.1930 x").is_none());
        // No whitespace after the date at all
        assert!(classify_date_line("12.05.1930").is_none());
    }

    #[test]
    fn test_date_line_rejects_non_ascii_digits() {
        assert!(classify_date_line("١٢.05.1930 Werkman").is_none());
    }

    #[test]
    fn test_date_line_with_blank_payload_still_matches() {
        let line = classify_date_line("12.05.1930 \t ").expect("date line");
        assert_eq!(line.rest, "");
    }

    #[test]
    fn test_split_tag_description_and_groups() {
        assert_eq!(
            split_entity_values("Werkman bij Cockerill (Seraing) (tijdelijk)"),
            vec!["Werkman", "bij Cockerill", "Seraing", "tijdelijk"]
        );
    }

    #[test]
    fn test_split_tag_directly_followed_by_group() {
        assert_eq!(
            split_entity_values("Werkman(Gesupprimeerd)"),
            vec!["Werkman", "Gesupprimeerd"]
        );
    }

    #[test]
    fn test_split_single_token() {
        assert_eq!(split_entity_values("Belg"), vec!["Belg"]);
    }

    #[test]
    fn test_split_leading_group_has_no_tag() {
        assert_eq!(
            split_entity_values("(Gesupprimeerd) Brussel"),
            vec!["Brussel", "Gesupprimeerd"]
        );
    }

    #[test]
    fn test_split_empty_group_removed_but_not_emitted() {
        assert_eq!(split_entity_values("Adres Kerkstraat 1 ()"), vec!["Adres", "Kerkstraat 1"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_entity_values("").is_empty());
        assert!(split_entity_values("   ").is_empty());
    }

    #[test]
    fn test_parent_prefix_stripped_in_descendants_section() {
        assert_eq!(
            refined(DESCENDANTS_HEADER, "Ouder van Maria Peeters"),
            vec!["Ouder", "Maria Peeters"]
        );
        assert_eq!(
            refined(DESCENDANTS_HEADER, "Ouder VAN Maria Peeters"),
            vec!["Ouder", "Maria Peeters"]
        );
    }

    #[test]
    fn test_parent_prefix_kept_elsewhere() {
        assert_eq!(refined("Afstamming", "Ouder van Maria"), vec!["Ouder", "van Maria"]);
        assert_eq!(refined(DESCENDANTS_HEADER, "Kind van Maria"), vec!["Kind", "van Maria"]);
        assert_eq!(refined(DESCENDANTS_HEADER, "Ouder vanderbilt"), vec!["Ouder", "vanderbilt"]);
    }

    #[test]
    fn test_married_splits_on_te() {
        assert_eq!(
            refined(CIVIL_STATUS_HEADER, "Gehuwd met Jansen te Brussel te Gent"),
            vec!["Gehuwd", "Jansen", "Brussel", "Gent"]
        );
    }

    #[test]
    fn test_married_chunks_precede_group_fields() {
        assert_eq!(
            refined(CIVIL_STATUS_HEADER, "Gehuwd Met Jansen TE Brussel (akte 12)"),
            vec!["Gehuwd", "Jansen", "Brussel", "akte 12"]
        );
    }

    #[test]
    fn test_married_without_te_keeps_single_field() {
        assert_eq!(
            refined(CIVIL_STATUS_HEADER, "Gehuwd met Anna de Smet"),
            vec!["Gehuwd", "Anna de Smet"]
        );
        // "te" inside a word is not a separator
        assert_eq!(
            refined(CIVIL_STATUS_HEADER, "Gehuwd met Peter Tenbroek"),
            vec!["Gehuwd", "Peter Tenbroek"]
        );
    }

    #[test]
    fn test_married_only_tag() {
        assert_eq!(refined(CIVIL_STATUS_HEADER, "Gehuwd"), vec!["Gehuwd"]);
    }

    #[test]
    fn test_other_civil_status_untouched() {
        assert_eq!(
            refined(CIVIL_STATUS_HEADER, "Weduwnaar van Jansen te Gent"),
            vec!["Weduwnaar", "van Jansen te Gent"]
        );
    }

    #[test]
    fn test_strip_prefix_ignore_case_is_char_safe() {
        assert_eq!(strip_prefix_ignore_case("mét x", "met "), None);
        assert_eq!(strip_prefix_ignore_case("me", "met "), None);
        assert_eq!(strip_prefix_ignore_case("MET x", "met "), Some("x"));
    }
}
