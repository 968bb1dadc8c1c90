// src/extractors/person.rs

use crate::extractors::lines::classify_date_line;
use crate::extractors::relation::split_lines;
use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when neither strategy finds a name.
pub const UNKNOWN_PERSON: &str = "UNKNOWN_PERSON";

const NAME_SECTION_MARKER: &str = "Naam en voornamen";

static LAST_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"PEO_LastName="([^"]+)""#).expect("Failed to compile LAST_NAME_RE")
});

static FIRST_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"PEO_FirstName="([^"]+)""#).expect("Failed to compile FIRST_NAME_RE")
});

/// Resolves the subject's display name for a document.
///
/// Tagged `PEO_LastName` / `PEO_FirstName` attributes win ("Last, First").
/// Failing that, the first dated line after "Naam en voornamen" is used.
pub fn extract_person_name(text: &str) -> String {
    if let Some(name) = name_from_tags(text) {
        tracing::debug!("Person name taken from tagged attributes: {}", name);
        return name;
    }

    if let Some(name) = name_from_name_section(text) {
        tracing::debug!("Person name taken from '{}' section: {}", NAME_SECTION_MARKER, name);
        return name;
    }

    tracing::warn!("Could not determine person name, using {}", UNKNOWN_PERSON);
    UNKNOWN_PERSON.to_string()
}

fn name_from_tags(text: &str) -> Option<String> {
    let parts: Vec<&str> = [tagged_value(&LAST_NAME_RE, text), tagged_value(&FIRST_NAME_RE, text)]
        .into_iter()
        .flatten()
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn tagged_value<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

fn name_from_name_section(text: &str) -> Option<String> {
    let start = text.find(NAME_SECTION_MARKER)?;

    split_lines(&text[start..])
        .skip(1)
        .find_map(classify_date_line)
        .map(|line| line.rest.to_string())
}
