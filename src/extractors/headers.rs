// src/extractors/headers.rs

/// Section headers of a population-register extract, in document order.
/// A line is a header only when it equals one of these exactly.
pub const KNOWN_HEADERS: [&str; 18] = [
    "Gemeente",
    "Verklaring van vertrek of inschrijving",
    "Land vanwaar de vreemdeling afkomstig is",
    "Naam en voornamen",
    "Naamwijziging",
    "Adres",
    "Nationaliteit",
    "Beroep",
    "Geboorteplaats",
    "Afstamming",
    "Afstamming in dalende lijn",
    "Burgerlijke staat",
    "Samenstelling van het gezin",
    "Bestaan van het identiteits- en handtekenings-certificaat",
    "Identiteitsbewijs",
    "Nummer van de Dienst Vreemdelingenzaken",
    "Bijzondere informatie (vreemdelingen)",
    "Vermelding van het register",
];

pub const DESCENDANTS_HEADER: &str = "Afstamming in dalende lijn";
pub const CIVIL_STATUS_HEADER: &str = "Burgerlijke staat";

/// Returns the table entry for `line` if it is a known section header.
/// Case and spacing must match; the caller trims the line beforehand.
pub fn match_header(line: &str) -> Option<&'static str> {
    KNOWN_HEADERS.iter().copied().find(|header| *header == line)
}
