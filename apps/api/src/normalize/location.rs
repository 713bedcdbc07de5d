use crate::models::resume::{CleanedLocation, LocationIn, LocationInput, LocationOut};
use crate::normalize::address::AddressParser;
use crate::normalize::text::{capitalize_runs, clean_text};

/// Country grammar the free-text fallback asks the address backend for.
const COUNTRY_HINT: &str = "US";

/// Normalizes either location input shape.
///
/// Structured records keep their record shape with each field cleaned
/// independently; free text reduces to a best-effort display string and
/// never fails outright.
pub fn clean_location(input: &LocationInput, parser: &dyn AddressParser) -> Option<CleanedLocation> {
    match input {
        LocationInput::Structured(loc) => clean_structured(loc).map(CleanedLocation::Structured),
        LocationInput::FreeText(text) => {
            clean_free_text(text, parser).map(CleanedLocation::Formatted)
        }
    }
}

/// Record is dropped only when city, state, and country all clean to empty.
fn clean_structured(loc: &LocationIn) -> Option<LocationOut> {
    let city = clean_text(&loc.city).unwrap_or_default();
    let state = clean_text(&loc.state).unwrap_or_default();
    let country = clean_text(&loc.country).unwrap_or_default();

    if city.is_empty() && state.is_empty() && country.is_empty() {
        return None;
    }

    Some(LocationOut {
        city,
        state,
        country,
        zip: loc.zip.as_deref().and_then(clean_text),
    })
}

/// Best-effort formatter for a free-form location string.
///
/// When the address backend recognizes an address, prefer "city, state",
/// then "city, country", then the bare city; otherwise fall back to the
/// title-cased cleaned text.
fn clean_free_text(text: &str, parser: &dyn AddressParser) -> Option<String> {
    let cleaned = clean_text(text)?;

    if let Some(addr) = parser.parse(&cleaned, COUNTRY_HINT) {
        let city = addr.city.as_deref().map(capitalize_runs);
        match (city, addr.state, addr.country) {
            (Some(city), Some(state), _) => return Some(format!("{city}, {state}")),
            (Some(city), None, Some(country)) => return Some(format!("{city}, {country}")),
            (Some(city), None, None) => return Some(city),
            _ => {} // state without city: fall back to the cleaned text
        }
    }

    Some(capitalize_runs(&cleaned))
}
