//! Pluggable address-grammar capability consumed by the location
//! normalizer. Implementations recognize postal addresses inside free
//! text; the normalizer owns the fallback formatting, so backends can be
//! swapped without touching it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Address components recognized inside free text. Values are returned as
/// they appeared in the input; callers decide presentation casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAddress {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Address parsing backend.
///
/// Carried in `AppState` as `Arc<dyn AddressParser>`; the default backend
/// is [`UsAddressParser`].
pub trait AddressParser: Send + Sync {
    /// Returns the recognized address, or `None` when the text does not
    /// look like a postal address this backend understands.
    fn parse(&self, text: &str, country_hint: &str) -> Option<ParsedAddress>;
}

/// Heuristic recognizer for standard US postal patterns: an optional
/// street line, then "City, ST" or "City, State Name", then an optional
/// ZIP ("123 Main St, Springfield, IL 62704").
pub struct UsAddressParser;

/// Trailing segment shape: a state name or code, then an optional ZIP.
static STATE_ZIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .]*?)\.?\s*(\d{5}(?:-\d{4})?)?$").expect("state/zip pattern")
});

const US_STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "PR",
];

const US_STATE_NAMES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

impl AddressParser for UsAddressParser {
    fn parse(&self, text: &str, country_hint: &str) -> Option<ParsedAddress> {
        // This backend only understands US address grammar.
        if !country_hint.eq_ignore_ascii_case("US") {
            return None;
        }

        let segments: Vec<&str> = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.len() < 2 {
            return None;
        }

        let caps = STATE_ZIP_RE.captures(segments.last()?)?;
        let state = state_code(caps.get(1)?.as_str().trim())?;

        // The segment before the state is the city, unless it is a street
        // line (leading house number).
        let city_segment = segments[segments.len() - 2];
        let city = (!city_segment
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit()))
        .then(|| city_segment.to_string());

        Some(ParsedAddress {
            city,
            state: Some(state.to_string()),
            country: None,
        })
    }
}

fn state_code(token: &str) -> Option<&'static str> {
    if token.len() == 2 {
        let upper = token.to_ascii_uppercase();
        return US_STATE_CODES.iter().copied().find(|c| *c == upper);
    }
    let lower = token.to_ascii_lowercase();
    US_STATE_NAMES
        .iter()
        .find_map(|(name, code)| (*name == lower).then_some(*code))
}
