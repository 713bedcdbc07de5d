use phonenumber::{country, Mode};

/// Converts a phone number to E.164 ("+14155550132") using libphonenumber
/// metadata. The region hint resolves numbers without a country prefix.
///
/// Returns `None` when the number does not parse or is not a genuinely
/// valid number for its inferred region; the caller decides the fallback.
pub fn to_e164(raw: &str, default_region: Option<&str>) -> Option<String> {
    let region = default_region.and_then(|r| r.parse::<country::Id>().ok());
    let number = phonenumber::parse(region, raw).ok()?;

    if !phonenumber::is_valid(&number) {
        return None;
    }

    Some(number.format().mode(Mode::E164).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_input_formats_to_e164() {
        assert_eq!(
            to_e164("+1 415-555-0132", Some("US")),
            Some("+14155550132".to_string())
        );
    }

    #[test]
    fn test_national_input_uses_region_hint() {
        assert_eq!(
            to_e164("(415) 555-0132", Some("US")),
            Some("+14155550132".to_string())
        );
    }

    #[test]
    fn test_too_short_number_is_rejected() {
        assert_eq!(to_e164("12345", Some("US")), None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(to_e164("banana", Some("US")), None);
    }

    #[test]
    fn test_national_input_without_region_is_rejected() {
        assert_eq!(to_e164("415-555-0132", None), None);
    }

    #[test]
    fn test_unknown_region_hint_is_ignored() {
        // Bad hint degrades to no hint; a prefixed number still parses.
        assert_eq!(
            to_e164("+14155550132", Some("XX")),
            Some("+14155550132".to_string())
        );
    }
}
