use crate::normalize::text::{capitalize_runs, clean_text};

/// Honorifics stripped from the front of a name. Matched against leading
/// words only, with trailing periods ignored ("Dr." strips like "dr").
const TITLES: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "professor"];

/// Removes leading honorifics and proper-cases the remaining words.
/// Empty or title-only input yields an empty string, not an error.
pub fn clean_name(name: &str) -> String {
    let Some(cleaned) = clean_text(name) else {
        return String::new();
    };

    let words: Vec<&str> = cleaned.split(' ').collect();
    let mut start = 0;
    while start < words.len() {
        let word = words[start].trim_end_matches('.').to_lowercase();
        if TITLES.contains(&word.as_str()) {
            start += 1;
        } else {
            break;
        }
    }

    capitalize_runs(&words[start..].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_title_with_period() {
        assert_eq!(clean_name("dr. john doe"), "John Doe");
    }

    #[test]
    fn test_strips_title_and_recases() {
        assert_eq!(clean_name("MRS. JANE SMITH"), "Jane Smith");
    }

    #[test]
    fn test_strips_all_leading_titles() {
        assert_eq!(clean_name("mr dr john"), "John");
    }

    #[test]
    fn test_title_in_the_middle_is_kept() {
        assert_eq!(clean_name("john dr smith"), "John Dr Smith");
    }

    #[test]
    fn test_apostrophe_name_casing() {
        assert_eq!(clean_name("  Mr.   JOHN   O'Brien  "), "John O'Brien");
    }

    #[test]
    fn test_hyphenated_name_casing() {
        assert_eq!(clean_name("mary-jane watson"), "Mary-Jane Watson");
    }

    #[test]
    fn test_title_only_input_is_empty() {
        assert_eq!(clean_name("Dr."), "");
        assert_eq!(clean_name("mr mrs"), "");
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("   "), "");
    }
}
