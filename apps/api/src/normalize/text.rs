//! Base text cleaning shared by every text-bearing normalizer.

use unicode_normalization::UnicodeNormalization;

/// Removes extra whitespace, accents, and most emoji/supplementary symbols.
///
/// Characters outside the Basic Multilingual Plane are dropped, then the
/// remainder is compatibility-decomposed and re-encoded as ASCII, so
/// "résumé" becomes "resume". Returns `None` when nothing printable remains.
pub fn clean_text(s: &str) -> Option<String> {
    let bmp: String = s.chars().filter(|c| (*c as u32) <= 0xFFFF).collect();
    let ascii: String = bmp.nfkd().filter(char::is_ascii).collect();

    let collapsed = ascii.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Cleans then Title-Cases a string.
pub fn title_case(s: &str) -> Option<String> {
    clean_text(s).map(|t| capitalize_runs(&t))
}

/// Uppercases the first letter of each alphabetic run and lowercases the
/// rest: "new york" -> "New York", "o'brien" -> "O'Brien".
pub(crate) fn capitalize_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if run_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            run_start = false;
        } else {
            out.push(c);
            run_start = true;
        }
    }
    out
}
