//! Fuzzy date normalization: many spellings, one calendar month.
//!
//! Resume dates arrive as "Jan 2023", "01/2023", "2023-01-15", bare years,
//! or open-ended markers like "present". Everything that resolves maps to
//! the first day of the resolved month; the day component is never
//! meaningful and is always discarded.

use chrono::NaiveDate;

use crate::normalize::text::clean_text;

/// Markers meaning "ongoing" rather than a calendar date.
const OPEN_ENDED: &[&str] = &["present", "current", "ongoing", "now"];

/// Reference components filling whatever the input leaves unspecified.
const REFERENCE_YEAR: i32 = 2000;
const REFERENCE_MONTH: u32 = 1;

/// Parses a free-text date expression to the first day of its month.
///
/// Open-ended markers and unparseable input both yield `None`; callers
/// treat an absent end date as "ongoing" and an absent start date as
/// grounds to drop the containing entry.
pub fn clean_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = clean_text(raw)?.to_lowercase();

    if OPEN_ENDED.contains(&cleaned.as_str()) {
        return None;
    }

    parse_fuzzy(&cleaned)
}

/// Token-based fuzzy parse. Month names, 4-digit years, and 2-digit years
/// above 31 are unambiguous; leftover small numbers fill the open slots
/// with a year-first rule ("10/11/12" reads as 2010-11). Word tokens that
/// are not month names are ignored.
fn parse_fuzzy(text: &str) -> Option<NaiveDate> {
    let mut year: Option<i32> = None;
    let mut month: Option<u32> = None;
    let mut small: Vec<u32> = Vec::new();

    let tokens = text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '/' | '-'))
        .filter(|t| !t.is_empty());

    for token in tokens {
        if let Some(m) = month_number(token) {
            if month.is_none() {
                month = Some(m);
            }
            continue;
        }
        if let Ok(n) = token.parse::<u32>() {
            match token.len() {
                4 => {
                    if year.is_none() {
                        year = Some(n as i32);
                    }
                }
                1 | 2 => small.push(n),
                _ => {} // longer digit runs are never a date component
            }
        }
    }

    if month.is_some() {
        if year.is_none() {
            // "jan 99": a small number above 31 can still be the year
            year = small
                .iter()
                .find(|n| **n > 31)
                .map(|n| expand_two_digit_year(*n));
        }
    } else if year.is_some() {
        // "2023-01-15" or "15/01/2023": first small number usable as month
        month = small.iter().copied().find(|n| (1..=12).contains(n));
    } else {
        match small.as_slice() {
            [] => return None,
            [n] => {
                if *n > 31 {
                    year = Some(expand_two_digit_year(*n));
                } else if (1..=12).contains(n) {
                    month = Some(*n);
                }
                // 13..=31 reads as a bare day; both components fall back
            }
            [a, b] => {
                if *a > 31 {
                    year = Some(expand_two_digit_year(*a));
                    month = (1..=12).contains(b).then_some(*b);
                } else if *b > 31 {
                    year = Some(expand_two_digit_year(*b));
                    month = (1..=12).contains(a).then_some(*a);
                } else if (1..=12).contains(a) {
                    month = Some(*a);
                } else if (1..=12).contains(b) {
                    month = Some(*b); // "15/05" reads day-first
                } else {
                    return None; // two numbers, neither a usable component
                }
            }
            [a, b, ..] => {
                // year-first disambiguation for all-small numeric dates
                year = Some(expand_two_digit_year(*a));
                month = Some(*b);
            }
        }
    }

    NaiveDate::from_ymd_opt(
        year.unwrap_or(REFERENCE_YEAR),
        month.unwrap_or(REFERENCE_MONTH),
        1,
    )
}

fn month_number(token: &str) -> Option<u32> {
    const MONTHS: &[(&str, u32)] = &[
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
    ];
    MONTHS.iter().find_map(|(name, n)| {
        let abbreviated = token.len() >= 3 && name.starts_with(token);
        (*name == token || abbreviated).then_some(*n)
    })
}

/// POSIX pivot: 69..=99 land in the 1900s, 0..=68 in the 2000s.
fn expand_two_digit_year(n: u32) -> i32 {
    if n >= 69 {
        1900 + n as i32
    } else {
        2000 + n as i32
    }
}
