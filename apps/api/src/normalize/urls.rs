use std::collections::HashSet;

use url::Url;

use crate::normalize::text::clean_text;

/// Returns the canonical form of one URL, or `None` when it cannot be a
/// usable link. The canonical string doubles as the dedup key.
///
/// - a missing `http://`/`https://` prefix defaults to `https://`
/// - scheme and host are lowercased
/// - trailing slashes are stripped from the path
/// - a host without a dot-separated label is rejected
pub fn normalize_url(raw: &str) -> Option<String> {
    let lower = raw.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let parsed = Url::parse(&with_scheme).ok()?;
    let host = parsed.host_str()?;
    if !host.contains('.') {
        return None;
    }

    let mut canonical = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        canonical.push_str(&format!(":{port}"));
    }
    canonical.push_str(parsed.path().trim_end_matches('/'));
    if let Some(query) = parsed.query() {
        canonical.push('?');
        canonical.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        canonical.push('#');
        canonical.push_str(fragment);
    }

    Some(canonical)
}

/// Cleans, canonicalizes, and deduplicates a link list, preserving first
/// occurrence order. Malformed entries are dropped silently.
pub fn clean_urls(urls: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for raw in urls {
        let Some(cleaned) = clean_text(raw) else {
            continue;
        };
        let Some(normalized) = normalize_url(&cleaned) else {
            continue;
        };
        if seen.insert(normalized.clone()) {
            out.push(normalized);
        }
    }

    out
}
