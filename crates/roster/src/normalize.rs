//! Name normalization shared by matching, sorting and placeholder ids.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Tokens at or below this many characters (initials, "dr", "mr") are
/// ignored by the fuzzy pass.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase, drop `.` and `,`, trim surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whitespace-separated tokens of an already normalized name, keeping only
/// tokens longer than [`MIN_TOKEN_CHARS`].
pub fn significant_tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

/// Replace every run of whitespace with a single `-`. Case is preserved.
pub fn slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Primary sort key: canonical decomposition with combining marks dropped,
/// then lowercased, so "Ābha" files under "a" and not after "z".
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Display-name ordering. Accents and case are ignored first; ties fall back
/// to the lowercased text and then the raw text, so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
