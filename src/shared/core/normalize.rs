// Canonical form used for fuzzy title search.
//
// Lowercases, folds accented characters to their base letter, collapses every
// run of characters outside [a-z0-9] to a single space and trims the ends.
// Total and deterministic: any input, including an absent one, yields a string.

use unicode_normalization::UnicodeNormalization;

const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

#[must_use]
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.nfd().filter(|c| !COMBINING_DIACRITICS.contains(c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push(' ');
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }

    out
}

#[must_use]
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}
