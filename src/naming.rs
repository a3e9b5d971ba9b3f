//! Constant identifier synthesis
//!
//! Turns an arbitrary literal string into a legal, unique Dart identifier.
//! Synthesis is deterministic and side-effect-free: the caller is responsible
//! for recording the returned name in its pending set.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Prefix applied when normalization alone cannot produce a legal or
/// non-reserved identifier
const MARKER: &str = "dash_";

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Dart reserved keywords a constant name must never collide with
static RESERVED_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "assert", "break", "case", "catch", "class", "const", "continue", "default", "do",
        "else", "enum", "extends", "false", "final", "finally", "for", "if", "in", "new",
        "null", "rethrow", "return", "super", "switch", "this", "throw", "true", "try",
        "var", "void", "while", "with", "is", "async", "await", "yield",
    ]
    .into_iter()
    .collect()
});

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Derive a unique constant name for `literal`, avoiding every name in
/// `existing` and `pending`.
///
/// Normalization lower-cases the literal and collapses each maximal run of
/// non-alphanumeric characters to a single underscore. An all-digit result
/// is transliterated to digit words (`"42"` becomes `four_two`); a leading
/// digit or underscore, or a reserved-keyword collision, gets the `dash_`
/// marker prefix. Remaining collisions are resolved with the first free
/// `_2`, `_3`, ... suffix.
pub fn synthesize(literal: &str, existing: &HashSet<String>, pending: &HashSet<String>) -> String {
    let normalized = NON_ALNUM_RUN.replace_all(literal, "_").to_lowercase();

    let mut name = if normalized.is_empty() {
        MARKER.to_string()
    } else if normalized.chars().all(|c| c.is_ascii_digit()) {
        normalized
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| DIGIT_WORDS[d as usize])
            .collect::<Vec<_>>()
            .join("_")
    } else if normalized.starts_with(|c: char| c.is_ascii_digit()) || normalized.starts_with('_') {
        format!("{MARKER}{normalized}")
    } else {
        normalized
    };

    if RESERVED_KEYWORDS.contains(name.as_str()) {
        name = format!("{MARKER}{name}");
    }

    let taken = |candidate: &str| existing.contains(candidate) || pending.contains(candidate);
    if !taken(&name) {
        return name;
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{name}_{counter}");
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
