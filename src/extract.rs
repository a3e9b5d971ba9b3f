//! Pattern-based literal extraction from source documents
//!
//! Candidate literals are recognized by a fixed, ordered set of regex
//! matchers, each anchored to one syntactic context: `Text(...)` display
//! calls, `hintText:`/`labelText:` attributes, validator `return` statements,
//! `showAlertDialog` calls (4-argument and 2-argument shapes), and
//! `showColoredSnakeBar`/generic `msg:` status messages.
//!
//! Comments are stripped before matching so commented-out code cannot
//! produce candidates. The stripping is regex-based and intentionally
//! imprecise: nested block comments and comment markers embedded inside
//! string literals are not handled correctly. Likewise, literals containing
//! unescaped quote characters of both styles are not reliably extractable.
//! These are documented limitations of the pattern-based approach, not
//! conditions the extractor raises on.
//!
//! Literals containing the `$` interpolation sigil are never extracted, in
//! any context, since interpolated strings are not constant.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Single-line, block, and triple-quoted comment spans
static COMMENT_SPANS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?ms)//.*?$|/\*.*?\*/|'''.*?'''|""".*?""""#).unwrap());

/// Context-specific matchers, applied in this fixed priority order.
/// Every capture group of every match is a candidate literal.
static PATTERN_GROUPS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "display-text",
            Regex::new(r#"Text\s*\(\s*['"]([^'"$]+)['"]\s*(?:,|\))"#).unwrap(),
        ),
        (
            "hint-attribute",
            Regex::new(r#"hintText\s*:\s*['"]([^'"$]+)['"]"#).unwrap(),
        ),
        (
            "label-attribute",
            Regex::new(r#"labelText\s*:\s*['"]([^'"$]+)['"]"#).unwrap(),
        ),
        (
            "validator-return",
            Regex::new(r#"return\s*['"]([^'"$]+)['"]"#).unwrap(),
        ),
        (
            "confirmation-dialog",
            Regex::new(
                r#"showAlertDialog\s*\(\s*['"]([^'"$]+)['"],\s*['"]([^'"$]+)['"],.*strCancel\s*:\s*['"]([^'"$]+)['"],\s*strSuccess\s*:\s*['"]([^'"]+)['"]"#,
            )
            .unwrap(),
        ),
        (
            "confirmation-dialog-short",
            Regex::new(r#"showAlertDialog\s*\(\s*['"]([^'"$]+)['"],\s*['"]([^'"$]+)['"]"#)
                .unwrap(),
        ),
        (
            "status-message",
            Regex::new(r#"showColoredSnakeBar\s*\(.*msg\s*:\s*['"]([^'"]+)['"]"#).unwrap(),
        ),
        (
            "status-message-generic",
            Regex::new(r#"\bmsg\s*:\s*['"]([^'"]+)['"]"#).unwrap(),
        ),
    ]
});

/// Remove comment spans so their contents cannot match any pattern
fn strip_comments(document: &str) -> String {
    COMMENT_SPANS.replace_all(document, "").into_owned()
}

/// Extract every candidate literal from `document`.
///
/// Returns candidates in first-occurrence order within each pattern group,
/// with the groups concatenated in priority order. Duplicates are allowed;
/// overlapping matchers (a `showColoredSnakeBar` message is also a generic
/// `msg:` argument) may yield the same literal twice, and the caller
/// deduplicates by value against the registry and the current run.
pub fn extract(document: &str) -> Vec<String> {
    let stripped = strip_comments(document);
    let mut candidates = Vec::new();

    for (context, pattern) in PATTERN_GROUPS.iter() {
        for caps in pattern.captures_iter(&stripped) {
            for group in caps.iter().skip(1).flatten() {
                let literal = group.as_str();
                // interpolated strings are not constant
                if literal.contains('$') {
                    continue;
                }
                trace!(context, literal, "candidate literal");
                candidates.push(literal.to_string());
            }
        }
    }

    candidates
}
