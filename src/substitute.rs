//! Literal substitution and import injection
//!
//! Rewrites a source document against a frozen registry: every quoted span
//! whose inner text exactly matches a registry literal is replaced with an
//! interpolation reference to the constant, preserving the original quote
//! characters. A second pass catches `msg:` named arguments the general
//! quote scan mispaired (an apostrophe earlier in the document shifts the
//! pairing), normalizing them to canonical `msg: '...'` spacing.
//!
//! Matching is exact-string and case-sensitive. A document containing no
//! registry literal comes back byte-identical with `changed = false`, which
//! callers must use to skip rewriting the file.

use crate::registry::Registry;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Any single- or double-quoted span, possibly spanning multiple lines
static QUOTED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)"(.*?)"|'(.*?)'"#).unwrap());

/// The named status-message argument shape
static MSG_ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)msg\s*:\s*"(.*?)"|msg\s*:\s*'(.*?)'"#).unwrap());

fn quoted_groups<'a>(caps: &'a Captures) -> Option<(char, &'a str)> {
    if let Some(m) = caps.get(1) {
        Some(('"', m.as_str()))
    } else {
        caps.get(2).map(|m| ('\'', m.as_str()))
    }
}

/// Replace every registry literal in `document` with an interpolation
/// reference `${Namespace.constant}`. Returns the rewritten document and
/// whether any replacement occurred.
pub fn substitute(document: &str, registry: &Registry, namespace: &str) -> (String, bool) {
    let mut changed = false;

    let quoted_pass = QUOTED_SPAN.replace_all(document, |caps: &Captures| {
        if let Some((quote, inner)) = quoted_groups(caps) {
            if let Some(name) = registry.get(inner) {
                changed = true;
                return format!("{quote}${{{namespace}.{name}}}{quote}");
            }
        }
        caps[0].to_string()
    });

    let msg_pass = MSG_ARGUMENT.replace_all(&quoted_pass, |caps: &Captures| {
        if let Some((quote, inner)) = quoted_groups(caps) {
            if let Some(name) = registry.get(inner) {
                changed = true;
                return format!("msg: {quote}${{{namespace}.{name}}}{quote}");
            }
        }
        caps[0].to_string()
    });

    (msg_pass.into_owned(), changed)
}

/// Prepend the constants import line if the document was modified and the
/// line is not already present verbatim.
pub fn ensure_import(document: String, import_line: &str, changed: bool) -> String {
    if changed && !document.contains(import_line) {
        format!("{import_line}\n{document}")
    } else {
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const IMPORT: &str = "import 'package:example/app_strings.dart';";

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert("Hello".into(), "greeting".into());
        registry.insert("Saved".into(), "saved".into());
        registry
    }

    #[test]
    fn replaces_literal_preserving_quote_style() {
        let (out, changed) = substitute(r#"Text("Hello")"#, &registry(), "AppStrings");
        assert!(changed);
        assert_eq!(out, r#"Text("${AppStrings.greeting}")"#);

        let (out, changed) = substitute("Text('Hello')", &registry(), "AppStrings");
        assert!(changed);
        assert_eq!(out, "Text('${AppStrings.greeting}')");
    }

    #[test]
    fn unknown_literals_come_back_byte_identical() {
        let doc = "Text('Goodbye')\nvar x = \"nothing here\";";
        let (out, changed) = substitute(doc, &registry(), "AppStrings");
        assert!(!changed);
        assert_eq!(out, doc);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let (out, changed) = substitute("Text('hello')", &registry(), "AppStrings");
        assert!(!changed);
        assert_eq!(out, "Text('hello')");

        let (_, changed) = substitute("Text('Hello there')", &registry(), "AppStrings");
        assert!(!changed);
    }

    #[test]
    fn second_run_over_substituted_document_is_a_noop() {
        let (first, changed) = substitute("Text('Hello')", &registry(), "AppStrings");
        assert!(changed);

        let (second, changed) = substitute(&first, &registry(), "AppStrings");
        assert!(!changed);
        assert_eq!(second, first);
    }

    #[test]
    fn msg_pass_recovers_from_mispaired_quotes() {
        // the apostrophe shifts the general quote pairing, so only the
        // second pass can see the msg argument
        let doc = "// user's settings\nshowColoredSnakeBar(context, msg:'Saved');";
        let (out, changed) = substitute(doc, &registry(), "AppStrings");
        assert!(changed);
        assert!(out.contains("msg: '${AppStrings.saved}'"));
    }

    #[test]
    fn import_injected_only_when_changed_and_absent() {
        // no substitution, no import
        let untouched = ensure_import("Text('Goodbye')".to_string(), IMPORT, false);
        assert_eq!(untouched, "Text('Goodbye')");

        // substitution without an existing import gets exactly one copy
        let injected = ensure_import("Text('${AppStrings.greeting}')".to_string(), IMPORT, true);
        assert_eq!(
            injected,
            format!("{IMPORT}\nText('${{AppStrings.greeting}}')")
        );

        // already imported, nothing added
        let already = ensure_import(injected.clone(), IMPORT, true);
        assert_eq!(already, injected);
    }
}
