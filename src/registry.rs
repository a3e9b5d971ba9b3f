//! Persisted registry of literal-to-constant mappings
//!
//! The registry is an insertion-ordered map from literal string values to
//! generated constant identifiers, persisted as one `static const String`
//! declaration per entry inside a Dart class body. Entries are never renamed
//! or deleted once created, which keeps naming stable across repeated runs.

use crate::error::{StringrefError, StringrefResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Matches one persisted entry line. Anything that does not match is
/// skipped silently on load (tolerant parsing).
static ENTRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^  static const String (\w+) = "([^"]+)";"#).unwrap());

/// Insertion-ordered mapping from literal values to constant names.
///
/// Invariants: literal values are unique keys and constant names are unique
/// across the whole registry.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: Vec<(String, String)>,
    by_literal: HashMap<String, usize>,
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constant name registered for a literal, if any
    pub fn get(&self, literal: &str) -> Option<&str> {
        self.by_literal
            .get(literal)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_literal(&self, literal: &str) -> bool {
        self.by_literal.contains_key(literal)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Append an entry. Returns false without modifying anything when the
    /// literal is already registered.
    pub fn insert(&mut self, literal: String, name: String) -> bool {
        if self.by_literal.contains_key(&literal) {
            return false;
        }
        self.by_literal.insert(literal.clone(), self.entries.len());
        self.names.insert(name.clone());
        self.entries.push((literal, name));
        true
    }

    /// Entries in insertion order as (literal, name) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, n)| (l.as_str(), n.as_str()))
    }

    /// All registered constant names
    pub fn names(&self) -> &HashSet<String> {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every entry of `other`, preserving its insertion order.
    /// Already-registered literals are ignored.
    pub fn extend(&mut self, other: Registry) {
        for (literal, name) in other.entries {
            self.insert(literal, name);
        }
    }
}

/// Loads and saves the registry file
pub struct RegistryStore;

impl RegistryStore {
    /// Parse existing entries from the registry file. A missing file yields
    /// an empty registry; malformed lines are skipped, not surfaced.
    pub fn load(path: &Path) -> StringrefResult<Registry> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Registry::new()),
            Err(source) => {
                return Err(StringrefError::Registry {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut registry = Registry::new();
        for line in content.lines() {
            if let Some(caps) = ENTRY_PATTERN.captures(line) {
                registry.insert(caps[2].to_string(), caps[1].to_string());
            }
        }
        debug!(entries = registry.len(), path = %path.display(), "loaded registry");
        Ok(registry)
    }

    /// Write the full registry, bracketed by the enclosing class header and
    /// close line. The file is fully overwritten via write-temp-then-rename
    /// so a crash mid-write cannot truncate it.
    pub fn save(path: &Path, registry: &Registry, namespace: &str) -> StringrefResult<()> {
        let mut out = format!("class {namespace} {{\n");
        for (literal, name) in registry.iter() {
            out.push_str(&format!("  static const String {name} = \"{literal}\";\n"));
        }
        out.push_str("}\n");

        let tmp = path.with_extension("dart.tmp");
        fs::write(&tmp, &out).map_err(|source| StringrefError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| StringrefError::Replace {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(entries = registry.len(), path = %path.display(), "saved registry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn insert_rejects_duplicate_literals() {
        let mut registry = Registry::new();
        assert!(registry.insert("Hello".into(), "hello".into()));
        assert!(!registry.insert("Hello".into(), "hello_2".into()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Hello"), Some("hello"));
    }

    #[test]
    fn load_of_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = RegistryStore::load(&dir.path().join("app_strings.dart")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app_strings.dart");

        let mut registry = Registry::new();
        registry.insert("Welcome back".into(), "welcome_back".into());
        registry.insert("Sign in".into(), "sign_in".into());
        registry.insert("42".into(), "four_two".into());
        RegistryStore::save(&path, &registry, "AppStrings").unwrap();

        let loaded = RegistryStore::load(&path).unwrap();
        let entries: Vec<_> = loaded.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Welcome back", "welcome_back"),
                ("Sign in", "sign_in"),
                ("42", "four_two"),
            ]
        );
    }

    #[test]
    fn saved_file_shape_is_a_dart_class() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app_strings.dart");

        let mut registry = Registry::new();
        registry.insert("OK".into(), "ok".into());
        RegistryStore::save(&path, &registry, "AppStrings").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "class AppStrings {\n  static const String ok = \"OK\";\n}\n"
        );
    }

    #[test]
    fn malformed_lines_are_skipped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app_strings.dart");
        fs::write(
            &path,
            "class AppStrings {\n  static const String ok = \"OK\";\n  garbage line\n  static const int nope = 3;\n}\n",
        )
        .unwrap();

        let registry = RegistryStore::load(&path).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("OK"), Some("ok"));
    }
}
