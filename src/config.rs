//! Scan configuration with TOML overrides
//!
//! All knobs default to the layout of a conventional Flutter project
//! (`lib/` root, `.dart` sources, `app_strings.dart` registry) and can be
//! overridden from a `.stringref.toml` file at the working directory root.

use crate::error::{StringrefError, StringrefResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".stringref.toml";

/// Configuration for both passes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory to traverse
    pub root: PathBuf,

    /// Directory names pruned entirely from traversal (case-sensitive
    /// exact match against a path segment)
    pub ignored_dirs: Vec<String>,

    /// Source file extension, without the leading dot
    pub source_extension: String,

    /// Registry file name, located directly under the root
    pub registry_file: String,

    /// File names the substitution pass must never rewrite
    pub excluded_files: Vec<String>,

    /// Import line injected into modified files
    pub import_line: String,

    /// Class name enclosing the generated constants, also used in
    /// interpolation references
    pub namespace: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("lib"),
            ignored_dirs: [
                "actions",
                "const",
                "controllers",
                "gen",
                "generated",
                "globalbasestate",
                "l10n",
                "models",
                "utils",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            source_extension: "dart".to_string(),
            registry_file: "app_strings.dart".to_string(),
            excluded_files: vec![
                "app_strings.dart".to_string(),
                "firebase_options.dart".to_string(),
            ],
            import_line: "import 'package:com.floridainc.dosparkles/app_strings.dart';"
                .to_string(),
            namespace: "AppStrings".to_string(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from an explicit path, or fall back to
    /// `.stringref.toml` in the working directory, or pure defaults when
    /// neither exists. A malformed file is a hard error.
    pub fn load(explicit: Option<&Path>) -> StringrefResult<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| StringrefError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StringrefError::Config {
            path,
            message: e.to_string(),
        })
    }

    /// Full path of the registry file
    pub fn registry_path(&self) -> PathBuf {
        self.root.join(&self.registry_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_flutter_layout() {
        let config = ScanConfig::default();
        assert_eq!(config.root, PathBuf::from("lib"));
        assert_eq!(config.source_extension, "dart");
        assert_eq!(config.registry_path(), PathBuf::from("lib/app_strings.dart"));
        assert!(config.ignored_dirs.contains(&"l10n".to_string()));
        assert!(config.excluded_files.contains(&"app_strings.dart".to_string()));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
root = "sources"
namespace = "UiStrings"
"#,
        )
        .unwrap();

        let config = ScanConfig::load(Some(&path)).unwrap();
        assert_eq!(config.root, PathBuf::from("sources"));
        assert_eq!(config.namespace, "UiStrings");
        // untouched keys keep their defaults
        assert_eq!(config.registry_file, "app_strings.dart");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "root = [not toml").unwrap();

        let err = ScanConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, StringrefError::Config { .. }));
    }
}
