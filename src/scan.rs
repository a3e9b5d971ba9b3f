//! Directory traversal and the extract/substitute pass drivers
//!
//! Both passes walk the configured root sequentially, pruning ignored
//! directory names and filtering on the source extension. A file that cannot
//! be read or written is recorded and skipped so one bad file does not abort
//! the whole run; the pass outcome carries the failure list for reporting
//! and exit-status purposes.

use crate::config::ScanConfig;
use crate::error::{StringrefError, StringrefResult};
use crate::extract::extract;
use crate::naming::synthesize;
use crate::registry::{Registry, RegistryStore};
use crate::substitute::{ensure_import, substitute};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file skipped during a pass, with the error that caused the skip
#[derive(Debug)]
pub struct PassFailure {
    pub path: PathBuf,
    pub error: StringrefError,
}

/// Result of one extraction pass
#[derive(Debug)]
pub struct ExtractOutcome {
    /// Newly created (literal, constant name) pairs, in discovery order
    pub new_entries: Vec<(String, String)>,
    /// Total registry size after the pass
    pub total_entries: usize,
    pub files_scanned: usize,
    pub failures: Vec<PassFailure>,
}

/// Result of one substitution pass
#[derive(Debug)]
pub struct SubstituteOutcome {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub failures: Vec<PassFailure>,
}

fn require_root(config: &ScanConfig) -> StringrefResult<()> {
    if config.root.is_dir() {
        Ok(())
    } else {
        Err(StringrefError::Config {
            path: config.root.clone(),
            message: "root directory does not exist".to_string(),
        })
    }
}

fn is_pruned(entry: &DirEntry, ignored_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| ignored_dirs.iter().any(|d| d == name))
            .unwrap_or(false)
}

fn has_source_extension(entry: &DirEntry, extension: &str) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e == extension)
            .unwrap_or(false)
}

/// Collect every source file under the root, honoring the directory prune
/// list. Unreadable directory entries are reported through `failures`.
fn source_files(config: &ScanConfig, failures: &mut Vec<PassFailure>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(&config.root)
        .into_iter()
        .filter_entry(|e| !is_pruned(e, &config.ignored_dirs));

    for entry in walker {
        match entry {
            Ok(entry) if has_source_extension(&entry, &config.source_extension) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| config.root.clone());
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                failures.push(PassFailure {
                    path: path.clone(),
                    error: StringrefError::Read {
                        path,
                        source: e.into(),
                    },
                });
            }
        }
    }
    files
}

/// Extraction pass: scan every source file, synthesize names for unseen
/// literals, and write the enlarged registry back.
pub fn run_extract_pass(config: &ScanConfig) -> StringrefResult<ExtractOutcome> {
    require_root(config)?;
    let registry_path = config.registry_path();
    let existing = RegistryStore::load(&registry_path)?;
    let mut pending = Registry::new();
    let mut failures = Vec::new();
    let mut files_scanned = 0;

    for path in source_files(config, &mut failures) {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "skipping unreadable file");
                failures.push(PassFailure {
                    path: path.clone(),
                    error: StringrefError::Read { path, source },
                });
                continue;
            }
        };
        files_scanned += 1;

        for literal in extract(&content) {
            if existing.contains_literal(&literal) || pending.contains_literal(&literal) {
                continue;
            }
            let name = synthesize(&literal, existing.names(), pending.names());
            pending.insert(literal, name);
        }
        debug!(path = %path.display(), pending = pending.len(), "extracted");
    }

    let new_entries: Vec<(String, String)> = pending
        .iter()
        .map(|(l, n)| (l.to_string(), n.to_string()))
        .collect();

    // existing entries keep their position, new ones append in first-seen order
    let mut combined = existing;
    combined.extend(pending);
    RegistryStore::save(&registry_path, &combined, &config.namespace)?;

    Ok(ExtractOutcome {
        new_entries,
        total_entries: combined.len(),
        files_scanned,
        failures,
    })
}

/// Substitution pass: rewrite every source file against the frozen registry,
/// injecting the constants import where a replacement happened.
pub fn run_substitute_pass(config: &ScanConfig) -> StringrefResult<SubstituteOutcome> {
    require_root(config)?;
    let registry = RegistryStore::load(&config.registry_path())?;
    let mut failures = Vec::new();
    let mut files_scanned = 0;
    let mut files_rewritten = 0;

    for path in source_files(config, &mut failures) {
        let excluded = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| config.excluded_files.iter().any(|f| f == n))
            .unwrap_or(false);
        if excluded {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "skipping unreadable file");
                failures.push(PassFailure {
                    path: path.clone(),
                    error: StringrefError::Read { path, source },
                });
                continue;
            }
        };
        files_scanned += 1;

        let (rewritten, changed) = substitute(&content, &registry, &config.namespace);
        let updated = ensure_import(rewritten, &config.import_line, changed);

        // unchanged documents are skipped to avoid timestamp churn
        if updated == content {
            continue;
        }
        match fs::write(&path, &updated) {
            Ok(()) => {
                debug!(path = %path.display(), "rewrote file");
                files_rewritten += 1;
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "skipping unwritable file");
                failures.push(PassFailure {
                    path: path.clone(),
                    error: StringrefError::Write { path, source },
                });
            }
        }
    }

    Ok(SubstituteOutcome {
        files_scanned,
        files_rewritten,
        failures,
    })
}
