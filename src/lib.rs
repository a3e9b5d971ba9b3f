//! # stringref
//!
//! A two-pass refactoring tool that pulls hard-coded user-facing string
//! literals out of a Dart/Flutter source tree and into a generated constants
//! registry, then rewrites the tree to reference those constants.
//!
//! The two passes are run as separate invocations and share one persisted
//! registry file:
//!
//! - `stringref extract <root>` scans every source file for literals in
//!   recognized syntactic contexts, synthesizes a unique constant name for
//!   each unseen literal, and writes the enlarged registry back.
//! - `stringref substitute <root>` rewrites every source file against the
//!   now-complete registry, replacing literal occurrences with interpolation
//!   references and injecting the constants import where needed.
//!
//! Extraction is deliberately pattern-based (regex over comment-stripped
//! text) rather than a full Dart parser; the matchers are best-effort and
//! their known limitations are documented on the [`extract`] module.
//!
//! ## Module Overview
//!
//! - [`cli`] - Command-line interface and pass dispatch
//! - [`config`] - Scan configuration with TOML overrides
//! - [`extract`] - Pattern-based literal extraction
//! - [`naming`] - Constant name synthesis and collision resolution
//! - [`registry`] - Persisted literal-to-constant mapping
//! - [`scan`] - Directory traversal and pass drivers
//! - [`substitute`] - Literal-to-reference rewriting

/// Command-line interface and argument parsing
pub mod cli;
/// Scan configuration, defaults, and TOML overrides
pub mod config;
/// Error types and handling utilities
pub mod error;
/// Pattern-based literal extraction from source documents
pub mod extract;
/// Constant identifier synthesis
pub mod naming;
/// Persisted registry of literal-to-constant mappings
pub mod registry;
/// Directory traversal and the extract/substitute pass drivers
pub mod scan;
/// Literal substitution and import injection
pub mod substitute;

/// Re-export main error types for convenient error handling
pub use error::{StringrefError, StringrefResult};
