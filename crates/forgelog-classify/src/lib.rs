//! # forgelog-classify
//!
//! Line classifier for toolchain build output (compiler, preprocessor,
//! linker, resource-compiler messages) with structured field extraction.
//!
//! ## Overview
//!
//! This crate turns a raw build-log line into a [`Classification`]: a
//! severity (`Normal`, `Info`, `Warning`, `Error`) plus the originating file
//! path, line-number text, and diagnostic message where the line's shape
//! carries them. It encodes, through an ordered rule table, how a dozen
//! different toolchains (GCC-family compilers, `windres`, several linker
//! front ends) format their diagnostics.
//!
//! The classifier is intended as the core of a post-processing filter: feed
//! it a captured log line by line, keep only the actionable results, and
//! render each with a clickable source location.
//!
//! ## Design
//!
//! - An ordered table of `(pattern, severity, capture-group indices)` rules,
//!   evaluated first-match-wins by one generic loop. Precedence lives in the
//!   table order: specific shapes (`file:line:col: warning: ...`) come before
//!   keyword-anywhere catch-alls, which would otherwise steal the match and
//!   lose the file/line fields.
//! - Catch-all rules cap their leading wildcard at 1024 characters, so a
//!   multi-thousand-character compiler invocation line stays `Normal` and
//!   never costs pathological matching time.
//! - Classification is total: a line matching no rule degrades to `Normal`
//!   rather than erroring. A best-effort log filter must never abort a scan
//!   because one line is unusual.
//!
//! ## Examples
//!
//! ```
//! use forgelog_classify::{classify, Severity};
//!
//! let result = classify("/src/main.c:42:7: warning: unused variable 'x'");
//! assert_eq!(result.severity, Severity::Warning);
//! assert_eq!(result.file.as_deref(), Some("/src/main.c"));
//! assert_eq!(result.line.as_deref(), Some("42"));
//! assert_eq!(result.message.as_deref(), Some("warning: unused variable 'x'"));
//! ```
//!
//! A reusable handle, for callers that classify many lines:
//!
//! ```
//! use forgelog_classify::{Classifier, Severity};
//!
//! let classifier = Classifier::new();
//! let kept: Vec<_> = ["cc -O2 -c main.c", "/usr/bin/ld: cannot find -lmagic"]
//!     .into_iter()
//!     .map(|line| classifier.classify(line))
//!     .filter(|r| r.severity.is_actionable())
//!     .collect();
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].severity, Severity::Error);
//! ```

/// Severity and classification record types.
pub mod ir;

/// The generic first-match-wins evaluation loop.
pub mod classifier;

mod rules;


pub use classifier::{Classifier, classify};
pub use ir::{Classification, ParseSeverityError, Severity};

/// Schema version for the serialized classification record.
///
/// Follows semantic versioning: breaking changes to the record shape bump
/// MAJOR, new optional fields bump MINOR, behavior fixes bump PATCH.
pub const SCHEMA_VERSION: &str = "1.0.0";
