use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic class assigned to a single log line.
///
/// Variants are declared in ascending order of importance so the derived
/// [`Ord`] can drive a minimum-severity filter: `Normal < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The line matched no diagnostic pattern.
    Normal,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Whether a line of this severity is worth reporting at all.
    pub fn is_actionable(self) -> bool {
        self != Severity::Normal
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from text (e.g. a CLI flag).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}`, expected one of: normal, info, warning, error")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Severity::Normal),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

/// Structured result of classifying one log line.
///
/// Invariant: `severity == Normal` implies all optional fields are `None`.
/// For any other severity `message` is always populated; `file` and `line`
/// are populated only when the matching rule captures them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub severity: Severity,
    /// Source/object file path or linker name, verbatim as captured.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file: Option<String>,
    /// Decimal line-number text as captured. Deliberately not parsed to an
    /// integer; malformed numbers pass through untouched.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<String>,
    /// Diagnostic payload, retaining the toolchain's own `warning:` /
    /// `error:` / `note:` prefix where the raw line carried one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl Classification {
    /// The fallback result for a line that matched no rule.
    pub fn normal() -> Self {
        Self {
            severity: Severity::Normal,
            file: None,
            line: None,
            message: None,
        }
    }

    pub fn is_normal(&self) -> bool {
        self.severity == Severity::Normal
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::normal()
    }
}
