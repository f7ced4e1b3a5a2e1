use regex::Captures;

use crate::ir::Classification;
use crate::rules::{self, Rule};

/// A handle over the static rule table.
///
/// The table is compiled once per process and shared; `Classifier` is a
/// zero-cost value that callers can hold, clone, and use from any thread.
/// Classification is a pure function of the input line, so there is no
/// synchronization anywhere.
#[derive(Clone, Copy)]
pub struct Classifier {
    rules: &'static [Rule],
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            rules: rules::table(),
        }
    }

    /// Classify one line of build output.
    ///
    /// Rules are tried strictly in table order and evaluation stops at the
    /// first match. A line matching no rule yields [`Classification::normal`];
    /// this function never fails.
    pub fn classify(&self, line: &str) -> Classification {
        for rule in self.rules {
            if let Some(caps) = rule.regex.captures(line) {
                return Classification {
                    severity: rule.severity,
                    file: capture(&caps, rule.file_group),
                    line: capture(&caps, rule.line_group),
                    message: capture(&caps, rule.message_group),
                };
            }
        }
        Classification::normal()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one line of build output. Convenience wrapper over
/// [`Classifier::classify`] for one-off calls.
pub fn classify(line: &str) -> Classification {
    Classifier::new().classify(line)
}

/// Group index 0 means "field not produced by this rule": group 0 of a regex
/// match is the whole line, which is never a meaningful field value.
fn capture(caps: &Captures<'_>, group: usize) -> Option<String> {
    if group == 0 {
        return None;
    }
    caps.get(group).map(|m| m.as_str().to_string())
}
