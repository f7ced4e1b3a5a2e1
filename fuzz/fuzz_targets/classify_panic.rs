#![no_main]
use forgelog_classify::{Severity, classify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Totality check: classify never panics, and Normal never carries fields.
    // Lossy conversion maximizes coverage of inputs that are "almost" text.
    let s = String::from_utf8_lossy(data);
    for line in s.lines() {
        let result = classify(line);
        if result.severity == Severity::Normal {
            assert!(result.file.is_none() && result.line.is_none() && result.message.is_none());
        } else {
            assert!(result.message.is_some());
        }
    }
});
