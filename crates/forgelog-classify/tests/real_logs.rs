use forgelog_classify::{Classification, Classifier, Severity};

// A condensed but shape-faithful GCC/binutils build log: echoed commands,
// compile diagnostics, template backtrace, windres, and link failures.
#[test]
fn classifies_a_realistic_build_log() {
    let log = include_str!("fixtures/gcc_build.log");
    let classifier = Classifier::new();

    let results: Vec<Classification> = log.lines().map(|l| classifier.classify(l)).collect();
    assert_eq!(results.len(), 15);

    let count = |sev: Severity| results.iter().filter(|r| r.severity == sev).count();
    assert_eq!(count(Severity::Normal), 2, "echoed command and make chatter");
    assert_eq!(count(Severity::Info), 3);
    assert_eq!(count(Severity::Warning), 4);
    assert_eq!(count(Severity::Error), 6);

    // The two non-diagnostic lines are the ninja-style command echo and the
    // make directory banner, in that order.
    assert!(results[0].is_normal());
    assert!(results[1].is_normal());

    // Spot-check the extracted fields on a few load-bearing lines.
    assert_eq!(results[3].file.as_deref(), Some("/src/util.c"));
    assert_eq!(results[3].line.as_deref(), Some("42"));
    assert_eq!(
        results[3].message.as_deref(),
        Some("warning: unused variable 'tmp' [-Wunused-variable]")
    );

    assert_eq!(results[5].severity, Severity::Error);
    assert_eq!(results[5].line.as_deref(), Some("88"));

    assert_eq!(results[12].severity, Severity::Error);
    assert_eq!(results[12].file.as_deref(), Some("/src/main.c"));
    assert_eq!(results[12].line.as_deref(), Some("120"));

    assert_eq!(results[14].severity, Severity::Info);
    assert!(results[14].message.as_deref().unwrap().ends_with("(auto-import)"));
}

// Dropping Normal lines is the caller's job; verify the usual filtering
// pipeline keeps exactly the actionable lines in original order.
#[test]
fn filtering_keeps_actionable_lines_in_order() {
    let log = include_str!("fixtures/gcc_build.log");
    let classifier = Classifier::new();

    let kept: Vec<Severity> = log
        .lines()
        .map(|l| classifier.classify(l).severity)
        .filter(|s| s.is_actionable())
        .collect();

    use Severity::{Error, Info, Warning};
    assert_eq!(
        kept,
        vec![
            Info,    // In function context
            Warning, // unused variable
            Info,    // note: declared here
            Error,   // undeclared identifier
            Warning, // In instantiation
            Warning, // required from
            Error,   // windres
            Warning, // cc1 option warning
            Error,   // FATAL
            Error,   // cannot find -lmagic
            Error,   // undefined reference
            Error,   // collect2
            Info,    // auto-import
        ]
    );
}
