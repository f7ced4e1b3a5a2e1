use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::Severity;

/// Character class for the file-path portion of a diagnostic line.
///
/// Deliberately loose: GCC-family tools emit paths containing spaces, drive
/// colons, `%`/`$` from generated sources, and Windows backslashes. The class
/// excludes `<`, `>` and `[`, `]`, so pseudo-locations like `<command-line>`
/// and ninja's `[4/265]` progress prefixes fall through to the catch-alls.
const FILE_PATH: &str = r"[{}()[:blank:]#%$~[:alnum:]!&_:+/\\.-]+";

/// Longest prefix a catch-all rule may skip before its keyword.
///
/// Bounds worst-case matching cost on multi-thousand-character compiler
/// invocation lines, which must classify as `Normal` rather than having a
/// catch-all fish a keyword out of some flag soup deep in the line.
const CATCH_ALL_CAP: usize = 1024;

/// One entry of the classification table.
///
/// Group index 0 means "this field is not produced by this rule"; group 0 of
/// a regex match is the whole line, which is never a useful field value.
pub(crate) struct Rule {
    /// Label for identification and debugging only; never surfaces in output.
    pub name: &'static str,
    pub severity: Severity,
    pub file_group: usize,
    pub line_group: usize,
    pub message_group: usize,
    pub regex: Regex,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("pattern", &self.regex.as_str())
            .finish_non_exhaustive()
    }
}

fn rule(
    name: &'static str,
    severity: Severity,
    file_group: usize,
    line_group: usize,
    message_group: usize,
    pattern: &str,
) -> Rule {
    Rule {
        name,
        severity,
        file_group,
        line_group,
        message_group,
        regex: Regex::new(pattern).unwrap(),
    }
}

/// The ordered rule table. Order is significant and encodes precedence:
/// specific patterns (file:line:col with an explicit keyword) come before
/// the keyword-anywhere catch-alls, which would otherwise steal the match
/// and lose the file/line fields. Evaluation is first-match-wins.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use Severity::{Error, Info, Warning};

    let f = FILE_PATH;
    let cap = CATCH_ALL_CAP;

    vec![
        rule(
            "Fatal error",
            Error,
            0,
            0,
            1,
            r"^FATAL:[[:blank:]]*(.*)$",
        ),
        rule(
            "'In function...' info",
            Info,
            1,
            0,
            2,
            &format!(
                r"^({f}):[[:blank:]]+([Ii]n (?:[Cc]lass|[Cc]onstructor|[Dd]estructor|[Ff]unction|[Mm]ember [Ff]unction).*)$"
            ),
        ),
        rule(
            "'Skipping N instantiation contexts' info (2)",
            Info,
            1,
            2,
            3,
            &format!(
                r"^({f}):([0-9]+):[0-9]+:[[:blank:]]+(\[[[:blank:]]*[Ss]kipping [0-9]+ instantiation contexts[[:blank:]]*\])$"
            ),
        ),
        rule(
            "'Skipping N instantiation contexts' info",
            Info,
            1,
            2,
            3,
            &format!(
                r"^({f}):([0-9]+):[[:blank:]]+(\[[[:blank:]]*[Ss]kipping [0-9]+ instantiation contexts[[:blank:]]*\])$"
            ),
        ),
        rule(
            "'In instantiation' warning",
            Warning,
            1,
            0,
            2,
            &format!(r"^({f}):[[:blank:]]+([Ii]n [Ii]nstantiation.*)$"),
        ),
        rule(
            "'Required from' warning",
            Warning,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[0-9]+:[[:blank:]]+([Rr]equired from.*)$"),
        ),
        rule(
            "'Instantiated from' warning",
            Warning,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[0-9]+:[[:blank:]]+([Ii]nstantiated from.*)$"),
        ),
        rule(
            "'Required from here' info",
            Info,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[[:blank:]]+([Rr]equired from.*)$"),
        ),
        rule(
            "'Instantiated from here' info",
            Info,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[[:blank:]]+([Ii]nstantiated from.*)$"),
        ),
        rule(
            "Resource compiler error",
            Error,
            1,
            2,
            3,
            &format!(r"^windres(?:\.exe)?:[[:blank:]]({f}):([0-9]+):[[:blank:]](.*)$"),
        ),
        rule(
            "Resource compiler error (2)",
            Error,
            0,
            0,
            1,
            r"^windres(?:\.exe)?:[[:blank:]](.*)$",
        ),
        rule(
            "Preprocessor warning",
            Warning,
            1,
            2,
            3,
            // The column is matched but not captured.
            &format!(r"^({f}):([0-9]+):[0-9]+:[[:blank:]]([Ww]arning:[[:blank:]].*)$"),
        ),
        rule(
            "Preprocessor note",
            Info,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[0-9]+:[[:blank:]]([Nn]ote:[[:blank:]].*)$"),
        ),
        rule(
            "General note",
            Info,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?([Nn]ote:[[:blank:]].*)$"),
        ),
        rule(
            "Compiler error (2)",
            Error,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[0-9]+:[[:blank:]](.*)$"),
        ),
        rule(
            "Compiler warning",
            Warning,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[[:blank:]]([Ww]arning:[[:blank:]].*)$"),
        ),
        rule(
            "Linker error (undefined reference)",
            Error,
            2,
            3,
            4,
            // object.o:source.cpp:123: undefined reference to `sym'
            &format!(r"^({f}):({f}):([0-9]+):[[:blank:]]+([Uu]ndefined reference.*)$"),
        ),
        rule(
            "Linker error (undefined reference) (2)",
            Error,
            1,
            0,
            2,
            &format!(r"^({f}):[[:blank:]]+([Uu]ndefined reference.*)$"),
        ),
        rule(
            "Compiler error",
            Error,
            1,
            2,
            3,
            &format!(r"^({f}):([0-9]+):[[:blank:]](.*)$"),
        ),
        rule(
            "General error",
            Error,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?([Ee]rror:[[:blank:]].*)$"),
        ),
        rule(
            "General warning",
            Warning,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?([Ww]arning:[[:blank:]].*)$"),
        ),
        rule(
            "Auto-import info",
            Info,
            0,
            0,
            1,
            r"^([Ii]nfo:[[:blank:]].*\(auto-import\))$",
        ),
        rule(
            "Linker warning (.text section)",
            Warning,
            1,
            0,
            2,
            &format!(r"^({f})\(\.text\+[0-9A-Za-zxX]+\):[[:blank:]]([Ww]arning:.*)$"),
        ),
        rule(
            "Linker error (.text section)",
            Error,
            1,
            0,
            2,
            &format!(r"^({f})\(\.text\+[0-9A-Za-zxX]+\):(.*)$"),
        ),
        rule(
            "Linker error (lib not found)",
            Error,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?ld(?:\.exe)?:[[:blank:]]+(cannot find .*)$"),
        ),
        rule(
            "Linker error (cannot open output file)",
            Error,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?ld(?:\.exe)?:[[:blank:]]+(cannot open output file .*)$"),
        ),
        rule(
            "Linker error (unrecognized option)",
            Error,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?ld(?:\.exe)?:[[:blank:]]+(unrecognized option .*)$"),
        ),
        rule(
            "Compiler error (unrecognized option)",
            Error,
            0,
            0,
            1,
            &format!(r"^.{{0,{cap}}}?(unrecognized .*option.*)$"),
        ),
        rule(
            "No such file or directory",
            Error,
            2,
            0,
            3,
            &format!(r"^(.{{0,{cap}}}?):[[:blank:]]({f}):[[:blank:]](No such file or directory.*)$"),
        ),
        rule(
            "Linker warning (different size sections)",
            Warning,
            1,
            0,
            2,
            &format!(r"^({f}):[[:blank:]]+(duplicate section.*has different size.*)$"),
        ),
    ]
});

/// The compiled, ordered rule table.
pub(crate) fn table() -> &'static [Rule] {
    &RULES
}
