//! Runs a single test-data file against an injected driver.
//!
//! A test-data file carries everything one test case needs: optional
//! `// KEY: value` directive lines, an input body, and the expected output
//! recorded after a `// RESULT` marker. [`run_test`] loads the file, hands
//! the parsed [`Fixture`] to the driver, and fails the test with a line diff
//! when the driver's report does not match the recorded expectations.
//!
//! The driver itself is supplied by the caller; the harness knows nothing
//! about its semantics.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

pub mod trace;

mod diff;

/// Marker line separating a fixture's input from its expected output.
pub const RESULT_MARKER: &str = "// RESULT";

/// A parsed test-data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub directives: Vec<(SmolStr, SmolStr)>,
    pub input: String,
    pub expected: Option<String>,
}

impl Fixture {
    /// Parses fixture text.
    ///
    /// Directives are leading `// KEY: value` lines with an upper-case key;
    /// the first line that is not a directive starts the input body.
    pub fn parse(text: &str) -> Fixture {
        let mut directives = Vec::new();
        let mut lines = text.lines().peekable();

        while let Some(line) = lines.peek() {
            let Some((key, value)) = parse_directive(line) else { break };
            directives.push((key, value));
            lines.next();
        }

        let mut input = String::new();
        let mut expected: Option<String> = None;

        for line in lines {
            if let Some(expected) = expected.as_mut() {
                expected.push_str(line);
                expected.push('\n');
            } else if line == RESULT_MARKER {
                expected = Some(String::new());
            } else {
                input.push_str(line);
                input.push('\n');
            }
        }

        Fixture { directives, input, expected }
    }

    pub fn load(path: &Path) -> Result<Fixture, HarnessError> {
        let text = fs::read_to_string(path)
            .map_err(|source| HarnessError::Read { path: path.to_path_buf(), source })?;
        Ok(Fixture::parse(&text))
    }

    /// Returns the value of a directive, if present.
    pub fn directive(&self, key: &str) -> Option<&str> {
        self.directives
            .iter()
            .find(|(candidate, _)| candidate.as_str() == key)
            .map(|(_, value)| value.as_str())
    }
}

fn parse_directive(line: &str) -> Option<(SmolStr, SmolStr)> {
    let rest = line.strip_prefix("// ")?;
    let (key, value) = rest.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|ch| ch.is_ascii_uppercase() || ch == '_') {
        return None;
    }
    Some((SmolStr::new(key), SmolStr::new(value.trim())))
}

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Raised by a driver that cannot produce a report for a fixture.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Failure {
        Failure { message: message.into() }
    }
}

/// Loads the test-data file at `path`, runs `do_test` on it, and asserts the
/// report matches the expectations recorded after the `// RESULT` marker.
///
/// Tracing emitted by the driver is captured and shown on failure; the
/// capture level comes from `TRACE_LEVEL`. With `UPDATE_EXPECTED=1` a
/// mismatch rewrites the fixture's expected block instead of failing.
pub fn run_test<F>(path: &Path, do_test: F)
where
    F: FnOnce(&Fixture) -> Result<String, Failure>,
{
    let fixture = match Fixture::load(path) {
        Ok(fixture) => fixture,
        Err(error) => panic!("{error}"),
    };

    let level = trace::level_from_env();
    let (outcome, captured) = trace::with_capture(level, || do_test(&fixture));

    let report = match outcome {
        Ok(report) => report,
        Err(failure) => fail(path, &captured, &format!("driver failed: {failure}")),
    };

    let report = report.trim_end();
    let expected = fixture.expected.as_deref().map(str::trim_end);

    match expected {
        Some(expected) if expected == report => {}
        _ if update_expected() => {
            if let Err(error) = fs::write(path, render_with_expected(&fixture, report)) {
                fail(path, &captured, &format!("failed to update expectations: {error}"));
            }
        }
        Some(expected) => {
            let diff = diff::render(expected, report);
            fail(
                path,
                &captured,
                &format!("report does not match the recorded expectations\n\n{diff}"),
            );
        }
        None => {
            fail(
                path,
                &captured,
                &format!(
                    "fixture has no '{RESULT_MARKER}' block; \
                     run with UPDATE_EXPECTED=1 to record one\n\nreport:\n{report}"
                ),
            );
        }
    }
}

fn fail(path: &Path, captured: &str, message: &str) -> ! {
    if captured.is_empty() {
        panic!("{}: {message}", path.display());
    }
    panic!("{}: {message}\n\ntrace:\n{captured}", path.display());
}

fn update_expected() -> bool {
    std::env::var_os("UPDATE_EXPECTED").is_some_and(|value| value == "1")
}

/// Re-renders a fixture with `report` as its expected block.
fn render_with_expected(fixture: &Fixture, report: &str) -> String {
    let mut buffer = String::new();
    for (key, value) in &fixture.directives {
        writeln!(buffer, "// {key}: {value}").unwrap();
    }
    buffer.push_str(&fixture.input);
    writeln!(buffer, "{RESULT_MARKER}").unwrap();
    buffer.push_str(report.trim_end());
    buffer.push('\n');
    buffer
}
