//! Drivers for the generated fixture suites.
//!
//! Each driver receives a parsed test-data file and renders a report that
//! the harness compares against the expectations recorded after the
//! `// RESULT` marker.

use std::fmt::Write;

use fixtures::{SuffixPattern, coverage};
use harness::{Failure, Fixture};

/// Reports the generated test-function name for every file name in the
/// input, one `name => test_fn` line per file.
pub fn report_test_names(fixture: &Fixture) -> Result<String, Failure> {
    let suffix = fixture.directive("SUFFIX").unwrap_or(".txt");
    let suffix = SuffixPattern::new(suffix).map_err(|error| Failure::new(error.to_string()))?;

    let mut buffer = String::new();
    for line in fixture.input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        tracing::debug!(file = line, "deriving test name");
        match fixtures::naming::test_fn_name(line, &suffix) {
            Some(name) => writeln!(buffer, "{line} => {name}").unwrap(),
            None => writeln!(buffer, "{line} => <no match>").unwrap(),
        }
    }
    Ok(buffer)
}

/// Reports the coverage diff for a simulated directory listing.
///
/// Input lines are `file NAME` for files on disk and `covered NAME` for
/// names claimed by generated tests.
pub fn report_coverage(fixture: &Fixture) -> Result<String, Failure> {
    let mut files = Vec::new();
    let mut covered = Vec::new();

    for line in fixture.input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix("file ") {
            files.push(name.trim());
        } else if let Some(name) = line.strip_prefix("covered ") {
            covered.push(name.trim());
        } else {
            return Err(Failure::new(format!("unrecognized line '{line}'")));
        }
    }

    tracing::debug!(files = files.len(), covered = covered.len(), "diffing coverage");
    let report = coverage::diff(files, covered);

    let mut buffer = String::new();
    writeln!(buffer, "complete: {}", report.is_complete()).unwrap();
    writeln!(buffer, "missing:").unwrap();
    for name in &report.missing {
        writeln!(buffer, "  - {name}").unwrap();
    }
    writeln!(buffer, "stale:").unwrap();
    for name in &report.stale {
        writeln!(buffer, "  - {name}").unwrap();
    }
    Ok(buffer)
}
