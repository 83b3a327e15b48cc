//! Renders generated test-suite files from fixture directories.
//!
//! For every test-data file in a suite's fixture directory, the generated
//! file contains one `#[test]` function dispatching to the suite's driver
//! through `harness::run_test`, plus a trailing completeness test that
//! re-scans the directory and fails if any file is unaccounted for. The
//! emitted `COVERED_FILES` constant is the statically known set that the
//! completeness check compares against.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fixtures::{Manifest, ManifestError, SuffixPattern};

/// Everything needed to render one generated suite.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Suite name; must be a valid snake_case identifier. The generated
    /// tests resolve their fixture directory as `fixtures/<suite_name>`
    /// relative to the consuming crate's manifest directory.
    pub suite_name: String,
    /// Directory scanned at generation time, relative to the generator's
    /// working directory.
    pub fixtures_dir: PathBuf,
    /// File-name suffix that marks a test-data file, e.g. `.txt`.
    pub suffix: String,
    /// Path expression for the driver the generated tests dispatch to.
    pub runner_fn: String,
    /// Name of the tool that owns regeneration, cited in the header.
    pub generator: String,
    /// Where the generated file is written.
    pub output: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("suite name '{0}' is not a valid identifier")]
    SuiteName(String),
    #[error(transparent)]
    Discover(#[from] fixtures::DiscoverError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Renders the generated test file for a suite.
///
/// Output is deterministic for an unchanged fixture set: entries are sorted
/// by file name and the header carries the fixture digest.
pub fn generate(config: &SuiteConfig) -> Result<String, GenerateError> {
    if !is_snake_ident(&config.suite_name) {
        return Err(GenerateError::SuiteName(config.suite_name.clone()));
    }

    let suffix = SuffixPattern::new(&config.suffix)?;
    let manifest = Manifest::scan(&config.fixtures_dir, &suffix)?;

    let runtime_dir = format!("fixtures/{}", config.suite_name);

    let mut buffer = String::new();
    writeln!(buffer, "// Do not edit! See {}.", config.generator).unwrap();
    writeln!(buffer, "// Fixture digest: {}", manifest.digest()).unwrap();
    writeln!(buffer).unwrap();

    writeln!(buffer, "pub const COVERED_FILES: &[&str] = &[").unwrap();
    for entry in manifest.entries() {
        writeln!(buffer, "    {:?},", entry.file_name.as_str()).unwrap();
    }
    writeln!(buffer, "];").unwrap();

    if !manifest.is_empty() {
        writeln!(buffer).unwrap();
        writeln!(buffer, "fn run_test(file: &str) {{").unwrap();
        writeln!(
            buffer,
            "    let path = std::path::Path::new(env!(\"CARGO_MANIFEST_DIR\")).join({runtime_dir:?}).join(file);"
        )
        .unwrap();
        writeln!(buffer, "    harness::run_test(&path, {});", config.runner_fn).unwrap();
        writeln!(buffer, "}}").unwrap();
    }

    for entry in manifest.entries() {
        writeln!(buffer).unwrap();
        writeln!(
            buffer,
            "#[rustfmt::skip] #[test] fn {}() {{ run_test({:?}); }}",
            entry.test_name,
            entry.file_name.as_str()
        )
        .unwrap();
    }

    writeln!(buffer).unwrap();
    writeln!(buffer, "#[rustfmt::skip] #[test]").unwrap();
    writeln!(buffer, "fn test_all_files_present_in_{}() {{", config.suite_name).unwrap();
    writeln!(
        buffer,
        "    let root = std::path::Path::new(env!(\"CARGO_MANIFEST_DIR\")).join({runtime_dir:?});"
    )
    .unwrap();
    writeln!(
        buffer,
        "    fixtures::coverage::assert_covered(&root, {:?}, COVERED_FILES);",
        config.suffix
    )
    .unwrap();
    writeln!(buffer, "}}").unwrap();

    Ok(buffer)
}

fn is_snake_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else { return false };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}

/// Writes `content` to `path` unless it is already there, creating parent
/// directories as needed. Returns whether the file changed.
pub fn write_if_changed(path: &Path, content: &str) -> io::Result<bool> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == content {
            return Ok(false);
        }
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(true)
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("'{path}' does not exist; run the generator")]
    Missing { path: PathBuf },
    #[error("'{path}' is out of date; re-run the generator")]
    Drift { path: PathBuf, existing: String, fresh: String },
}

/// Regenerates a suite in memory and reports drift against the file on disk
/// without writing anything.
pub fn check(config: &SuiteConfig) -> Result<(), CheckError> {
    let fresh = generate(config)?;
    let Ok(existing) = fs::read_to_string(&config.output) else {
        return Err(CheckError::Missing { path: config.output.clone() });
    };

    if existing == fresh {
        Ok(())
    } else {
        Err(CheckError::Drift { path: config.output.clone(), existing, fresh })
    }
}
