//! Test-data discovery for generated suites.
//!
//! A test-data directory holds one fixture file per test case, marked by a
//! file-name suffix such as `.txt`. This crate enumerates those files,
//! derives the test-function name each file maps to, and checks that the
//! mapping stays a bijection with what is actually on disk.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use smol_str::SmolStr;
use walkdir::WalkDir;

pub mod coverage;
pub mod naming;

mod manifest;

pub use manifest::{Manifest, ManifestEntry, ManifestError};

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("invalid suffix '{suffix}': {source}")]
    Suffix {
        suffix: String,
        #[source]
        source: globset::Error,
    },
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file-name suffix that marks test-data files, e.g. `.txt`.
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    suffix: SmolStr,
    matcher: GlobMatcher,
}

impl SuffixPattern {
    pub fn new(suffix: &str) -> Result<SuffixPattern, DiscoverError> {
        let glob = Glob::new(&format!("*{suffix}")).map_err(|source| DiscoverError::Suffix {
            suffix: suffix.to_string(),
            source,
        })?;
        Ok(SuffixPattern { suffix: SmolStr::new(suffix), matcher: glob.compile_matcher() })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the file name without the suffix, or `None` for names that
    /// do not match. A bare suffix with an empty stem is not a match.
    pub fn stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if !self.matcher.is_match(file_name) {
            return None;
        }
        let stem = file_name.strip_suffix(self.suffix.as_str())?;
        if stem.is_empty() { None } else { Some(stem) }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.stem(file_name).is_some()
    }
}

/// A discovered test-data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataFile {
    pub file_name: SmolStr,
    pub path: PathBuf,
}

/// Enumerates matching test-data files directly under `root`.
///
/// The result is sorted by file name so downstream generation stays
/// deterministic.
pub fn discover(root: &Path, suffix: &SuffixPattern) -> Result<Vec<TestDataFile>, DiscoverError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|source| DiscoverError::Read {
            path: root.to_path_buf(),
            source: source.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if suffix.matches(file_name) {
            files.push(TestDataFile {
                file_name: SmolStr::new(file_name),
                path: entry.path().to_path_buf(),
            });
        }
    }

    Ok(files)
}
