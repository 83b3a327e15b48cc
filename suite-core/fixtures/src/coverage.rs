//! The completeness check between test-data files and generated tests.

use std::fmt;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::{DiscoverError, SuffixPattern, discover};

/// Both-way difference between files on disk and the covered set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Test-data files with no generated test.
    pub missing: Vec<SmolStr>,
    /// Covered names with no test-data file on disk.
    pub stale: Vec<SmolStr>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.missing.is_empty() {
            writeln!(f, "test-data files with no generated test:")?;
            for name in &self.missing {
                writeln!(f, "  - {name}")?;
            }
        }
        if !self.stale.is_empty() {
            writeln!(f, "generated tests with no test-data file:")?;
            for name in &self.stale {
                writeln!(f, "  - {name}")?;
            }
        }
        write!(f, "re-run the generator to update the suite")
    }
}

/// Computes the set difference in both directions, sorted for stable output.
pub fn diff<'a>(
    files: impl IntoIterator<Item = &'a str>,
    covered: impl IntoIterator<Item = &'a str>,
) -> CoverageReport {
    let files: FxHashSet<&str> = files.into_iter().collect();
    let covered: FxHashSet<&str> = covered.into_iter().collect();

    let mut missing: Vec<SmolStr> = files.difference(&covered).map(|name| SmolStr::new(name)).collect();
    let mut stale: Vec<SmolStr> = covered.difference(&files).map(|name| SmolStr::new(name)).collect();
    missing.sort();
    stale.sort();

    CoverageReport { missing, stale }
}

#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error("generated suite is out of sync with '{root}'\n{report}")]
    Incomplete { root: PathBuf, report: CoverageReport },
}

/// Re-scans `root` and fails unless every matching file has a generated test
/// and every covered name still has a file.
pub fn verify(
    root: &Path,
    suffix: &SuffixPattern,
    covered: &[&str],
) -> Result<(), CoverageError> {
    let files = discover(root, suffix)?;
    let report = diff(files.iter().map(|file| file.file_name.as_str()), covered.iter().copied());

    if report.is_complete() {
        Ok(())
    } else {
        Err(CoverageError::Incomplete { root: root.to_path_buf(), report })
    }
}

/// Panicking wrapper for generated completeness tests.
pub fn assert_covered(root: &Path, suffix: &str, covered: &[&str]) {
    let suffix = match SuffixPattern::new(suffix) {
        Ok(suffix) => suffix,
        Err(error) => panic!("{error}"),
    };
    if let Err(error) = verify(root, &suffix, covered) {
        panic!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::diff;

    #[test]
    fn complete_when_sets_match() {
        let report = diff(["Int.txt", "MutableList.txt"], ["MutableList.txt", "Int.txt"]);
        assert!(report.is_complete());
    }

    #[test]
    fn reports_missing_files() {
        let report = diff(["Int.txt", "MutableList.txt"], ["Int.txt"]);
        assert_eq!(report.missing, ["MutableList.txt"]);
        assert!(report.stale.is_empty());
        assert!(!report.is_complete());
    }

    #[test]
    fn reports_stale_entries() {
        let report = diff(["Int.txt"], ["Int.txt", "Deleted.txt"]);
        assert!(report.missing.is_empty());
        assert_eq!(report.stale, ["Deleted.txt"]);
    }

    #[test]
    fn output_is_sorted() {
        let report = diff(["b.txt", "a.txt", "c.txt"], []);
        assert_eq!(report.missing, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn empty_sets_are_complete() {
        assert!(diff([], []).is_complete());
    }

    #[test]
    fn rendering_lists_both_directions() {
        let report = diff(["A.txt"], ["B.txt"]);
        insta::assert_snapshot!(report, @r"
        test-data files with no generated test:
          - A.txt
        generated tests with no test-data file:
          - B.txt
        re-run the generator to update the suite
        ");
    }
}
