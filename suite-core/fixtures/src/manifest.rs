use std::fs;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::{DiscoverError, SuffixPattern, TestDataFile, discover, naming};

/// One test-data file and the test function generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub file_name: SmolStr,
    pub test_name: String,
}

/// The 1:1 mapping from test-data files to test-function names.
#[derive(Debug)]
pub struct Manifest {
    root: PathBuf,
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error("'{first}' and '{second}' both map to test function '{test_name}'")]
    Collision { first: SmolStr, second: SmolStr, test_name: String },
}

impl Manifest {
    /// Scans `root` and derives a test-function name for every matching file.
    ///
    /// Two files folding to the same identifier is an error rather than a
    /// silent overwrite; the generated suite must stay a bijection.
    pub fn scan(root: &Path, suffix: &SuffixPattern) -> Result<Manifest, ManifestError> {
        let files = discover(root, suffix)?;

        let mut seen: FxHashMap<String, SmolStr> = FxHashMap::default();
        let mut entries = Vec::with_capacity(files.len());

        for TestDataFile { file_name, .. } in files {
            let Some(test_name) = naming::test_fn_name(&file_name, suffix) else {
                continue;
            };
            if let Some(first) = seen.get(&test_name) {
                return Err(ManifestError::Collision {
                    first: first.clone(),
                    second: file_name,
                    test_name,
                });
            }
            seen.insert(test_name.clone(), file_name.clone());
            entries.push(ManifestEntry { file_name, test_name });
        }

        Ok(Manifest { root: root.to_path_buf(), entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hashes entry file names and contents into a short fingerprint,
    /// stamped into generated files so drift is detectable.
    pub fn digest(&self) -> String {
        let mut hasher = Md5::new();
        for entry in &self.entries {
            hasher.update(entry.file_name.as_bytes());
            if let Ok(content) = fs::read(self.root.join(entry.file_name.as_str())) {
                hasher.update(&content);
            }
        }
        let result = hasher.finalize();
        format!("{result:x}")[..16].to_string()
    }
}
