use std::path::PathBuf;
use std::str::FromStr;

use testgen::SuiteConfig;

/// Generated suites owned by `tests-integration`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Suite {
    Naming,
    Coverage,
}

impl Suite {
    pub fn all() -> [Suite; 2] {
        [Suite::Naming, Suite::Coverage]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suite::Naming => "naming",
            Suite::Coverage => "coverage",
        }
    }

    pub fn fixtures_dir(&self) -> PathBuf {
        PathBuf::from(format!("tests-integration/fixtures/{}", self.as_str()))
    }

    pub fn output(&self) -> PathBuf {
        PathBuf::from(format!("tests-integration/tests/{}/generated.rs", self.as_str()))
    }

    pub fn runner_fn(&self) -> &'static str {
        match self {
            Suite::Naming => "tests_integration::report_test_names",
            Suite::Coverage => "tests_integration::report_coverage",
        }
    }

    /// Starting content for a fresh test-data file.
    pub fn template(&self) -> &'static str {
        match self {
            Suite::Naming => "// SUFFIX: .txt\n",
            Suite::Coverage => "",
        }
    }

    // The generator field stays "build.rs" so manual generation is
    // byte-identical to what the build script writes.
    pub fn config(&self) -> SuiteConfig {
        SuiteConfig {
            suite_name: self.as_str().to_string(),
            fixtures_dir: self.fixtures_dir(),
            suffix: ".txt".to_string(),
            runner_fn: self.runner_fn().to_string(),
            generator: "build.rs".to_string(),
            output: self.output(),
        }
    }
}

impl FromStr for Suite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naming" | "n" => Ok(Suite::Naming),
            "coverage" | "c" => Ok(Suite::Coverage),
            _ => Err(format!("unknown suite '{}', expected: naming (n), coverage (c)", s)),
        }
    }
}
