use std::path::PathBuf;

use testgen::SuiteConfig;

fn suite(name: &str, runner_fn: &str) -> SuiteConfig {
    SuiteConfig {
        suite_name: name.to_string(),
        fixtures_dir: PathBuf::from(format!("fixtures/{name}")),
        suffix: ".txt".to_string(),
        runner_fn: runner_fn.to_string(),
        generator: "build.rs".to_string(),
        output: PathBuf::from(format!("tests/{name}/generated.rs")),
    }
}

fn main() {
    println!("cargo::rerun-if-changed=fixtures/naming");
    println!("cargo::rerun-if-changed=fixtures/coverage");

    let suites = [
        suite("naming", "tests_integration::report_test_names"),
        suite("coverage", "tests_integration::report_coverage"),
    ];

    for config in suites {
        let content = testgen::generate(&config).unwrap();
        testgen::write_if_changed(&config.output, &content).unwrap();
    }
}
