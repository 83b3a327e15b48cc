// Do not edit! See build.rs.
// Fixture digest: f6027740e7aab4fb

pub const COVERED_FILES: &[&str] = &[
    "all_covered.txt",
    "empty.txt",
    "missing_file.txt",
    "stale_entry.txt",
];

fn run_test(file: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/coverage").join(file);
    harness::run_test(&path, tests_integration::report_coverage);
}

#[rustfmt::skip] #[test] fn test_all_covered() { run_test("all_covered.txt"); }

#[rustfmt::skip] #[test] fn test_empty() { run_test("empty.txt"); }

#[rustfmt::skip] #[test] fn test_missing_file() { run_test("missing_file.txt"); }

#[rustfmt::skip] #[test] fn test_stale_entry() { run_test("stale_entry.txt"); }

#[rustfmt::skip] #[test]
fn test_all_files_present_in_coverage() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/coverage");
    fixtures::coverage::assert_covered(&root, ".txt", COVERED_FILES);
}
