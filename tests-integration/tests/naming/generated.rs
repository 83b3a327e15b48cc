// Do not edit! See build.rs.
// Fixture digest: f67a220255015bbe

pub const COVERED_FILES: &[&str] = &[
    "Int.txt",
    "MutableList.txt",
    "edge-cases.txt",
    "java.lang.String.txt",
];

fn run_test(file: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/naming").join(file);
    harness::run_test(&path, tests_integration::report_test_names);
}

#[rustfmt::skip] #[test] fn test_int() { run_test("Int.txt"); }

#[rustfmt::skip] #[test] fn test_mutable_list() { run_test("MutableList.txt"); }

#[rustfmt::skip] #[test] fn test_edge_cases() { run_test("edge-cases.txt"); }

#[rustfmt::skip] #[test] fn test_java_lang_string() { run_test("java.lang.String.txt"); }

#[rustfmt::skip] #[test]
fn test_all_files_present_in_naming() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/naming");
    fixtures::coverage::assert_covered(&root, ".txt", COVERED_FILES);
}
