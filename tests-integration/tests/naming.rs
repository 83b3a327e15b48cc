#[path = "naming/generated.rs"]
mod generated;

use std::path::Path;

use harness::Fixture;
use tests_integration::report_test_names;

fn load(file: &str) -> Fixture {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/naming").join(file);
    Fixture::load(&path).unwrap()
}

#[test]
fn reports_are_deterministic() {
    let fixture = load("Int.txt");

    let first = report_test_names(&fixture).unwrap();
    let second = report_test_names(&fixture).unwrap();

    assert_eq!(first, second);
}

#[test]
fn fully_qualified_names_fold_into_identifiers() {
    let fixture = load("java.lang.String.txt");
    let report = report_test_names(&fixture).unwrap();

    insta::assert_snapshot!(report, @r"
    java.lang.String.txt => test_java_lang_string
    java.util.List.txt => test_java_util_list
    kotlin.collections.Map.Entry.txt => test_kotlin_collections_map_entry
    ");
}

#[test]
fn covered_files_map_to_unique_test_names() {
    let suffix = fixtures::SuffixPattern::new(".txt").unwrap();

    let mut names: Vec<_> = generated::COVERED_FILES
        .iter()
        .map(|file| fixtures::naming::test_fn_name(file, &suffix).unwrap())
        .collect();
    names.sort();
    names.dedup();

    assert_eq!(names.len(), generated::COVERED_FILES.len());
}
