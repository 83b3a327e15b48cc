use std::fs;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use harness::{Failure, Fixture, run_test};

fn panic_message(result: std::thread::Result<()>) -> String {
    let payload = result.expect_err("expected the test to fail");
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        panic!("panic payload is not a string");
    }
}

fn echo(fixture: &Fixture) -> Result<String, Failure> {
    Ok(fixture.input.clone())
}

#[test]
fn parses_directives_input_and_expected() {
    let fixture = Fixture::parse(
        "// SUFFIX: .txt\n// MODE: strict\ninput line\n// RESULT\nexpected line\n",
    );

    assert_eq!(fixture.directive("SUFFIX"), Some(".txt"));
    assert_eq!(fixture.directive("MODE"), Some("strict"));
    assert_eq!(fixture.directive("ABSENT"), None);
    assert_eq!(fixture.input, "input line\n");
    assert_eq!(fixture.expected.as_deref(), Some("expected line\n"));
}

#[test]
fn comment_lines_in_the_body_are_not_directives() {
    let fixture = Fixture::parse("first\n// NOT: a directive\n// RESULT\nout\n");

    assert!(fixture.directives.is_empty());
    assert_eq!(fixture.input, "first\n// NOT: a directive\n");
}

#[test]
fn result_marker_is_not_a_directive() {
    let fixture = Fixture::parse("// RESULT\nonly output\n");

    assert!(fixture.directives.is_empty());
    assert_eq!(fixture.input, "");
    assert_eq!(fixture.expected.as_deref(), Some("only output\n"));
}

#[test]
fn missing_result_block_means_no_expectations() {
    let fixture = Fixture::parse("input only\n");

    assert_eq!(fixture.expected, None);
}

#[test]
fn matching_report_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Echo.txt");
    fs::write(&path, "hello\n// RESULT\nhello\n").unwrap();

    run_test(&path, echo);
}

#[test]
fn trailing_whitespace_does_not_affect_the_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Echo.txt");
    fs::write(&path, "hello\n// RESULT\nhello").unwrap();

    run_test(&path, |fixture| Ok(format!("{}\n\n", fixture.input.trim_end())));
}

#[test]
fn mismatch_fails_with_a_diff() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Echo.txt");
    fs::write(&path, "hello\n// RESULT\ngoodbye\n").unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| run_test(&path, echo)));
    let message = panic_message(result);

    assert!(message.contains("does not match"), "unexpected message: {message}");
    assert!(message.contains("Echo.txt"), "unexpected message: {message}");
}

#[test]
fn driver_failure_fails_the_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Echo.txt");
    fs::write(&path, "hello\n// RESULT\nhello\n").unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| {
        run_test(&path, |_| Err::<String, _>(Failure::new("boom")))
    }));
    let message = panic_message(result);

    assert!(message.contains("driver failed: boom"), "unexpected message: {message}");
}

#[test]
fn missing_expectations_fail_with_a_hint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Echo.txt");
    fs::write(&path, "hello\n").unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| run_test(&path, echo)));
    let message = panic_message(result);

    assert!(message.contains("UPDATE_EXPECTED=1"), "unexpected message: {message}");
}

#[test]
fn missing_file_fails_with_the_path() {
    let path = Path::new("does-not-exist/Echo.txt");

    let result = catch_unwind(AssertUnwindSafe(|| run_test(path, echo)));
    let message = panic_message(result);

    assert!(message.contains("does-not-exist"), "unexpected message: {message}");
}

#[test]
fn repeated_runs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Echo.txt");
    fs::write(&path, "hello\n// RESULT\nhello\n").unwrap();

    run_test(&path, echo);
    run_test(&path, echo);
}
