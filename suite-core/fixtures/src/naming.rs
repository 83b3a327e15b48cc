//! Derives test-function names from test-data file names.

use convert_case::{Case, Converter};

use crate::SuffixPattern;

/// Returns the test-function name for a test-data file, or `None` if the
/// file name does not match the suffix.
///
/// The suffix is stripped and the stem is folded into a snake_case
/// identifier: `java.lang.String.txt` becomes `test_java_lang_string`.
pub fn test_fn_name(file_name: &str, suffix: &SuffixPattern) -> Option<String> {
    let stem = suffix.stem(file_name)?;
    Some(format!("test_{}", sanitize(stem)))
}

fn sanitize(stem: &str) -> String {
    // Punctuation becomes an underscore boundary before case folding, so
    // dotted names split the same way camel-case humps do.
    let cleaned: String =
        stem.chars().map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' }).collect();

    let converter = Converter::new().to_case(Case::Snake);
    let ident = converter.convert(cleaned);

    if ident.is_empty() { "_".to_string() } else { ident }
}
