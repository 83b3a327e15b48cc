use std::fmt::Write;

use console::style;
use similar::{ChangeTag, TextDiff};

/// Renders a line diff between the recorded expectations and the new report,
/// with two lines of context around each change.
pub(crate) fn render(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut buffer = String::new();

    for (index, group) in diff.grouped_ops(2).iter().enumerate() {
        if index > 0 {
            writeln!(buffer, "{}", style("  ···").dim()).unwrap();
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let line = match change.tag() {
                    ChangeTag::Delete => style(format!("-{change}")).red(),
                    ChangeTag::Insert => style(format!("+{change}")).green(),
                    ChangeTag::Equal => style(format!(" {change}")).dim(),
                };
                write!(buffer, "{line}").unwrap();
            }
        }
    }

    buffer
}
