//! Maintenance scripts for the generated fixture suites.
//!
//! Run from the workspace root.

pub mod fixture;
pub mod suites;

use console::style;
use similar::{ChangeTag, TextDiff};

use crate::suites::Suite;

fn selected(suite: Option<Suite>) -> Vec<Suite> {
    match suite {
        Some(suite) => vec![suite],
        None => Suite::all().to_vec(),
    }
}

/// Regenerates the generated files for the selected suites.
pub fn generate(suite: Option<Suite>) -> Result<(), String> {
    for suite in selected(suite) {
        let config = suite.config();
        let content = testgen::generate(&config).map_err(|error| error.to_string())?;
        let changed = testgen::write_if_changed(&config.output, &content)
            .map_err(|error| format!("failed to write '{}': {}", config.output.display(), error))?;

        let status =
            if changed { style("UPDATED").yellow().bold() } else { style("UNCHANGED").dim() };
        println!("{status} {}", style(config.output.display()).cyan());
    }
    Ok(())
}

/// Verifies the generated files are current, printing a diff on drift.
pub fn check_up_to_date(suite: Option<Suite>) -> Result<(), String> {
    let mut out_of_date = 0;

    for suite in selected(suite) {
        let config = suite.config();
        match testgen::check(&config) {
            Ok(()) => {
                println!("{} {}", style("OK").green().bold(), style(config.output.display()).cyan());
            }
            Err(testgen::CheckError::Drift { path, existing, fresh }) => {
                println!("{} {}", style("DRIFT").red().bold(), style(path.display()).cyan());
                print_diff(&existing, &fresh);
                out_of_date += 1;
            }
            Err(error @ testgen::CheckError::Missing { .. }) => {
                println!("{} {error}", style("MISSING").red().bold());
                out_of_date += 1;
            }
            Err(error) => return Err(error.to_string()),
        }
    }

    if out_of_date > 0 {
        Err(format!("{out_of_date} generated file(s) out of date; run the generate command"))
    } else {
        Ok(())
    }
}

/// Prints a colored line diff with two lines of context around each change.
pub fn print_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);

    for (index, group) in diff.grouped_ops(2).iter().enumerate() {
        if index > 0 {
            println!("{}", style("  ···").dim());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                match change.tag() {
                    ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
                    ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
                    ChangeTag::Equal => print!("{}", style(format!(" {change}")).dim()),
                }
            }
        }
    }
}
