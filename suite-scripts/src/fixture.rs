//! Creating and deleting test-data files.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use fixtures::{Manifest, SuffixPattern};

use crate::suites::Suite;

pub fn create_fixture(suite: Suite, name: &str) -> Result<PathBuf, String> {
    let fixtures_dir = suite.fixtures_dir();
    if !fixtures_dir.is_dir() {
        return Err(format!("fixtures directory '{}' does not exist", fixtures_dir.display()));
    }

    let file_name =
        if name.ends_with(".txt") { name.to_string() } else { format!("{name}.txt") };
    let path = fixtures_dir.join(&file_name);
    if path.exists() {
        return Err(format!("fixture '{}' already exists", path.display()));
    }

    let suffix = SuffixPattern::new(".txt").map_err(|error| error.to_string())?;
    let Some(test_name) = fixtures::naming::test_fn_name(&file_name, &suffix) else {
        return Err(format!("'{file_name}' does not match the '.txt' suffix"));
    };

    // Surface identifier collisions here rather than at generation time.
    let manifest = Manifest::scan(&fixtures_dir, &suffix).map_err(|error| error.to_string())?;
    if let Some(entry) = manifest.entries().iter().find(|entry| entry.test_name == test_name) {
        return Err(format!(
            "'{}' would collide with '{}' (both generate {})",
            file_name, entry.file_name, test_name
        ));
    }

    fs::write(&path, suite.template())
        .map_err(|error| format!("failed to write '{}': {}", path.display(), error))?;

    println!("{} {}", style("CREATED").green().bold(), style(path.display()).cyan());
    println!();
    println!(
        "  {} fill in the input, then run once with {} to record expectations",
        style("Next:").dim(),
        style("UPDATE_EXPECTED=1").cyan()
    );
    println!("  {} generates {}", style("Note:").dim(), style(test_name).cyan());

    Ok(path)
}

pub struct DeleteOutcome {
    pub paths: Vec<PathBuf>,
    pub deleted: bool,
}

pub fn delete_fixture(suite: Suite, name: &str, force: bool) -> Result<DeleteOutcome, String> {
    let fixtures_dir = suite.fixtures_dir();
    if !fixtures_dir.is_dir() {
        return Err(format!("fixtures directory '{}' does not exist", fixtures_dir.display()));
    }

    let mut paths = find_matching(&fixtures_dir, name)?;
    if paths.is_empty() {
        return Err(format!("no fixture matching '{}' in '{}'", name, fixtures_dir.display()));
    }
    paths.sort();

    if force {
        for path in &paths {
            fs::remove_file(path)
                .map_err(|error| format!("failed to delete '{}': {}", path.display(), error))?;
            println!("{} {}", style("DELETED").red().bold(), style(path.display()).cyan());
        }
        println!();
        println!(
            "  {} re-run the generate command to drop the removed tests",
            style("Next:").dim()
        );
    } else {
        for path in &paths {
            println!("{} {}", style("WOULD DELETE").yellow().bold(), style(path.display()).cyan());
        }
        println!();
        println!("  {} pass {} to delete", style("Next:").dim(), style("--force").cyan());
    }

    Ok(DeleteOutcome { paths, deleted: force })
}

fn find_matching(fixtures_dir: &Path, needle: &str) -> Result<Vec<PathBuf>, String> {
    let needle = needle.to_lowercase();
    let entries = fs::read_dir(fixtures_dir)
        .map_err(|error| format!("failed to read '{}': {}", fixtures_dir.display(), error))?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| format!("failed to read entry: {error}"))?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if file_name.to_lowercase().contains(&needle) {
            matches.push(entry.path());
        }
    }

    Ok(matches)
}
