//! Resolve a CLI path argument to the list of JSON report files.
//!
//! A file argument is taken as-is; a directory is walked with the `ignore`
//! crate (so `.gitignore` rules apply) collecting `*.json` files, filtered
//! through the configured exclusion globs. Results are sorted for stable
//! output.

use std::error::Error;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, Box<dyn Error>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| format!("invalid glob {pattern:?}: {e}"))?);
    }
    Ok(Some(builder.build()?))
}

/// Collect the report files under `path`, honoring exclusion globs.
pub fn data_files(path: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let excludes = build_globset(exclude)?;

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(path).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let file = entry.path();
        if file.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if excludes.as_ref().is_some_and(|g| g.is_match(file)) {
            continue;
        }
        files.push(file.to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
