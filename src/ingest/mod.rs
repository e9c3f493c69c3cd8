//! Ingestion of per-file complexity reports into scored records.
//!
//! Each input is a JSON array holding either full complexity-report objects
//! (volume, cyclomatic complexity, SLOC — the score is computed here) or
//! pre-scored objects (the score column is taken verbatim). See `format`
//! for the shapes and `scoring` for the formula. Invoked via `sb scores`
//! and by every other subcommand as the data source.
//!
//! A file that fails to parse is reported as a warning and skipped; it
//! never aborts the run. Records that survive parsing always carry a valid
//! finite score, which the core modules rely on.

pub(crate) mod format;
pub(crate) mod report;
pub(crate) mod scoring;

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::walk;

/// One source file with its derived maintainability score. Produced by the
/// parser, immutable afterwards. A score of exactly 0 means "not computable
/// upstream" and is carried through like any other value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub file: String,
    /// Name of the report file this record came from.
    pub module: String,
    pub score: f64,
    pub volume: f64,
    pub cyclomatic: u64,
    pub sloc: u64,
}

/// Dataset-level counters shown in report headers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meta {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

impl Meta {
    fn of(records: &[ScoredRecord]) -> Self {
        if records.is_empty() {
            return Self {
                count: 0,
                min: 0.0,
                max: 0.0,
            };
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in records {
            min = min.min(record.score);
            max = max.max(record.score);
        }
        Self {
            count: records.len(),
            min,
            max,
        }
    }
}

/// All records loaded from a set of report files, sorted ascending by
/// score, plus the derived metadata.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<ScoredRecord>,
    pub meta: Meta,
}

/// Parse every report file, warn and skip the unparseable ones, and sort
/// the combined records ascending by score.
pub fn load(paths: &[PathBuf]) -> Dataset {
    let mut records: Vec<ScoredRecord> = Vec::new();

    for path in paths {
        match format::parse_file(path) {
            Ok(parsed) => records.extend(parsed),
            Err(err) => {
                eprintln!("warning: {}: {err}", path.display());
            }
        }
    }

    records.sort_by(|a, b| a.score.total_cmp(&b.score));
    let meta = Meta::of(&records);
    Dataset { records, meta }
}

/// `sb scores`: list ingested records sorted ascending by score.
pub fn run(
    path: &Path,
    json: bool,
    top: usize,
    excludes: &[String],
) -> Result<(), Box<dyn Error>> {
    let files = walk::data_files(path, excludes)?;
    let dataset = load(&files);

    let mut shown = dataset.records;
    if top > 0 {
        shown.truncate(top);
    }

    if json {
        report::print_json(&shown)?;
    } else {
        report::print_report(&shown, &dataset.meta);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
