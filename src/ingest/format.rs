//! JSON record shapes for the two supported input formats.
//!
//! A report file is a JSON array; each element is either a full
//! complexity-report object (`path` + `maintainability` block, score
//! computed by `scoring::raw_score`) or a pre-scored object (`file` or
//! `path` + numeric `score`, used verbatim). The shape is detected per
//! record, and each format has exactly one scoring path: the metrics
//! format always computes, the pre-scored format never does.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{ScoredRecord, scoring};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Metrics {
        path: String,
        maintainability: RawMaintainability,
    },
    Scored {
        #[serde(alias = "path")]
        file: String,
        score: f64,
    },
}

#[derive(Deserialize, Default)]
struct RawMaintainability {
    #[serde(default)]
    maximum: RawMaximum,
    #[serde(default)]
    sloc: u64,
}

#[derive(Deserialize, Default)]
struct RawMaximum {
    #[serde(default)]
    volume: f64,
    #[serde(default)]
    cyclomatic: u64,
}

/// Parse one report file into scored records. The file's name becomes the
/// records' `module`.
pub fn parse_file(path: &Path) -> Result<Vec<ScoredRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let module = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();
    parse_str(&text, &module)
}

/// Parse report JSON text. Records with an empty file name are dropped.
pub(crate) fn parse_str(text: &str, module: &str) -> Result<Vec<ScoredRecord>, Box<dyn Error>> {
    let raw: Vec<RawRecord> = serde_json::from_str(text)?;
    Ok(raw
        .into_iter()
        .filter_map(|record| convert(record, module))
        .collect())
}

fn convert(raw: RawRecord, module: &str) -> Option<ScoredRecord> {
    match raw {
        RawRecord::Metrics {
            path,
            maintainability,
        } => {
            if path.is_empty() {
                return None;
            }
            let volume = maintainability.maximum.volume;
            let cyclomatic = maintainability.maximum.cyclomatic;
            let sloc = maintainability.sloc;
            Some(ScoredRecord {
                file: path,
                module: module.to_string(),
                score: scoring::raw_score(volume, cyclomatic, sloc),
                volume,
                cyclomatic,
                sloc,
            })
        }
        RawRecord::Scored { file, score } => {
            if file.is_empty() || !score.is_finite() {
                return None;
            }
            Some(ScoredRecord {
                file,
                module: module.to_string(),
                score,
                volume: 0.0,
                cyclomatic: 0,
                sloc: 0,
            })
        }
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
