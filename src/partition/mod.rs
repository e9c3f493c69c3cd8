//! Bucket classification of scored records between boundary values.
//!
//! One classifier parametrized by an arbitrary sorted boundary slice: `n`
//! boundaries produce `n - 1` contiguous bands. Band `k` covers the
//! half-open interval `[b[k], b[k+1])`; only the final band is closed above
//! so a record scoring exactly the ceiling is never dropped. Scores outside
//! `[b[0], b[last]]` are excluded from every band — that is defined
//! behavior under user-chosen boundaries, not an error.
//!
//! Classification is a wholesale recomputation on every call (no
//! incremental patching); datasets are small enough that simplicity wins.
//! Invoked via `sb bands` and by the interactive view.

pub(crate) mod report;

use std::error::Error;
use std::path::Path;

use crate::config::Config;
use crate::histogram;
use crate::ingest::{self, ScoredRecord};
use crate::walk;

/// Default band labels, smallest score range first.
pub const DEFAULT_LABELS: [&str; 5] = ["xs", "s", "m", "l", "xl"];

/// Result of classifying a dataset: per-band record indices (in input
/// order) plus the count of out-of-range records.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Indices into the classified record slice, one list per band,
    /// preserving input order.
    pub bands: Vec<Vec<usize>>,
    /// Records whose score fell below the first or above the last boundary.
    pub excluded: usize,
}

impl Partition {
    pub fn band_counts(&self) -> Vec<usize> {
        self.bands.iter().map(|band| band.len()).collect()
    }

    /// Resolve one band's indices back to records, preserving order.
    pub fn band_records<'a>(
        &self,
        band: usize,
        records: &'a [ScoredRecord],
    ) -> Vec<&'a ScoredRecord> {
        self.bands[band].iter().map(|&i| &records[i]).collect()
    }
}

/// Assign every record to exactly one band delimited by consecutive
/// boundaries, or exclude it. `boundaries` must be sorted ascending; fewer
/// than two boundaries yields no bands and excludes everything.
pub fn classify(records: &[ScoredRecord], boundaries: &[f64]) -> Partition {
    let band_count = boundaries.len().saturating_sub(1);
    let mut bands = vec![Vec::new(); band_count];

    if band_count == 0 {
        return Partition {
            bands,
            excluded: records.len(),
        };
    }

    let floor = boundaries[0];
    let ceiling = boundaries[band_count];
    let mut excluded = 0;

    for (i, record) in records.iter().enumerate() {
        let score = record.score;
        if score < floor || score > ceiling {
            excluded += 1;
            continue;
        }
        // In-range scores always land: the first band whose upper boundary
        // exceeds the score, or the (closed) final band.
        for k in 0..band_count {
            if k + 1 == band_count || score < boundaries[k + 1] {
                bands[k].push(i);
                break;
            }
        }
    }

    Partition { bands, excluded }
}

/// Evenly spaced boundaries spanning `[0, max]`, endpoints included.
pub fn even_boundaries(count: usize, max: f64) -> Vec<f64> {
    let count = count.max(2);
    let span = (count - 1) as f64;
    (0..count).map(|i| max * i as f64 / span).collect()
}

/// Parse a comma-separated boundary list: ascending, `labels + 1` values.
fn parse_boundaries(text: &str, expected: usize) -> Result<Vec<f64>, Box<dyn Error>> {
    let values: Result<Vec<f64>, _> = text.split(',').map(|v| v.trim().parse::<f64>()).collect();
    let values = values.map_err(|e| format!("invalid boundary list {text:?}: {e}"))?;
    if values.len() != expected {
        return Err(format!(
            "expected {expected} boundaries, got {}",
            values.len()
        )
        .into());
    }
    if values.windows(2).any(|w| w[0] > w[1]) {
        return Err(format!("boundaries must be ascending: {text:?}").into());
    }
    Ok(values)
}

/// `sb bands`: classify the dataset and print or export the partition.
pub fn run(
    path: &Path,
    json: bool,
    boundaries: Option<&str>,
    show_files: bool,
    config: &Config,
    excludes: &[String],
) -> Result<(), Box<dyn Error>> {
    let files = walk::data_files(path, excludes)?;
    let dataset = ingest::load(&files);
    let labels = config.labels();

    let boundaries = match boundaries {
        Some(text) => parse_boundaries(text, config.marker_count())?,
        None => {
            let max = histogram::aggregate(&dataset.records).max_score;
            even_boundaries(config.marker_count(), max)
        }
    };

    let partition = classify(&dataset.records, &boundaries);

    if json {
        report::print_json(&dataset.records, &partition, labels, &boundaries)?;
    } else {
        report::print_report(&dataset.records, &partition, labels, &boundaries, show_files);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
