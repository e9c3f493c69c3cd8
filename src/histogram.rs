//! Sparse score-frequency aggregation for the histogram plot.
//!
//! One pass over the dataset grouping by exact score equality (bit-level),
//! tracking the maximum score seen. Two scores differing by floating-point
//! noise form separate bins; that is a known limitation of exact grouping,
//! kept deliberately instead of rounding. Bin order is unspecified (sparse
//! map semantics) and renderers must not depend on it.

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::ingest::ScoredRecord;
use crate::report_helpers;
use crate::walk;

/// One distinct observed score and how many records carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub score: f64,
    pub count: usize,
}

/// Frequency table plus the dataset maximum, which also seeds the score
/// domain ceiling.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub max_score: f64,
}

/// Reduce records to `(score, count)` bins and the maximum score. Empty
/// input yields no bins and a maximum of 0.
pub fn aggregate(records: &[ScoredRecord]) -> Histogram {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut max_score = 0.0_f64;

    for record in records {
        *counts.entry(record.score.to_bits()).or_insert(0) += 1;
        if record.score > max_score {
            max_score = record.score;
        }
    }

    let bins = counts
        .into_iter()
        .map(|(bits, count)| HistogramBin {
            score: f64::from_bits(bits),
            count,
        })
        .collect();

    Histogram { bins, max_score }
}

/// Print the histogram as a table, bins sorted by score for display (the
/// aggregation itself guarantees no order).
fn print_report(histogram: &Histogram) {
    if histogram.bins.is_empty() {
        println!("No records ingested.");
        return;
    }

    let mut bins = histogram.bins.clone();
    bins.sort_by(|a, b| a.score.total_cmp(&b.score));

    let separator = report_helpers::separator(30);
    println!("Score frequencies");
    println!("{separator}");
    println!(" {:>10}  {:>6}", "Score", "Count");
    println!("{separator}");
    for bin in &bins {
        println!(" {:>10.2}  {:>6}", bin.score, bin.count);
    }
    println!("{separator}");
    println!(
        " {} distinct scores, max {:.2}",
        bins.len(),
        histogram.max_score
    );
}

#[derive(Serialize)]
struct JsonBin {
    score: f64,
    count: usize,
}

#[derive(Serialize)]
struct JsonHistogram {
    bins: Vec<JsonBin>,
    max_score: f64,
}

fn print_json(histogram: &Histogram) -> Result<(), Box<dyn Error>> {
    let mut bins: Vec<JsonBin> = histogram
        .bins
        .iter()
        .map(|b| JsonBin {
            score: b.score,
            count: b.count,
        })
        .collect();
    bins.sort_by(|a, b| a.score.total_cmp(&b.score));
    report_helpers::print_json_stdout(&JsonHistogram {
        bins,
        max_score: histogram.max_score,
    })
}

/// `sb hist`: aggregate the dataset and print the frequency table.
pub fn run(path: &Path, json: bool, excludes: &[String]) -> Result<(), Box<dyn Error>> {
    let files = walk::data_files(path, excludes)?;
    let dataset = crate::ingest::load(&files);
    let histogram = aggregate(&dataset.records);

    if json {
        print_json(&histogram)?;
    } else {
        print_report(&histogram);
    }

    Ok(())
}

#[cfg(test)]
#[path = "histogram_test.rs"]
mod tests;
