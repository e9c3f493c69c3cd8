/// Report formatters and the JSON export document for partitions.
///
/// Table output shows one row per band (label, score interval, count) with
/// an optional per-file listing. The JSON document is what the export
/// collaborator writes: boundaries, bands keyed by label, and a timestamp.
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use super::Partition;
use crate::ingest::ScoredRecord;
use crate::report_helpers;

#[derive(Serialize)]
struct ExportEntry<'a> {
    file: &'a str,
    module: &'a str,
    score: f64,
}

/// Build the export document: `generated_at`, the boundary values, and one
/// record array per band keyed by its label.
pub fn export_document(
    records: &[ScoredRecord],
    partition: &Partition,
    labels: &[String],
    boundaries: &[f64],
) -> Result<Value, Box<dyn Error>> {
    let mut bands = Map::new();
    for (k, label) in labels.iter().enumerate() {
        let entries: Vec<ExportEntry<'_>> = partition
            .band_records(k, records)
            .into_iter()
            .map(|r| ExportEntry {
                file: &r.file,
                module: &r.module,
                score: r.score,
            })
            .collect();
        bands.insert(label.clone(), serde_json::to_value(entries)?);
    }

    Ok(serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "boundaries": boundaries,
        "bands": bands,
        "excluded": partition.excluded,
    }))
}

/// Write the export document pretty-printed to `path`.
pub fn write_json(
    path: &Path,
    records: &[ScoredRecord],
    partition: &Partition,
    labels: &[String],
    boundaries: &[f64],
) -> Result<(), Box<dyn Error>> {
    let document = export_document(records, partition, labels, boundaries)?;
    fs::write(path, serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

/// Print the export document to stdout.
pub fn print_json(
    records: &[ScoredRecord],
    partition: &Partition,
    labels: &[String],
    boundaries: &[f64],
) -> Result<(), Box<dyn Error>> {
    let document = export_document(records, partition, labels, boundaries)?;
    report_helpers::print_json_stdout(&document)
}

/// Print the partition as a table: label, interval, count per band, then
/// the exclusion count. `show_files` appends the file list under each band.
pub fn print_report(
    records: &[ScoredRecord],
    partition: &Partition,
    labels: &[String],
    boundaries: &[f64],
    show_files: bool,
) {
    let label_width = report_helpers::max_label_width(labels.iter().map(|l| l.as_str()), 4);
    let separator = report_helpers::separator(50);

    println!("Score bands");
    println!("{separator}");

    for (k, label) in labels.iter().enumerate() {
        let closing = if k + 1 == labels.len() { ']' } else { ')' };
        println!(
            " {:<lw$}  [{:>8.2}, {:>8.2}{}  {:>5}",
            label,
            boundaries[k],
            boundaries[k + 1],
            closing,
            partition.bands[k].len(),
            lw = label_width
        );
        if show_files {
            for record in partition.band_records(k, records) {
                println!("   {}  {:.2}", record.file, record.score);
            }
        }
    }

    println!("{separator}");
    let classified: usize = partition.bands.iter().map(|b| b.len()).sum();
    println!(" {classified} classified, {} out of range", partition.excluded);
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
