/// Report formatters for the `sb scores` listing.
///
/// Table output shows file, source module, and score sorted ascending,
/// with a totals row carrying the dataset counters. JSON output mirrors
/// the same rows.
use serde::Serialize;

use super::{Meta, ScoredRecord};
use crate::report_helpers;

/// Print the scored records as a table with a totals row.
pub fn print_report(records: &[ScoredRecord], meta: &Meta) {
    if records.is_empty() {
        println!("No records ingested.");
        return;
    }

    let file_width =
        report_helpers::max_label_width(records.iter().map(|r| r.file.as_str()), 4);
    let module_width =
        report_helpers::max_label_width(records.iter().map(|r| r.module.as_str()), 6);
    // Width derived from the header format string below:
    // " {file}  {module}  {Volume:>9} {Cyclo:>5} {SLOC:>5} {Score:>8}"
    let header_width = 1 + file_width + 2 + module_width + 2 + 9 + 1 + 5 + 1 + 5 + 1 + 8;
    let separator = report_helpers::separator(header_width.max(60));

    println!("Maintainability scores");
    println!("{separator}");
    println!(
        " {:<fw$}  {:<mw$}  {:>9} {:>5} {:>5} {:>8}",
        "File",
        "Module",
        "Volume",
        "Cyclo",
        "SLOC",
        "Score",
        fw = file_width,
        mw = module_width
    );
    println!("{separator}");

    for record in records {
        println!(
            " {:<fw$}  {:<mw$}  {:>9.1} {:>5} {:>5} {:>8.2}",
            record.file,
            record.module,
            record.volume,
            record.cyclomatic,
            record.sloc,
            record.score,
            fw = file_width,
            mw = module_width
        );
    }

    println!("{separator}");
    println!(
        " {} files, score range {:.2} – {:.2}",
        meta.count, meta.min, meta.max
    );
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    module: &'a str,
    score: f64,
}

/// Serialize the scored records as pretty-printed JSON to stdout.
pub fn print_json(records: &[ScoredRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry<'_>> = records
        .iter()
        .map(|r| JsonEntry {
            file: &r.file,
            module: &r.module,
            score: r.score,
        })
        .collect();
    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
