use super::*;

fn record(file: &str, score: f64) -> ScoredRecord {
    ScoredRecord {
        file: file.to_string(),
        module: "test.json".to_string(),
        score,
        volume: 0.0,
        cyclomatic: 0,
        sloc: 0,
    }
}

fn bin_count(histogram: &Histogram, score: f64) -> Option<usize> {
    histogram
        .bins
        .iter()
        .find(|b| b.score.to_bits() == score.to_bits())
        .map(|b| b.count)
}

#[test]
fn counts_distinct_scores() {
    // Scores [10, 10, 20] -> bins {10: 2, 20: 1}, max 20.
    let records = vec![record("a", 10.0), record("b", 10.0), record("c", 20.0)];
    let histogram = aggregate(&records);
    assert_eq!(histogram.bins.len(), 2);
    assert_eq!(bin_count(&histogram, 10.0), Some(2));
    assert_eq!(bin_count(&histogram, 20.0), Some(1));
    assert!((histogram.max_score - 20.0).abs() < f64::EPSILON);
}

#[test]
fn empty_input_yields_no_bins() {
    let histogram = aggregate(&[]);
    assert!(histogram.bins.is_empty());
    assert!(histogram.max_score.abs() < f64::EPSILON);
}

#[test]
fn grouping_is_exact_not_rounded() {
    let records = vec![record("a", 10.0), record("b", 10.000001)];
    let histogram = aggregate(&records);
    assert_eq!(
        histogram.bins.len(),
        2,
        "floating noise forms separate bins by design"
    );
}

#[test]
fn counts_sum_to_record_count() {
    let records = vec![
        record("a", 1.0),
        record("b", 2.0),
        record("c", 1.0),
        record("d", 3.0),
        record("e", 2.0),
    ];
    let histogram = aggregate(&records);
    let total: usize = histogram.bins.iter().map(|b| b.count).sum();
    assert_eq!(total, records.len());
}

#[test]
fn run_on_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("scores.json"),
        r#"[ { "file": "a.rs", "score": 10.0 }, { "file": "b.rs", "score": 10.0 } ]"#,
    )
    .unwrap();
    run(dir.path(), false, &[]).unwrap();
    run(dir.path(), true, &[]).unwrap();
}

#[test]
fn zero_score_is_a_regular_bin() {
    let records = vec![record("a", 0.0), record("b", 0.0)];
    let histogram = aggregate(&records);
    assert_eq!(bin_count(&histogram, 0.0), Some(2));
    assert!(histogram.max_score.abs() < f64::EPSILON);
}
