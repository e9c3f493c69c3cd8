use super::*;

#[test]
fn parses_metrics_records_and_computes_score() {
    let text = r#"[
        {
            "path": "src/app.js",
            "maintainability": {
                "maximum": { "index": 120.3, "volume": 100.0, "cyclomatic": 5 },
                "average": { "index": 100.0, "volume": 50.0, "cyclomatic": 2 },
                "sloc": 50
            }
        }
    ]"#;
    let records = parse_str(text, "report.json").unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.file, "src/app.js");
    assert_eq!(r.module, "report.json");
    assert_eq!(r.cyclomatic, 5);
    assert_eq!(r.sloc, 50);
    assert!(
        (r.score - scoring::raw_score(100.0, 5, 50)).abs() < 1e-9,
        "metrics format must compute the formula, got {}",
        r.score
    );
}

#[test]
fn zero_sloc_metrics_record_scores_zero() {
    let text = r#"[
        {
            "path": "src/empty.js",
            "maintainability": { "maximum": { "volume": 80.0, "cyclomatic": 3 }, "sloc": 0 }
        }
    ]"#;
    let records = parse_str(text, "m").unwrap();
    assert!(records[0].score.abs() < f64::EPSILON);
}

#[test]
fn parses_scored_records_verbatim() {
    let text = r#"[
        { "file": "a.rs", "score": 42.5 },
        { "path": "b.rs", "score": 0.0 }
    ]"#;
    let records = parse_str(text, "scores.json").unwrap();
    assert_eq!(records.len(), 2);
    assert!((records[0].score - 42.5).abs() < f64::EPSILON);
    assert_eq!(records[1].file, "b.rs");
    assert!(records[1].score.abs() < f64::EPSILON, "score 0 is a valid score");
}

#[test]
fn mixed_shapes_in_one_array() {
    let text = r#"[
        { "file": "plain.rs", "score": 10.0 },
        {
            "path": "metric.rs",
            "maintainability": { "maximum": { "volume": 10.0, "cyclomatic": 1 }, "sloc": 5 }
        }
    ]"#;
    let records = parse_str(text, "mixed.json").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].file, "plain.rs");
    assert_eq!(records[1].file, "metric.rs");
}

#[test]
fn empty_file_names_are_dropped() {
    let text = r#"[
        { "file": "", "score": 10.0 },
        { "file": "kept.rs", "score": 5.0 }
    ]"#;
    let records = parse_str(text, "m").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file, "kept.rs");
}

#[test]
fn extra_fields_are_ignored() {
    let text = r#"[
        {
            "path": "x.js",
            "maintainability": { "maximum": { "volume": 10.0, "cyclomatic": 1 }, "sloc": 5 },
            "halstead": { "main": { "volume": 10.0 } },
            "sloc": { "main": 5 }
        }
    ]"#;
    let records = parse_str(text, "m").unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_str("not json", "m").is_err());
    assert!(parse_str(r#"{"file": "not-an-array"}"#, "m").is_err());
}

#[test]
fn non_numeric_score_is_an_error() {
    let text = r#"[ { "file": "a.rs", "score": "high" } ]"#;
    assert!(parse_str(text, "m").is_err());
}

#[test]
fn parse_file_uses_file_name_as_module() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frontend.json");
    std::fs::write(&path, r#"[ { "file": "a.rs", "score": 1.0 } ]"#).unwrap();
    let records = parse_file(&path).unwrap();
    assert_eq!(records[0].module, "frontend.json");
}
