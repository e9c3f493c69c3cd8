use super::*;

fn sample() -> (Vec<ScoredRecord>, Meta) {
    let records = vec![
        ScoredRecord {
            file: "a.rs".to_string(),
            module: "report.json".to_string(),
            score: 10.0,
            volume: 100.0,
            cyclomatic: 3,
            sloc: 40,
        },
        ScoredRecord {
            file: "lib/longer_name.rs".to_string(),
            module: "report.json".to_string(),
            score: 75.5,
            volume: 900.0,
            cyclomatic: 12,
            sloc: 300,
        },
    ];
    let meta = Meta {
        count: 2,
        min: 10.0,
        max: 75.5,
    };
    (records, meta)
}

#[test]
fn print_report_smoke() {
    let (records, meta) = sample();
    print_report(&records, &meta);
}

#[test]
fn print_report_empty() {
    let meta = Meta {
        count: 0,
        min: 0.0,
        max: 0.0,
    };
    print_report(&[], &meta);
}

#[test]
fn print_json_smoke() {
    let (records, _) = sample();
    print_json(&records).unwrap();
}
