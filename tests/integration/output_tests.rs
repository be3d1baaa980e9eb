use dirsim::cli::OutputFormat;
use dirsim::compare::{CompareConfig, DirectoryComparer};
use dirsim::error::ExitCode;
use dirsim::output::{write_report, CsvOutput, JsonOutput};
use std::fs;
use tempfile::{tempdir, TempDir};

fn snapshots() -> (TempDir, TempDir) {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    fs::write(a.path().join("f1.bin"), "ABC").unwrap();
    fs::write(a.path().join("a.bin"), "AAB").unwrap();
    fs::write(a.path().join("x.bin"), "ZZZZZZZZ").unwrap();
    fs::write(b.path().join("f2.bin"), "ABC").unwrap();
    fs::write(b.path().join("b.bin"), "ABB").unwrap();
    fs::write(b.path().join("y.bin"), "QQQQQQQQ").unwrap();
    (a, b)
}

fn compare(a: &TempDir, b: &TempDir) -> dirsim::compare::Comparison {
    DirectoryComparer::new(CompareConfig::default().with_sorted_listing(true))
        .compare(a.path(), b.path(), 60.0)
        .unwrap()
}

#[test]
fn test_json_report_end_to_end() {
    let (a, b) = snapshots();
    let comparison = compare(&a, &b);

    let json = JsonOutput::new(&comparison, ExitCode::Success)
        .to_json_pretty()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let identical = value["identical"].as_array().unwrap();
    assert_eq!(identical.len(), 1);
    assert!(identical[0]["a"].as_str().unwrap().ends_with("/f1.bin"));
    assert!(identical[0]["b"].as_str().unwrap().ends_with("/f2.bin"));
    assert_eq!(
        identical[0]["digest"],
        "b5d4045c3f466fa91fe2cc6abe79232a1a57cdf104f7a26e716e0a1e2789df78"
    );

    // "ABC" also overlaps "ABB" at 66.67, so the similar list carries it
    let similar = value["similar"].as_array().unwrap();
    let ratios: Vec<f64> = similar
        .iter()
        .map(|p| p["ratio"].as_f64().unwrap())
        .collect();
    assert!(ratios.iter().all(|r| *r >= 60.0));
    assert!(similar
        .iter()
        .any(|p| p["a"].as_str().unwrap().ends_with("/a.bin")
            && p["b"].as_str().unwrap().ends_with("/b.bin")));

    let only_a = value["only_a"].as_array().unwrap();
    assert_eq!(only_a.len(), 1);
    assert!(only_a[0].as_str().unwrap().ends_with("/x.bin"));

    assert_eq!(value["summary"]["files_a"], 3);
    assert_eq!(value["summary"]["pairs_compared"], 9);
    assert_eq!(value["summary"]["exit_code_name"], "DS000");
    assert_eq!(value["digest"], "sha256");
}

#[test]
fn test_csv_report_end_to_end() {
    let (a, b) = snapshots();
    let comparison = compare(&a, &b);

    let csv = CsvOutput::new(&comparison).to_string().unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "kind,file_a,file_b,ratio");
    assert!(lines[1].starts_with("identical,"));
    assert!(lines[1].ends_with("/f2.bin,"));
    assert!(lines.iter().any(|l| l.starts_with("similar,") && l.ends_with(",66.67")));
    assert!(lines.iter().any(|l| l.starts_with("only_a,") && l.contains("/x.bin")));
    assert!(lines.iter().any(|l| l.starts_with("only_b,") && l.contains("/y.bin")));
}

#[test]
fn test_write_report_formats_agree_on_counts() {
    let (a, b) = snapshots();
    let comparison = compare(&a, &b);

    let mut text = Vec::new();
    write_report(&comparison, OutputFormat::Text, &mut text).unwrap();
    let mut csv = Vec::new();
    write_report(&comparison, OutputFormat::Csv, &mut csv).unwrap();

    let text_lines = String::from_utf8(text).unwrap().lines().count();
    let csv_lines = String::from_utf8(csv).unwrap().lines().count();

    // CSV adds a header row
    assert_eq!(csv_lines, text_lines + 1);
}

#[test]
fn test_csv_report_for_empty_directories_has_header_only() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let comparison = compare(&a, &b);

    let mut csv = Vec::new();
    write_report(&comparison, OutputFormat::Csv, &mut csv).unwrap();

    assert_eq!(String::from_utf8(csv).unwrap(), "kind,file_a,file_b,ratio\n");
}
