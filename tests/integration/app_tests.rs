use clap::Parser;
use dirsim::cli::Cli;
use dirsim::error::{ExitCode, StructuredError};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse(flags: &[&str], a: &Path, b: &Path, threshold: &str) -> Cli {
    let mut args: Vec<OsString> = vec!["dirsim".into()];
    args.extend(flags.iter().map(|f| OsString::from(*f)));
    args.push(a.into());
    args.push(b.into());
    args.push(threshold.into());
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_run_app_positional_invocation_succeeds() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    fs::write(a.path().join("f1.bin"), "ABC").unwrap();
    fs::write(b.path().join("f2.bin"), "ABC").unwrap();

    let cli = parse(&["--quiet", "--output", "json"], a.path(), b.path(), "50");

    let code = dirsim::run_app(cli).unwrap();
    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_run_app_missing_directory_fails() {
    let a = tempdir().unwrap();
    let missing = a.path().join("does_not_exist");

    let cli = parse(&["--quiet"], a.path(), &missing, "50");

    let err = dirsim::run_app(cli).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("Comparison failed"));
    assert!(message.contains("does_not_exist"));
}

#[test]
fn test_structured_error_for_failed_run() {
    let a = tempdir().unwrap();
    let file = a.path().join("plain.bin");
    fs::write(&file, "x").unwrap();

    let cli = parse(&["--quiet", "--json-errors"], &file, a.path(), "50");
    assert!(cli.json_errors);

    let err = dirsim::run_app(cli).unwrap_err();
    let structured = StructuredError::new(&err, ExitCode::GeneralError);
    let json = serde_json::to_value(&structured).unwrap();

    assert_eq!(json["code"], "DS001");
    assert_eq!(json["exit_code"], 1);
    assert!(json["message"].as_str().unwrap().contains("plain.bin"));
}
