use std::fs;
use std::process::Command;

const HEADER: &str = "term,us_term,br_term,chapter,order,us_definition,br_definition\n";

#[test]
fn counts_default_table_without_arguments() {
    let exe = env!("CARGO_BIN_EXE_gloss_stats");
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("glossary.csv"),
        format!("{HEADER}Apple,apple,-,01,1,,\nBanana,banana,-,01,2,,\nÅngström,angstrom,-,02,1,,\n"),
    )
    .unwrap();

    let output = Command::new(exe)
        .current_dir(dir.path())
        .env_remove("GLOSSARY_PATH")
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a 2\nb 1\n");
}

#[test]
fn input_option_and_sentinel() {
    let exe = env!("CARGO_BIN_EXE_gloss_stats");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("terms.csv");
    fs::write(&input, format!("{HEADER}apricot,,,01,1,,\n123,,,01,2,,\n")).unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap(), "--other"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a 1\nother 1\n");
}

#[test]
fn input_from_environment() {
    let exe = env!("CARGO_BIN_EXE_gloss_stats");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("env.csv");
    fs::write(&input, format!("{HEADER}zero,,,01,1,,\n")).unwrap();

    let output = Command::new(exe)
        .env("GLOSSARY_PATH", &input)
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "z 1\n");
}

#[test]
fn json_report() {
    let exe = env!("CARGO_BIN_EXE_gloss_stats");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("terms.csv");
    fs::write(&input, format!("{HEADER}bug,,,01,1,,\nbit,,,01,2,,\n")).unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!([{ "bucket": "b", "count": 2 }]));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let exe = env!("CARGO_BIN_EXE_gloss_stats");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("terms.csv");
    fs::write(&input, format!("{HEADER}Éter,,,01,1,,\nzebra,,,01,2,,\nárvore,,,03,1,,\n")).unwrap();

    let run = || {
        Command::new(exe)
            .args(["--input", input.to_str().unwrap()])
            .output()
            .expect("run failed")
            .stdout
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(String::from_utf8_lossy(&first), "a 1\ne 1\nz 1\n");
}
