mod common;
use common::{rwt, setup_config, temp_file};
use predicates::str::contains;
use std::fs;

const INPUT: &str = "date,arrival,departure,break
2025-03-10,09:00,15:00,
2025-03-10,16:00,17:00,0:10
2025-03-11,08:00,17:00,45m
2025-03-12,10:00,09:00,
";

fn write_input(name: &str) -> String {
    let path = temp_file(name, "csv");
    fs::write(&path, INPUT).expect("write batch input");
    path
}

#[test]
fn test_batch_entries_csv() {
    let cfg = setup_config("batch_entries_csv");
    let input = write_input("batch_entries_in");
    let out = temp_file("batch_entries_out", "csv");

    rwt()
        .args([
            "--config", &cfg, "batch", "--input", &input, "--output", &out, "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(contains("Line 5 skipped"))
        .stdout(contains("3 of 4 entries processed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4, "header + 3 entries");
    assert!(lines[0].starts_with("date,arrival,departure"));
    // exactly 6h: no mandatory break
    assert!(lines[1].contains("2025-03-10,09:00:00,15:00:00"));
    assert!(lines[1].contains("6:00:00"));
    assert!(lines[2].contains("0:50:00"));
    assert!(lines[3].contains("8:15:00"));
    assert!(!content.contains("2025-03-12"));
}

#[test]
fn test_batch_daily_json() {
    let cfg = setup_config("batch_daily_json");
    let input = write_input("batch_daily_in");
    let out = temp_file("batch_daily_out", "json");

    rwt()
        .args([
            "--config", &cfg, "batch", "--input", &input, "--output", &out, "--format", "json",
            "--daily",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let days: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let days = days.as_array().expect("array of days");

    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2025-03-10");
    assert_eq!(days[0]["entries"], 2);
    assert_eq!(days[0]["work_seconds"], 24_600);
    assert_eq!(days[0]["surplus"], "-01:10");
    assert_eq!(days[1]["date"], "2025-03-11");
    assert_eq!(days[1]["surplus"], "+00:15");
}

#[test]
fn test_batch_with_rounding() {
    let cfg = setup_config("batch_rounding");
    let input = temp_file("batch_rounding_in", "csv");
    fs::write(&input, "date,arrival,departure,break\n2025-03-10,09:07,16:52,\n")
        .expect("write batch input");
    let out = temp_file("batch_rounding_out", "csv");

    rwt()
        .args([
            "--config", &cfg, "batch", "--input", &input, "--output", &out, "--interval", "15",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("09:00:00,17:00:00"));
    // 8h rounded span minus the 30 min mandatory break
    assert!(content.contains("7:30:00"));
}

#[test]
fn test_batch_refuses_to_overwrite_without_force() {
    let cfg = setup_config("batch_overwrite");
    let input = write_input("batch_overwrite_in");
    let out = temp_file("batch_overwrite_out", "csv");
    fs::write(&out, "keep").expect("write existing output");

    rwt()
        .args(["--config", &cfg, "batch", "--input", &input, "--output", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read output"), "keep");

    rwt()
        .args([
            "--config", &cfg, "batch", "--input", &input, "--output", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).expect("read output").contains("2025-03-11"));
}

#[test]
fn test_batch_missing_input() {
    let cfg = setup_config("batch_missing");
    let input = temp_file("batch_missing_in", "csv");
    let out = temp_file("batch_missing_out", "csv");

    rwt()
        .args(["--config", &cfg, "batch", "--input", &input, "--output", &out])
        .assert()
        .failure()
        .stderr(contains("input file not found"));
}
