use setcard::image_filename;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn setcard() -> Command {
    Command::new(env!("CARGO_BIN_EXE_setcard"))
}

fn find_sets() -> Command {
    Command::new(env!("CARGO_BIN_EXE_find-sets"))
}

#[test]
fn test_prints_single_filename_line() {
    let output = setcard().arg("2dgh").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "44.png\n");
}

#[test]
fn test_invalid_spec_fails_with_status_1() {
    let output = setcard().arg("1sfr").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not a valid color"), "stderr: {}", stderr);
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = setcard().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_extension_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[image]\nextension = \"svg\"\n").unwrap();

    let output = setcard()
        .arg("--config")
        .arg(temp_file.path())
        .arg("3oge")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "81.svg\n");
}

#[test]
fn test_logging_level_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[logging]\nlevel = \"debug\"\n").unwrap();

    let output = setcard()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(temp_file.path())
        .arg("2dgh")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "44.png\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("encoded card"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_spec_is_reported_once() {
    let output = setcard().env_remove("RUST_LOG").arg("1sxf").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "stderr: {}", stderr);
    assert!(lines[0].starts_with("error: "));
    assert!(lines[1].starts_with("hint: "));
}

#[test]
fn test_find_sets_text_output() {
    let output = find_sets()
        .env_remove("RUST_LOG")
        .args(["--seed", "5", "--cards", "12"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    for line in &lines[..12] {
        let (spec, image) = line.split_once(' ').unwrap();
        assert_eq!(image_filename(spec).unwrap(), image, "line {:?}", line);
    }
    assert_eq!(lines[12], "");

    let set_lines = &lines[13..lines.len() - 1];
    for line in set_lines {
        assert_eq!(line.split(' ').count(), 3, "line {:?}", line);
    }
    let last = lines[lines.len() - 1];
    assert_eq!(last, format!("{} set(s) found", set_lines.len()));
}

#[test]
fn test_find_sets_json_report() {
    let output = find_sets()
        .args(["--seed", "5", "--cards", "12", "--json", "--compare"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["algorithm"], "fast");
    assert_eq!(report["seed"], 5);
    let table = report["table"].as_array().unwrap();
    assert_eq!(table.len(), 12);
    for entry in table {
        assert!(entry["image"].as_str().unwrap().ends_with(".png"));
    }
    for set in report["sets"].as_array().unwrap() {
        assert_eq!(set.as_array().unwrap().len(), 3);
    }
}

#[test]
fn test_find_sets_rejects_bad_table_size() {
    let output = find_sets().args(["--cards", "100"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}
