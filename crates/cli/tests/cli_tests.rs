// Integration tests for the `linkgroup` binary: exit codes, output CSV, --json.
//
// Run with: cargo test -p linkgroup-cli --test cli_tests -- --nocapture

use std::path::Path;
use std::process::{Command, Output};

fn linkgroup() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linkgroup"));
    cmd.env_remove("LINKGROUP_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

const LINKS: &str = "LEFT_SIDE,RIGHT_SIDE\nA|1,B|2\nB|2,C|3\n";

// ===========================================================================
// run
// ===========================================================================

#[test]
fn run_writes_output_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "links.csv", LINKS);
    let output = dir.path().join("out.csv");

    let out = linkgroup()
        .args(["run", &input, "-o", output.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("1 connected components"));

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ["ID_UNIQUE", "SOURCE", "IDI", "TIM_PROCESSED"]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| &r[0] == "0"));
    assert_eq!(&rows[0][1], "A");
    assert_eq!(&rows[0][2], "1");
}

#[test]
fn run_default_output_path_in_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "links.csv", LINKS);

    let out = linkgroup()
        .current_dir(dir.path())
        .args(["run", &input, "-q"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(dir.path().join("connected_components_output.csv").exists());
    assert!(out.stderr.is_empty());
}

#[test]
fn run_json_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "links.csv",
        "LEFT_SIDE,RIGHT_SIDE\nA|1,B|2\nB|2,C|3\nD|4,E|5\n",
    );

    let out = linkgroup()
        .current_dir(dir.path())
        .args(["run", &input, "--json", "--no-output", "-q"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let val: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(val["summary"]["components"], 2);
    assert_eq!(val["summary"]["nodes"], 5);
    assert_eq!(val["groups"][0], serde_json::json!(["A|1", "B|2", "C|3"]));
    assert_eq!(val["groups"][1], serde_json::json!(["D|4", "E|5"]));
    assert!(!dir.path().join("connected_components_output.csv").exists());
}

#[test]
fn run_custom_columns_and_separator() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "m.csv", "a,b\ncrm::1,erp::2\nweb,erp::2\n");
    let output = dir.path().join("out.csv");

    let out = linkgroup()
        .args([
            "run", &input,
            "-o", output.to_str().unwrap(),
            "--left-column", "a",
            "--right-column", "b",
            "--separator", "::",
            "--unknown-source", "NONE",
        ])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("0,crm,1,"));
    assert!(text.contains("0,erp,2,"));
    assert!(text.contains("0,NONE,web,"));
}

#[test]
fn run_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "m.csv", "x,y\np/1,q/2\n");
    let output = dir.path().join("grouped.csv");
    let config = write(
        dir.path(),
        "link.toml",
        &format!(
            "[columns]\nleft = \"x\"\nright = \"y\"\n\n[output]\nseparator = \"/\"\npath = {:?}\n",
            output.to_str().unwrap()
        ),
    );

    let out = linkgroup()
        .args(["run", &input, "--config", &config])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("0,p,1,"));
    assert!(text.contains("0,q,2,"));
}

// ===========================================================================
// exit codes
// ===========================================================================

#[test]
fn missing_columns_exit_3() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "bad.csv", "COL1,COL2\nA|1,B|2\n");

    let out = linkgroup().args(["run", &input, "--no-output"]).output().unwrap();
    assert_eq!(out.status.code(), Some(3));
    let err = stderr(&out);
    assert!(err.contains("LEFT_SIDE"));
    assert!(err.contains("RIGHT_SIDE"));
    assert!(err.contains("hint:"));
}

#[test]
fn empty_cell_exit_3() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "gap.csv", "LEFT_SIDE,RIGHT_SIDE\nA|1,\n");

    let out = linkgroup().args(["run", &input, "--no-output"]).output().unwrap();
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("line 2"));
}

#[test]
fn short_row_exit_3() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "short.csv", "LEFT_SIDE,RIGHT_SIDE\nA|1,B|2\nC|3\n");

    let out = linkgroup().args(["run", &input, "--no-output"]).output().unwrap();
    assert_eq!(out.status.code(), Some(3));
    let err = stderr(&out);
    assert!(err.contains("line 3"));
    assert!(err.contains("RIGHT_SIDE"));
}

#[test]
fn bad_config_exit_5() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "links.csv", LINKS);
    let config = write(dir.path(), "bad.toml", "[columns]\nleft = \"a\"\nright = \"a\"\n");

    let out = linkgroup()
        .args(["run", &input, "--config", &config, "--no-output"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(5));
}

#[test]
fn missing_input_exit_6() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let out = linkgroup()
        .args(["run", missing.to_str().unwrap(), "--no-output"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(6));
    assert!(stderr(&out).contains("cannot read"));
}

#[test]
fn output_over_input_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "links.csv", LINKS);

    let out = linkgroup().args(["run", &input, "-o", &input]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(std::fs::read_to_string(&input).unwrap(), LINKS);
}

// ===========================================================================
// validate
// ===========================================================================

#[test]
fn validate_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "links.csv", "LEFT_SIDE,RIGHT_SIDE\nA|1,A|1\nA|1,B|2\n");

    let out = linkgroup().args(["validate", &input]).output().unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "valid: 2 links over 2 nodes (1 self-links)"
    );
}

#[test]
fn validate_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "links.csv", "LEFT_SIDE,OTHER\nA|1,B|2\n");

    let out = linkgroup().args(["validate", &input]).output().unwrap();
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("RIGHT_SIDE"));
}
