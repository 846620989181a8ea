use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn cli() -> Command {
    Command::cargo_bin("archboard-cli").expect("binary builds")
}

#[test]
fn layout_emits_canvas_json_for_the_fixture() {
    let fixture = repo_root().join("fixtures").join("webapp.graph");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let output = cli()
        .arg(fixture.to_string_lossy().as_ref())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let nodes = value["nodes"].as_array().unwrap();
    let edges = value["edges"].as_array().unwrap();

    assert!(nodes.iter().any(|n| n["id"] == "VPC" && n["type"] == "groupNode"));
    assert!(nodes.iter().any(|n| n["id"] == "Fn" && n["parentNode"] == "VPC"));
    assert!(edges.iter().any(|e| e["id"] == "User-CF"));
}

#[test]
fn parse_reads_stdin_and_prints_the_semantic_model() {
    let output = cli()
        .arg("parse")
        .write_stdin("A[App] --> B[Backend]\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["nodes"][0]["label"], "App");
    assert_eq!(value["edges"][0]["id"], "A-B");
}

#[test]
fn direction_flag_overrides_the_header() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("tiny.graph");
    fs::write(&input, "flowchart LR\nA --> B\n").expect("write fixture");

    let output = cli()
        .args(["layout", "--direction", "TB"])
        .arg(input.to_string_lossy().as_ref())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let nodes = value["nodes"].as_array().unwrap();
    let a = nodes.iter().find(|n| n["id"] == "A").unwrap();
    let b = nodes.iter().find(|n| n["id"] == "B").unwrap();
    assert!(a["position"]["y"].as_f64().unwrap() < b["position"]["y"].as_f64().unwrap());
    assert_eq!(a["position"]["x"], b["position"]["x"]);
}

#[test]
fn unknown_direction_is_a_hard_error() {
    cli()
        .args(["layout", "--direction", "diagonal", "-"])
        .write_stdin("A --> B\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn pretty_output_is_indented() {
    let stdout = cli()
        .args(["parse", "--pretty"])
        .write_stdin("A --> B\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(stdout).unwrap();
    assert!(text.contains("\n  "));
}
