//! Integration tests for depgraph
//!
//! These drive the built binary and the public loader API together.

use std::process::Command;

const DOC: &str = r#"{
    "nodes": [
        {"id": "src/a.go", "index": 0, "node": {"_libs": ["libutil"], "type": "file"}},
        {"id": "libutil", "index": 1, "node": {"_dependent_files": ["src/a.go"], "type": "library"}}
    ],
    "edges": [
        {"type": "library", "from_node": {"index": 0, "id": "src/a.go"},
         "to_node": [{"index": 1, "id": "libutil"}]}
    ]
}"#;

fn depgraph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_depgraph"))
}

fn write_doc(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("graph.json");
    std::fs::write(&path, DOC).unwrap();
    path
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = depgraph().arg("--help").output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Load and inspect build dependency graphs"));
}

#[test]
fn test_load_local_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir);

    let output = depgraph()
        .args(["load", "--build", "b42"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("build:  b42"));
    assert!(stdout.contains("nodes:  2"));
    assert!(stdout.contains("edges:  1 groups, 1 targets"));
}

#[test]
fn test_load_local_json_carries_build_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir);

    let output = depgraph()
        .args(["load", "--json", "-b", "r1"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "r1");
    assert_eq!(value["nodes"][1]["id"], "libutil");
    assert_eq!(value["edges"][0]["to_node"][0]["id"], "libutil");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = depgraph()
        .arg("load")
        .arg(dir.path().join("absent.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not find file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_clear_removes_slot() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("graph.json");
    std::fs::write(&slot, DOC).unwrap();

    let status = depgraph()
        .arg("--cache-dir")
        .arg(dir.path())
        .args(["clear", "https://example.com/builds/graph.json"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!slot.exists());
}

#[test]
fn test_load_remote_served_from_cache_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(&dir);

    // The URL is unreachable; a fresh slot means it is never contacted
    let output = depgraph()
        .arg("--cache-dir")
        .arg(dir.path())
        .args(["load", "-b", "cached", "http://127.0.0.1:9/deps/graph.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("nodes:  2"));
}

#[test]
fn test_library_load_blocking() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir);

    let graph = tokio_test::block_on(depgraph_loader::load("b1", &path.to_string_lossy())).unwrap();

    assert_eq!(graph.build_id, "b1");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(
        graph.nodes[0].relationships.libraries,
        vec!["libutil".to_string()]
    );
}
