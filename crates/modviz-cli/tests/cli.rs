//! End-to-end tests of the modviz binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "root": "/app",
    "modules": [
        { "id": "/app/src/main.ts", "deps": ["/app/src/App.vue", "/app/src/router.ts"] },
        { "id": "/app/src/App.vue", "deps": ["/app/src/components/Header.vue", "/app/node_modules/vue/index.js"] },
        { "id": "/app/src/components/Header.vue", "deps": ["/app/src/utils/utils.ts"] },
        { "id": "/app/src/router.ts", "deps": ["/app/src/routes.ts"] },
        { "id": "/app/src/routes.ts", "deps": ["/app/src/utils/utils.ts"] },
        { "id": "/app/src/utils/utils.ts" },
        { "id": "/app/node_modules/vue/index.js" },
        { "id": "virtual:pwa", "virtual": true }
    ]
}"#;

fn write_snapshot(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("snapshot.json");
    fs::write(&path, content).unwrap();
    path
}

fn modviz(temp: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("modviz"));
    cmd.current_dir(temp.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_project_json_hides_node_modules() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    let output = modviz(&temp).arg("project").arg(&snapshot).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(value["edges"].as_array().unwrap().len(), 6);
}

#[test]
fn test_project_with_visibility_flags() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    let output = modviz(&temp)
        .args(["project", "--node-modules", "--virtual"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 8);
}

#[test]
fn test_config_file_sets_visibility() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);
    fs::write(
        temp.path().join("modviz.toml"),
        "[visibility]\nnode_modules = true\n",
    )
    .unwrap();

    let output = modviz(&temp).arg("project").arg(&snapshot).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 7);
}

#[test]
fn test_project_dot() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    modviz(&temp)
        .args(["project", "--format", "dot", "--search", "router"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph modules {"))
        .stdout(predicate::str::contains("\"/app/src/router.ts\" -> \"/app/src/routes.ts\""))
        .stdout(predicate::str::contains("Header.vue").not());
}

#[test]
fn test_paths_lists_both_chains() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    modviz(&temp)
        .args(["paths", "--from", "main", "--to", "utils"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "main.ts -> App.vue -> Header.vue -> utils.ts",
        ))
        .stdout(predicate::str::contains(
            "main.ts -> router.ts -> routes.ts -> utils.ts",
        ));
}

#[test]
fn test_paths_shared_policy_json() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    let output = modviz(&temp)
        .args(["paths", "--from", "main", "--to", "utils", "--policy", "shared", "--json"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Shared policy"));
}

#[test]
fn test_paths_blank_side_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    modviz(&temp)
        .args(["paths", "--from", "main", "--to", " "])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from and --to must both be non-empty"))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    let lower = modviz(&temp).args(["search"]).arg(&snapshot).arg("main.ts").output().unwrap();
    let upper = modviz(&temp).args(["search"]).arg(&snapshot).arg("MAIN.TS").output().unwrap();
    assert!(lower.status.success());
    assert_eq!(lower.stdout, upper.stdout);
    assert_eq!(String::from_utf8_lossy(&lower.stdout).trim(), "/app/src/main.ts");
}

#[test]
fn test_search_limit() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    let output = modviz(&temp)
        .args(["search", "--limit", "2"])
        .arg(&snapshot)
        .arg(".ts")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);
}

#[test]
fn test_stats_json() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);

    let output = modviz(&temp).args(["stats", "--json"]).arg(&snapshot).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["module_count"], 8);
    assert_eq!(value["edge_count"], 7);
    assert_eq!(value["virtual_count"], 1);
    assert_eq!(value["node_modules_count"], 1);
}

#[test]
fn test_missing_snapshot_fails() {
    let temp = TempDir::new().unwrap();

    modviz(&temp)
        .args(["stats", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_snapshot_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        &temp,
        r#"{ "root": "/app", "modules": [{ "id": "/app/a.ts", "deps": "/app/b.ts" }] }"#,
    );

    modviz(&temp)
        .arg("stats")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_empty_module_id_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, r#"{ "root": "/app", "modules": [{ "id": "" }] }"#);

    modviz(&temp)
        .arg("stats")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&temp, SNAPSHOT);
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[limits]\npath_max_depth = 0\n").unwrap();

    modviz(&temp)
        .arg("--config")
        .arg(&config)
        .arg("stats")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("path_max_depth"));
}
