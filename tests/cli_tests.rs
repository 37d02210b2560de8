//! Integration tests for the routefind CLI
//!
//! These tests run the routefind binary against edge files on disk and stdin.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const SCENARIO: &str = "0,4\n0,1,2\n0,2,1\n1,3,2\n1,4,3\n2,4,6\n2,5,2\n3,5,7\n4,5,1\n";

/// Get a Command for routefind, isolated from any user configuration
fn routefind() -> Command {
    let mut cmd = cargo_bin_cmd!("routefind");
    cmd.env("ROUTEFIND_CONFIG_DIR", "/nonexistent/routefind-tests")
        .env_remove("ROUTEFIND_CONFIG")
        .env_remove("ROUTEFIND_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to a file inside a fresh temp dir
fn write_input(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    routefind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: routefind"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("neighbors"))
        .stdout(predicate::str::contains("cost"))
        .stdout(predicate::str::contains("Log debug events"));
}

#[test]
fn test_version_flag() {
    routefind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("routefind"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    routefind()
        .assert()
        .success()
        .stdout(predicate::str::contains("routefind --help"));
}

// ============================================================================
// route
// ============================================================================

#[test]
fn test_route_human() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("route")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 2 -> 5 -> 4\n"))
        .stdout(predicate::str::contains("cost: 4"))
        .stdout(predicate::str::contains("  5 -> 4 (1)"));
}

#[test]
fn test_route_human_quiet_omits_hops() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .args(["--quiet", "route"])
        .arg(&path)
        .assert()
        .success()
        .stdout("0 -> 2 -> 5 -> 4\ncost: 4\n");
}

#[test]
fn test_route_json() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    let output = routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["route_cost"], 4);
    assert_eq!(json["reachable"], true);
    assert_eq!(json["edges"].as_array().unwrap().len(), 8);
    assert_eq!(
        json["route"],
        serde_json::json!([
            {"source": 0, "target": 2},
            {"source": 2, "target": 5},
            {"source": 5, "target": 4}
        ])
    );
}

#[test]
fn test_route_records() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .args(["--format", "records", "route"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H routefind=1 records=1 mode=route from=0 to=4 directed=false found=true cost=4 hops=3\n",
        ))
        .stdout(predicate::str::contains("N 5\n"))
        .stdout(predicate::str::contains("E 2 5 2\n"));
}

#[test]
fn test_route_endpoint_overrides() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("route")
        .arg(&path)
        .args(["--from", "3", "--to", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 -> 1 -> 0\n"))
        .stdout(predicate::str::contains("cost: 4"));
}

#[test]
fn test_route_to_self() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    let output = routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .args(["--from", "5", "--to", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["route"], serde_json::json!([]));
    assert_eq!(json["route_cost"], 0);
}

#[test]
fn test_route_from_stdin() {
    routefind()
        .args(["route", "-"])
        .write_stdin("1,2\n0,1,2\n0,2,1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 0 -> 2\n"))
        .stdout(predicate::str::contains("cost: 3"));
}

#[test]
fn test_route_unreachable_is_not_an_error() {
    let (_dir, path) = write_input("graph.csv", "0,3\n0,1,1\n2,3,1\n");

    routefind()
        .arg("route")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from 0 to 3"));

    let output = routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["reachable"], false);
    assert!(json["route_cost"].is_null());
}

#[test]
fn test_route_to_node_without_edges() {
    // Destination 9 only appears in the header
    let (_dir, path) = write_input("graph.csv", "0,9\n0,1,1\n");

    routefind()
        .args(["--format", "records", "route"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("found=false cost=- hops=0"));
}

#[test]
fn test_route_override_to_node_without_edges() {
    // Same outcome as naming node 9 in the header
    let (_dir, path) = write_input("graph.csv", "0,1\n0,1,1\n");

    routefind()
        .args(["--format", "records", "route", "--to", "9"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("to=9"))
        .stdout(predicate::str::contains("found=false cost=- hops=0"));
}

#[test]
fn test_route_directed_flag() {
    let (_dir, path) = write_input("graph.csv", "2,0\n0,1,1\n1,2,1\n");

    routefind()
        .arg("route")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 -> 1 -> 0"));

    routefind()
        .args(["route", "--directed"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from 2 to 0"));
}

// ============================================================================
// Input and domain errors
// ============================================================================

#[test]
fn test_malformed_row_json_error() {
    let (_dir, path) = write_input("graph.csv", "0,1\n0,1\n");

    routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"status\":400"))
        .stderr(predicate::str::contains("\"type\":\"malformed_record\""));
}

#[test]
fn test_non_integer_value_human_error() {
    let (_dir, path) = write_input("graph.csv", "0,1\n0,1,heavy\n");

    routefind()
        .arg("route")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: malformed record on line 2"));
}

#[test]
fn test_empty_file() {
    let (_dir, path) = write_input("graph.csv", "");

    routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"empty_input\""));
}

#[test]
fn test_negative_weight() {
    let (_dir, path) = write_input("graph.csv", "0,1\n0,1,-4\n");

    routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_weight\""));
}

#[test]
fn test_declared_node_count_too_small() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .args(["route", "--nodes", "5"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_invalid_source_node() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .args(["--format", "json", "route", "--nodes", "6"])
        .arg(&path)
        .args(["--from", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_node\""));
}

#[test]
fn test_huge_label_is_a_client_error() {
    let (_dir, path) = write_input("graph.csv", "0,1\n0,1000000000000000,1\n");

    routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"status\":400"))
        .stderr(predicate::str::contains("\"type\":\"too_many_nodes\""));

    let (_dir, path) = write_input("graph.csv", "0,1\n0,18446744073709551615,1\n");

    routefind()
        .arg("route")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("18446744073709551616"));
}

#[test]
fn test_huge_declared_node_count() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .args(["--format", "json", "route", "--nodes", "18446744073709551615"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"too_many_nodes\""));
}

#[test]
fn test_invalid_utf8_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.csv");
    fs::write(&path, b"0,1\n\xff,1,2\n").unwrap();

    routefind()
        .args(["--format", "json", "route"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"status\":400"))
        .stderr(predicate::str::contains("line 2: invalid UTF-8"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    routefind()
        .args(["--format", "json", "route"])
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"input_unavailable\""))
        .stderr(predicate::str::contains("\"status\":400"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    routefind()
        .args(["--format", "xml", "route", "graph.csv"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_argument_json_usage_error() {
    routefind()
        .args(["--format", "json", "route"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// neighbors and cost
// ============================================================================

#[test]
fn test_neighbors_human() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("neighbors")
        .arg(&path)
        .arg("1")
        .assert()
        .success()
        .stdout("1 -> 0 (2)\n1 -> 3 (2)\n1 -> 4 (3)\n");
}

#[test]
fn test_neighbors_json_directed() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    let output = routefind()
        .args(["--format", "json", "neighbors", "--directed"])
        .arg(&path)
        .arg("1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["directed"], true);
    assert_eq!(
        json["neighbors"],
        serde_json::json!([{"node": 3, "weight": 2}, {"node": 4, "weight": 3}])
    );
}

#[test]
fn test_neighbors_of_unknown_node() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("neighbors")
        .arg(&path)
        .arg("6")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid node 6"));
}

#[test]
fn test_cost_of_walk() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("cost")
        .arg(&path)
        .args(["0", "2", "5", "4"])
        .assert()
        .success()
        .stdout("cost: 4\n");

    routefind()
        .args(["--format", "records", "cost"])
        .arg(&path)
        .args(["0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("walkable=false cost=-"));
}

#[test]
fn test_cost_requires_nodes() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("cost")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

// ============================================================================
// Configuration and logging
// ============================================================================

#[test]
fn test_config_file_sets_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("routefind.toml");
    fs::write(
        &config,
        "[graph]\ndirected = true\n\n[ingest]\ndelimiter = \";\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();
    let input = dir.path().join("graph.csv");
    fs::write(&input, "2;0\n0;1;1\n1;2;1\n").unwrap();

    let output = routefind()
        .arg("--config")
        .arg(&config)
        .arg("route")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["reachable"], false);
}

#[test]
fn test_config_dir_env_is_used() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[output]\nformat = \"records\"\n",
    )
    .unwrap();
    let (_input_dir, input) = write_input("graph.csv", SCENARIO);

    routefind()
        .env("ROUTEFIND_CONFIG_DIR", dir.path())
        .arg("route")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H routefind=1"));
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("routefind.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();
    let (_input_dir, input) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("--config")
        .arg(&config)
        .args(["--format", "human", "--quiet", "route"])
        .arg(&input)
        .assert()
        .success()
        .stdout("0 -> 2 -> 5 -> 4\ncost: 4\n");
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let (_input_dir, input) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("route")
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .args(["--verbose", "route"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("route_found"));
}

#[test]
fn test_default_log_level_is_quiet() {
    let (_dir, path) = write_input("graph.csv", SCENARIO);

    routefind()
        .arg("route")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
