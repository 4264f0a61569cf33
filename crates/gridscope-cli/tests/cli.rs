use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(relative)
}

fn sample_grid() -> String {
    repo_path("test_data/networks/sample_grid.json")
        .to_str()
        .unwrap()
        .to_string()
}

/// `gridscope` isolated from any user configuration.
fn gridscope(config_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gridscope").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("HOME", config_home.path());
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_view_projects_every_element_of_a_type() {
    let home = tempdir().unwrap();
    let output = gridscope(&home)
        .args([
            "view",
            sample_grid().as_str(),
            "--element-type",
            "load",
            "--info-type",
            "tab",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let views = stdout_json(&output);
    let views = views.as_array().unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0]["id"], "LD1");
    assert_eq!(views[0]["p"], 79.5);
    assert_eq!(views[1]["id"], "LD2");
    assert!(views[1].get("p").is_none());
    assert_eq!(views[1]["country"], "FR");
}

#[test]
fn test_view_keeps_requested_id_order() {
    let home = tempdir().unwrap();
    let output = gridscope(&home)
        .args([
            "view",
            sample_grid().as_str(),
            "--element-type",
            "LOAD",
            "--info-type",
            "LIST",
            "--id",
            "LD2",
            "--id",
            "LD1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([{"id": "LD2"}, {"id": "LD1"}])
    );
}

#[test]
fn test_view_limit_groups_flag() {
    let home = tempdir().unwrap();
    let grid = sample_grid();
    let args = [
        "view",
        grid.as_str(),
        "--element-type",
        "line",
        "--info-type",
        "form",
        "--id",
        "L1",
    ];

    let output = gridscope(&home).args(args).output().unwrap();
    let plain = stdout_json(&output);
    assert!(plain[0].get("operationalLimitsGroups1").is_none());
    assert_eq!(plain[0]["currentLimits1"]["permanentLimit"], 1200.0);
    assert_eq!(plain[0]["selectedOperationalLimitsGroup1"], "DEFAULT");

    let output = gridscope(&home)
        .args(args)
        .arg("--limit-groups")
        .output()
        .unwrap();
    let widened = stdout_json(&output);
    let groups = widened[0]["operationalLimitsGroups1"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
}

#[test]
fn test_view_node_breaker_voltage_level_form() {
    let home = tempdir().unwrap();
    let output = gridscope(&home)
        .args([
            "view",
            sample_grid().as_str(),
            "--element-type",
            "voltage-level",
            "--info-type",
            "form",
            "--id",
            "VL1",
        ])
        .output()
        .unwrap();
    let views = stdout_json(&output);
    let form = &views[0];
    assert_eq!(form["busbarCount"], 2);
    assert_eq!(form["sectionCount"], 2);
    assert_eq!(form["ipMax"], 4000.0);
}

#[test]
fn test_view_unknown_id_fails() {
    let home = tempdir().unwrap();
    gridscope(&home)
        .args([
            "view",
            sample_grid().as_str(),
            "--element-type",
            "load",
            "--info-type",
            "tab",
            "--id",
            "NOPE",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("equipment not found: NOPE"));
}

#[test]
fn test_view_unsupported_pair_fails() {
    let home = tempdir().unwrap();
    gridscope(&home)
        .args([
            "view",
            sample_grid().as_str(),
            "--element-type",
            "bus",
            "--info-type",
            "map",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_view_missing_network_file_fails() {
    let home = tempdir().unwrap();
    let missing = home.path().join("absent.json");
    gridscope(&home)
        .args([
            "view",
            missing.to_str().unwrap(),
            "--element-type",
            "load",
            "--info-type",
            "tab",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading network"));
}

#[test]
fn test_schema_served_for_tab_only() {
    let home = tempdir().unwrap();
    let output = gridscope(&home)
        .args(["schema", "--element-type", "load"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);
    assert_eq!(stdout_json(&output)["title"], "LOAD TAB");

    gridscope(&home)
        .args(["schema", "--element-type", "load", "--info-type", "form"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no schema for element type LOAD"));
}

#[test]
fn test_supported_plain_table() {
    let home = tempdir().unwrap();
    gridscope(&home)
        .args(["supported"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ELEMENT TYPE"))
        .stdout(predicate::str::contains("TWO_WINDINGS_TRANSFORMER"))
        .stdout(predicate::str::contains("LIST FORM TAB TOOLTIP"));
}

#[test]
fn test_supported_json() {
    let home = tempdir().unwrap();
    let output = gridscope(&home)
        .args(["supported", "--format", "json"])
        .output()
        .unwrap();
    let rows = stdout_json(&output);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 17);
    assert_eq!(rows[0]["elementType"], "SUBSTATION");
    assert_eq!(rows[16]["infoTypes"], serde_json::json!(["LIST", "TAB"]));
}

#[test]
fn test_topology_of_node_breaker_voltage_level() {
    let home = tempdir().unwrap();
    let output = gridscope(&home)
        .args(["topology", sample_grid().as_str(), "--voltage-level", "VL1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let snapshot = stdout_json(&output);
    assert_eq!(snapshot["busbarCount"], 2);
    assert_eq!(snapshot["sectionCount"], 2);
    assert_eq!(snapshot["isRetrievedBusbarSections"], true);

    gridscope(&home)
        .args(["topology", sample_grid().as_str(), "--voltage-level", "VL2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not node/breaker"));
}

#[test]
fn test_completions_to_file() {
    let home = tempdir().unwrap();
    let out = home.path().join("completions").join("gridscope.bash");
    gridscope(&home)
        .args(["completions", "bash", "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Bash completion"));
    assert!(fs::read_to_string(out).unwrap().contains("gridscope"));
}

#[test]
fn test_config_file_enables_pretty_output_and_limit_groups() {
    let home = tempdir().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        "[output]\npretty = true\n\n[views]\nload_operational_limit_groups = true\n",
    )
    .unwrap();

    let output = gridscope(&home)
        .args(["--config", config.to_str().unwrap()])
        .args([
            "view",
            sample_grid().as_str(),
            "--element-type",
            "line",
            "--info-type",
            "tab",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(text.contains("\n  {"));
    let views = stdout_json(&output);
    let groups = views[0]["operationalLimitsGroups1"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = tempdir().unwrap();
    let config = home.path().join("absent.toml");
    gridscope(&home)
        .args(["--config", config.to_str().unwrap(), "supported"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading config"));
}

#[test]
fn test_default_config_location_is_read() {
    let home = tempdir().unwrap();
    let dir = home.path().join("gridscope");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[output]\npretty = true\n").unwrap();

    let output = gridscope(&home)
        .args(["topology", sample_grid().as_str(), "--voltage-level", "VL1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("\n  \"busbarCount\""));
}

#[test]
fn test_broken_schema_directory_stops_startup() {
    let home = tempdir().unwrap();
    let schemas = tempdir().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        format!("[schemas]\ndir = {:?}\n", schemas.path().to_str().unwrap()),
    )
    .unwrap();

    gridscope(&home)
        .args(["--config", config.to_str().unwrap(), "supported"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading schemas from"));
}
