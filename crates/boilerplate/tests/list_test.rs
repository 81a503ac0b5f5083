//! Integration tests for `boilerplate list` and `boilerplate params`

#![allow(deprecated)]

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use boilerplate_testkit::{temp_dir_in_workspace, write_tree};
use predicates::prelude::*;
use std::process::Command;

fn boilerplate() -> Command {
    let mut cmd = Command::cargo_bin("boilerplate").unwrap();
    cmd.env_remove("BOILERPLATE_TEMPLATES");
    cmd
}

#[test]
fn test_list_builtin_archetypes() {
    boilerplate()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("cobra"))
        .stdout(predicate::str::contains("headless-service"))
        .stdout(predicate::str::contains("spa"))
        .stdout(predicate::str::contains("indirect-selection"));
}

#[test]
fn test_list_json() {
    let output = boilerplate().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 4);
    assert_eq!(json["archetypes"][1]["id"], "headless-service");
}

#[test]
fn test_list_template_directory() {
    let temp = temp_dir_in_workspace();
    write_tree(temp.path(), &[("alpha/x.txt", "x"), ("beta/y.txt", "y")]);

    let output = boilerplate()
        .args(["list", "--json", "--templates"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["archetypes"][0]["id"], "alpha");
    assert_eq!(json["archetypes"][1]["id"], "beta");
}

#[test]
fn test_params_human() {
    boilerplate()
        .args(["params", "cobra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ProjectName"))
        .stdout(predicate::str::contains("GolangVersion"))
        .stdout(predicate::str::contains("DefaultServerPort").not());
}

#[test]
fn test_params_json() {
    let output = boilerplate()
        .args(["params", "headless-service", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["archetype"], "headless-service");
    let params = json["parameters"].as_array().unwrap();
    let port = params
        .iter()
        .find(|p| p["name"] == "DefaultServerPort")
        .unwrap();
    assert_eq!(port["default"], "8080");
    assert_eq!(port["required"], true);
}

#[test]
fn test_params_unknown_archetype() {
    boilerplate()
        .args(["params", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UNKNOWN_ARCHETYPE"));
}
