// Dweve IPXACT - IEEE 1685 Document Model
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests of the `ipxact` binary

use assert_cmd::Command;
use ipxact_core::model::BusDefinition;
use ipxact_core::{Document, DocumentType, Revision, Vlnv};
use ipxact_test::fixtures::{self, errors};
use ipxact_xml::{write_document, ToXmlConfig};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn ipxact_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ipxact").expect("Failed to find ipxact binary");
    cmd.env("NO_COLOR", "1").env_remove("IPXACT_MAX_FILE_SIZE");
    cmd
}

fn write_fixture(dir: &Path, name: &str, document: &Document) -> PathBuf {
    let path = dir.join(format!("{}.xml", name));
    let xml = write_document(document, &ToXmlConfig::default()).expect("Failed to write fixture");
    fs::write(&path, xml).expect("Failed to write test file");
    path
}

fn fixture_file(name: &str, document: &Document) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), name, document);
    (dir, path)
}

fn target_bus() -> Document {
    let mut bus = BusDefinition::new(
        Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "TargetBusDef", "1.0"),
        Revision::Std14,
    );
    bus.direct_connection = "true".to_string();
    bus.is_addressable = "true".to_string();
    bus.system_group_names = vec!["system1".to_string()];
    Document::BusDefinition(bus)
}

// =============================================================================
// General
// =============================================================================

#[test]
fn test_help() {
    ipxact_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("eval"));
}

#[test]
fn test_version() {
    ipxact_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ipxact"));
}

#[test]
fn test_missing_file() {
    ipxact_cmd()
        .args(["validate", "does-not-exist.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.xml"));
}

#[test]
fn test_file_size_limit() {
    let (_dir, path) = fixture_file("component", &fixtures::memory_component());
    ipxact_cmd()
        .env("IPXACT_MAX_FILE_SIZE", "16")
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// =============================================================================
// Validate
// =============================================================================

#[test]
fn test_validate_clean_component() {
    let (_dir, path) = fixture_file("component", &fixtures::memory_component());
    ipxact_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("component tuni.fi:TestLibrary:TestComponent:0.11"))
        .stdout(predicate::str::contains("Revision: 2014"));
}

#[test]
fn test_validate_reports_errors() {
    let (_dir, path) = fixture_file("dangling", &errors::dangling_field_slice_component());
    ipxact_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 error(s) found"))
        .stdout(predicate::str::contains(
            "Field reference in condition 'slice' is not valid in mode 'low'.",
        ))
        .stderr(predicate::str::contains("1 validation error(s) found"));
}

#[test]
fn test_validate_json_output() {
    let (_dir, path) = fixture_file("duplicate", &errors::duplicate_parameter_component());
    let output = ipxact_cmd()
        .args(["validate", "--format", "json"])
        .arg(&path)
        .output()
        .expect("Failed to run ipxact");
    assert!(!output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(json["valid"], serde_json::Value::Bool(false));
    assert_eq!(json["revision"], "2014");
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_validate_revision_override() {
    let (_dir, path) = fixture_file("component22", &fixtures::std22_component());
    ipxact_cmd()
        .args(["validate", "--revision", "2022"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Revision: 2022"));

    ipxact_cmd()
        .args(["validate", "--revision", "1999"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_validate_with_library() {
    let library = tempdir().expect("Failed to create temp dir");
    write_fixture(library.path(), "bus", &target_bus());
    fs::write(library.path().join("broken.xml"), "<not-ipxact/>").expect("Failed to write");

    let (_dir, path) = fixture_file("abstraction", &fixtures::wire_abstraction_definition());

    ipxact_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "The referenced bus definition does not exist: TUT:TestLibrary:TargetBusDef:1.0",
        ));

    ipxact_cmd()
        .arg("validate")
        .arg(&path)
        .arg("--library")
        .arg(library.path())
        .assert()
        .success();
}

#[test]
fn test_validate_rejects_unknown_root() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("design.xml");
    fs::write(
        &path,
        "<ipxact:design xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014\"/>",
    )
    .expect("Failed to write test file");

    ipxact_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

// =============================================================================
// Format
// =============================================================================

#[test]
fn test_format_check_accepts_canonical_file() {
    for (name, fixture) in fixtures::all() {
        let (_dir, path) = fixture_file(name, &fixture());
        ipxact_cmd()
            .args(["format", "--check"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("canonical form"));
    }
}

#[test]
fn test_format_check_rejects_compact_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bus.xml");
    let xml = write_document(&fixtures::minimal_bus_definition(), &ToXmlConfig::compact())
        .expect("Failed to write fixture");
    fs::write(&path, xml).expect("Failed to write test file");

    ipxact_cmd()
        .args(["format", "--check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in canonical form"));
}

#[test]
fn test_format_to_output_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("bus.xml");
    let output = dir.path().join("bus.canonical.xml");
    let xml = write_document(&fixtures::minimal_bus_definition(), &ToXmlConfig::compact())
        .expect("Failed to write fixture");
    fs::write(&input, xml).expect("Failed to write test file");

    ipxact_cmd()
        .arg("format")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let canonical = fs::read_to_string(&output).expect("Failed to read output");
    let expected = write_document(&fixtures::minimal_bus_definition(), &ToXmlConfig::default())
        .expect("Failed to write fixture");
    assert_eq!(canonical, expected);
}

// =============================================================================
// Inspect
// =============================================================================

#[test]
fn test_inspect_component() {
    let (_dir, path) = fixture_file("component", &fixtures::memory_component());
    ipxact_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Memory maps"))
        .stdout(predicate::str::contains("register ctrl"));
}

#[test]
fn test_inspect_api_definition() {
    let (_dir, path) = fixture_file("api", &fixtures::api_definition());
    ipxact_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Functions"));
}

// =============================================================================
// Eval
// =============================================================================

#[test]
fn test_eval_arithmetic() {
    ipxact_cmd()
        .args(["eval", "1+2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));
}

#[test]
fn test_eval_with_symbols() {
    ipxact_cmd()
        .args(["eval", "$clog2(WIDTH) + 1", "-D", "WIDTH=32"])
        .assert()
        .success()
        .stdout(predicate::str::diff("6\n"));
}

#[test]
fn test_eval_invalid_expression() {
    ipxact_cmd()
        .args(["eval", "1 +"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expression"));
}

#[test]
fn test_eval_bad_define() {
    ipxact_cmd()
        .args(["eval", "WIDTH", "-D", "WIDTH"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=VALUE"));
}
