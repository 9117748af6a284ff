//! Integration tests for the show command

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn applyspec_cmd() -> Command {
    Command::cargo_bin("applyspec").unwrap()
}

#[test]
fn test_show_modern_yaml_spec() {
    let workspace = common::TestWorkspace::new();
    let spec = workspace.write_spec(
        "spec.yml",
        r#"job:
  name: router
  templates:
    - name: fake-template-name
      version: fake-template-version
      sha1: fake-template-sha1
      blobstore_id: fake-template-blobstore-id
packages:
  - name: fake-package-name
    version: fake-package-version
    sha1: fake-package-sha1
    blobstore_id: fake-package-blobstore-id
"#,
    );

    applyspec_cmd()
        .args(["show", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("fake-template-name"))
        .stdout(predicate::str::contains("fake-template-version"))
        .stdout(predicate::str::contains("fake-package-name"))
        .stdout(predicate::str::contains("fake-package-sha1"))
        .stdout(predicate::str::contains("50M"));
}

#[test]
fn test_show_legacy_spec() {
    let workspace = common::TestWorkspace::new();
    let spec = workspace.write_spec(
        "legacy.yml",
        r#"job:
  template: router-template
  version: "22"
  sha1: fake-legacy-sha1
  blobstore_id: fake-legacy-blobstore-id
"#,
    );

    applyspec_cmd()
        .args(["show", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("router-template"))
        .stdout(predicate::str::contains("fake-legacy-sha1"));
}

#[test]
fn test_show_json_output() {
    let workspace = common::TestWorkspace::new();
    let spec = workspace.write_spec(
        "spec.json",
        r#"{
  "job": {
    "name": "router",
    "templates": [
      {"name": "fake-template-name", "version": "1", "sha1": "abc", "blobstore_id": "blob-1"}
    ]
  },
  "properties": {"logging": {"max_log_file_size": "250M"}}
}"#,
    );

    applyspec_cmd()
        .args(["show", spec.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"jobs\""))
        .stdout(predicate::str::contains("\"fake-template-name\""))
        .stdout(predicate::str::contains("\"max_log_file_size\": \"250M\""));
}

#[test]
fn test_show_empty_document() {
    let workspace = common::TestWorkspace::new();
    let spec = workspace.write_spec("empty.json", "{}");

    applyspec_cmd()
        .args(["show", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("None"))
        .stdout(predicate::str::contains("50M"));
}

#[test]
fn test_show_missing_file() {
    applyspec_cmd()
        .args(["show", "/nonexistent/spec.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_show_malformed_spec() {
    let workspace = common::TestWorkspace::new();
    let spec = workspace.write_spec(
        "bad.yml",
        r#"job:
  templates: not-a-sequence
"#,
    );

    applyspec_cmd()
        .args(["show", spec.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("job.templates"));
}
