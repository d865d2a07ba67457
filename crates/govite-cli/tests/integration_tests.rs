//! End-to-end tests driving the `govite` binary.
//!
//! Every test pins `GOVITE_CONFIG_DIR` to a per-test temp directory so the
//! ledger and config never touch the real user config location.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn govite(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("govite").unwrap();
    cmd.current_dir(temp.path())
        .env("GOVITE_CONFIG_DIR", temp.path().join("config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("govite"))
        .stdout(predicate::str::contains("install-local"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_scaffolds_a_project() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["init", "my-app", "-m", "github.com/acme/my-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created successfully"));

    let root = temp.path().join("my-app");
    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.contains("module github.com/acme/my-app"));

    let pkg = fs::read_to_string(root.join("frontend/package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"my-app\""));

    // Skeleton directories exist even when empty.
    assert!(root.join("backend/internal/modules").is_dir());
    assert!(root.join("frontend/src/components").is_dir());
    assert!(root.join("main.go").is_file());
    assert!(root.join("Makefile").is_file());
}

#[test]
fn init_defaults_module_to_project_name() {
    let temp = TempDir::new().unwrap();
    govite(&temp).args(["init", "plain"]).assert().success();

    let go_mod = fs::read_to_string(temp.path().join("plain/go.mod")).unwrap();
    assert!(go_mod.starts_with("module plain\n"));
}

#[test]
fn init_ports_flow_into_generated_files() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["init", "ported", "-p", "3000", "-b", "9090"])
        .assert()
        .success();

    let vite = fs::read_to_string(temp.path().join("ported/frontend/vite.config.js")).unwrap();
    assert!(vite.contains("port: 3000"));
    assert!(vite.contains("http://localhost:9090"));
}

#[test]
fn init_refuses_existing_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    govite(&temp)
        .args(["init", "taken"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_rejects_path_like_name() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["init", "../escape"])
        .assert()
        .failure()
        .code(2);
}

// ── install / uninstall ───────────────────────────────────────────────────────

#[test]
fn install_without_manifest_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["install", "github.com/gin-gonic/gin"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown project type"));
}

#[test]
fn uninstall_without_manifest_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["uninstall", "axios"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown project type"));
}

// ── install-local / import-module ─────────────────────────────────────────────

fn write_go_module(temp: &TempDir, dir: &str, module: &str) {
    let path = temp.path().join(dir);
    fs::create_dir_all(path.join("internal")).unwrap();
    fs::write(path.join("go.mod"), format!("module {module}\n\ngo 1.24\n")).unwrap();
    fs::write(path.join("widget.go"), "package widgets\n").unwrap();
    fs::write(path.join("internal/util.go"), "package internal\n").unwrap();
}

#[test]
fn install_local_copies_module_and_records_ledger() {
    let temp = TempDir::new().unwrap();
    write_go_module(&temp, "src-widgets", "widgets");

    govite(&temp)
        .args(["install-local", "src-widgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("widgets"));

    let dst = temp.path().join("backend/internal/modules/widgets");
    assert!(dst.join("go.mod").is_file());
    assert!(dst.join("internal/util.go").is_file());

    let ledger = fs::read_to_string(temp.path().join("config/cli.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ledger).unwrap();
    let cwd_key = temp.path().display().to_string();
    assert_eq!(value["installed_modules"][&cwd_key][0], "local:widgets");
}

#[test]
fn install_local_overwrites_existing_destination() {
    let temp = TempDir::new().unwrap();
    write_go_module(&temp, "src-widgets", "widgets");

    let dst = temp.path().join("backend/internal/modules/widgets");
    fs::create_dir_all(&dst).unwrap();
    fs::write(dst.join("go.mod"), "module stale\n").unwrap();

    govite(&temp)
        .args(["install-local", "src-widgets"])
        .assert()
        .success();

    let go_mod = fs::read_to_string(dst.join("go.mod")).unwrap();
    assert!(go_mod.contains("module widgets"));
}

#[test]
fn import_module_refuses_existing_destination() {
    let temp = TempDir::new().unwrap();
    write_go_module(&temp, "src-widgets", "widgets");

    let dst = temp.path().join("backend/internal/modules/widgets");
    fs::create_dir_all(&dst).unwrap();
    fs::write(dst.join("go.mod"), "module stale\n").unwrap();

    govite(&temp)
        .args(["import-module", "src-widgets"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // Destination untouched.
    let go_mod = fs::read_to_string(dst.join("go.mod")).unwrap();
    assert_eq!(go_mod, "module stale\n");
}

#[test]
fn import_module_records_imported_prefix() {
    let temp = TempDir::new().unwrap();
    write_go_module(&temp, "src-widgets", "widgets");

    govite(&temp)
        .args(["import-module", "src-widgets"])
        .assert()
        .success();

    let ledger = fs::read_to_string(temp.path().join("config/cli.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ledger).unwrap();
    let cwd_key = temp.path().display().to_string();
    assert_eq!(value["installed_modules"][&cwd_key][0], "imported:widgets");
}

#[test]
fn import_fails_for_missing_source() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["install-local", "no-such-dir"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn import_fails_for_unrecognized_source() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("plain-dir")).unwrap();
    fs::write(temp.path().join("plain-dir/readme.txt"), "hi").unwrap();

    govite(&temp)
        .args(["install-local", "plain-dir"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("module type"));
}

#[test]
fn import_fails_when_manifest_has_no_name() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("anon");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("package.json"), "{\"version\": \"1.0.0\"}\n").unwrap();

    govite(&temp)
        .args(["install-local", "anon"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("module name"));
}

#[test]
fn node_module_import_uses_package_json_name() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("ui");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("package.json"),
        "{\n  \"name\": \"ui-kit\",\n  \"version\": \"1.0.0\"\n}\n",
    )
    .unwrap();
    fs::write(src.join("index.js"), "export default {}\n").unwrap();

    govite(&temp).args(["install-local", "ui"]).assert().success();

    assert!(
        temp.path()
            .join("backend/internal/modules/ui-kit/index.js")
            .is_file()
    );
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_emits_script() {
    let temp = TempDir::new().unwrap();
    govite(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("govite"));
}

// ── corrupt ledger ────────────────────────────────────────────────────────────

#[test]
fn corrupt_ledger_does_not_fail_local_import() {
    let temp = TempDir::new().unwrap();
    write_go_module(&temp, "src-widgets", "widgets");

    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("cli.json"), "{corrupt").unwrap();

    govite(&temp)
        .args(["install-local", "src-widgets"])
        .assert()
        .success();

    // The copy still happened; only bookkeeping was skipped.
    assert!(
        temp.path()
            .join("backend/internal/modules/widgets/go.mod")
            .is_file()
    );
}
