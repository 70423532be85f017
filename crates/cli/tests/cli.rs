//! End-to-end tests for the `polyrun` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn polyrun(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polyrun").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("POLYRUN_CONFIG")
        .env_remove("POLYRUN_INJECT_KEY");
    cmd
}

#[test]
fn test_detect_from_stdin() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["detect", "-"])
        .write_stdin("#include <stdio.h>\nint main(){return 0;}")
        .assert()
        .success()
        .stdout("c\n");
}

#[test]
fn test_detect_empty_is_unknown() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["detect", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("unknown\n");
}

#[test]
fn test_detect_verbose_names_the_needle() {
    let dir = TempDir::new().unwrap();
    let snippet = dir.path().join("snippet.txt");
    fs::write(&snippet, "Write-Host 'hi'").unwrap();

    polyrun(&dir)
        .args(["detect", "-v"])
        .arg(&snippet)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"powershell\""))
        .stdout(predicate::str::contains("Write-Host"));
}

#[test]
fn test_run_unknown_fails() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["run", "-"])
        .write_stdin("just some prose")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("[ERROR] Unknown language: unknown"))
        .stdout(predicate::str::contains(
            "Supported: C, C++, Python, JavaScript, PowerShell, Batch",
        ));
}

#[test]
fn test_run_empty_fails() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["run", "-"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("[ERROR] No code to execute!\n");
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["run", "nope.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.c"));
}

#[test]
fn test_dry_run_c_shows_compiler() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["run", "-d", "-"])
        .write_stdin("#include <stdio.h>\nint main(){printf(\"hi\");}")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile step"))
        .stdout(predicate::str::contains("gcc -o code"))
        .stdout(predicate::str::contains("code.c"));
}

#[test]
fn test_dry_run_json_uses_language_override() {
    let dir = TempDir::new().unwrap();
    let output = polyrun(&dir)
        .args(["run", "--dry-run", "--json", "--lang", "py", "--timeout", "7", "-"])
        .write_stdin("whatever")
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["language"], "python");
    assert_eq!(plan["timeout_secs"], 7);
    assert_eq!(plan["commands"].as_array().unwrap().len(), 1);
}

#[test]
fn test_keys_wait_with_injected_key() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .args(["keys", "wait"])
        .env("POLYRUN_INJECT_KEY", "vk=13;state=18")
        .assert()
        .success()
        .stdout(predicate::str::contains("VK:13"))
        .stdout(predicate::str::contains("IsDown:True"))
        .stdout(predicate::str::contains("Display:Shift+Enter"));
}

#[test]
fn test_keys_wait_json() {
    let dir = TempDir::new().unwrap();
    let output = polyrun(&dir)
        .args(["keys", "wait", "--json"])
        .env("POLYRUN_INJECT_KEY", "vk=38;down=0")
        .output()
        .unwrap();
    assert!(output.status.success());

    let event: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(event["virtual_key_code"], 38);
    assert_eq!(event["key_down"], false);
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    polyrun(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let written = fs::read_to_string(dir.path().join(".polyrun.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(config["timeout_secs"], 30);
    assert_eq!(config["toolchains"]["c_compiler"], "gcc");

    polyrun(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[cfg(unix)]
mod fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn write_config(dir: &Path, toolchains: serde_json::Value) -> PathBuf {
        let path = dir.join("polyrun.json");
        let config = serde_json::json!({ "toolchains": toolchains, "timeout_secs": 10 });
        fs::write(&path, config.to_string()).unwrap();
        path
    }

    #[test]
    fn test_run_python_through_configured_interpreter() {
        let dir = TempDir::new().unwrap();
        let python = script(dir.path(), "fake-python", "cat \"$1\"");
        write_config(dir.path(), serde_json::json!({ "python": python }));

        polyrun(&dir)
            .args(["run", "-"])
            .write_stdin("print(\"hi\")")
            .assert()
            .success()
            .stdout("[OUTPUT]\nprint(\"hi\")\n");
    }

    #[test]
    fn test_config_env_var_and_output_file() {
        let dir = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let python = script(tools.path(), "fake-python", "echo from-env");
        let config = write_config(tools.path(), serde_json::json!({ "python": python }));
        let saved = dir.path().join("out.txt");

        polyrun(&dir)
            .args(["run", "-o"])
            .arg(&saved)
            .arg("-")
            .env("POLYRUN_CONFIG", &config)
            .write_stdin("import os")
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&saved).unwrap(), "[OUTPUT]\nfrom-env\n");
    }

    #[test]
    fn test_compile_failure_exits_nonzero() {
        let dir = TempDir::new().unwrap();
        let gcc = script(dir.path(), "fake-gcc", "echo 'code.c:1: broken' >&2\nexit 1");
        write_config(dir.path(), serde_json::json!({ "c_compiler": gcc }));

        polyrun(&dir)
            .args(["run", "-"])
            .write_stdin("#include <stdio.h>\nint main(){}")
            .assert()
            .code(1)
            .stdout("[COMPILE ERROR]\ncode.c:1: broken\n\n");
    }

    #[test]
    fn test_run_json_report() {
        let dir = TempDir::new().unwrap();
        let node = script(dir.path(), "fake-node", "echo boom\nexit 3");
        write_config(dir.path(), serde_json::json!({ "node": node }));

        let output = polyrun(&dir)
            .args(["run", "--json", "-"])
            .write_stdin("console.log('x')")
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["language"], "javascript");
        assert_eq!(report["result"]["kind"], "execution_error");
        assert_eq!(
            report["result"]["text"],
            "Node.js not found or execution failed\nboom\n"
        );
    }
}
