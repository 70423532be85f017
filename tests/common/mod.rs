//! Fake toolchains for integration tests.
//!
//! Each tool is a small shell script so runs are deterministic and need no
//! real compiler or interpreter on the machine.

#![allow(dead_code)]

use polyrun::Config;
use polyrun::config::ToolchainConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn tool(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Tool scripts live in `tools`; workspaces are created under `workspaces`
pub struct Sandbox {
    pub tools: TempDir,
    pub workspaces: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            tools: TempDir::new().unwrap(),
            workspaces: TempDir::new().unwrap(),
        }
    }

    pub fn script(&self, name: &str, body: &str) -> String {
        tool(&script(self.tools.path(), name, body))
    }

    pub fn config(&self, toolchains: ToolchainConfig) -> Config {
        Config {
            toolchains,
            timeout_secs: Some(10),
            workspace_root: Some(self.workspaces.path().to_path_buf()),
            ..Default::default()
        }
    }

    pub fn leftover_workspaces(&self) -> usize {
        fs::read_dir(self.workspaces.path()).unwrap().count()
    }
}
