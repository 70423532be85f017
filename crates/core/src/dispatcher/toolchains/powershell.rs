use std::path::Path;

use crate::dispatcher::toolchain::Toolchain;
use crate::process::ToolCommand;
use crate::types::Language;
use crate::workspace;

#[derive(Debug, Clone)]
pub struct PowerShellToolchain {
    host: String,
    extra_args: Vec<String>,
}

impl PowerShellToolchain {
    pub fn new(host: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            host: host.into(),
            extra_args,
        }
    }
}

impl Toolchain for PowerShellToolchain {
    fn language(&self) -> Language {
        Language::PowerShell
    }

    fn run_command(&self, workspace_dir: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.host)
            .args(["-NoProfile", "-ExecutionPolicy", "Bypass"])
            .args(self.extra_args.iter().cloned())
            .arg("-File")
            .with_working_dir(workspace_dir);
        if let Some(source) = workspace::source_path(workspace_dir, Language::PowerShell) {
            cmd = cmd.path_arg(&source);
        }
        cmd
    }
}
