use std::path::Path;

use crate::dispatcher::toolchain::Toolchain;
use crate::process::ToolCommand;
use crate::types::Language;
use crate::workspace;

#[derive(Debug, Clone)]
pub struct BatchToolchain {
    shell: String,
    extra_args: Vec<String>,
}

impl BatchToolchain {
    pub fn new(shell: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            shell: shell.into(),
            extra_args,
        }
    }
}

impl Toolchain for BatchToolchain {
    fn language(&self) -> Language {
        Language::Batch
    }

    fn run_command(&self, workspace_dir: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.shell)
            .args(self.extra_args.iter().cloned())
            .arg("/c")
            .with_working_dir(workspace_dir);
        if let Some(source) = workspace::source_path(workspace_dir, Language::Batch) {
            cmd = cmd.path_arg(&source);
        }
        cmd
    }
}
