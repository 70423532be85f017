use std::path::Path;

use crate::dispatcher::toolchain::Toolchain;
use crate::process::{ProcessOutput, ToolCommand};
use crate::types::{ExecutionResult, Language};
use crate::workspace;

/// Marker that distinguishes a failed JavaScript run from ordinary output
pub const NODE_FAILURE_MARKER: &str = "Node.js not found or execution failed";

#[derive(Debug, Clone)]
pub struct JavaScriptToolchain {
    runtime: String,
    extra_args: Vec<String>,
}

impl JavaScriptToolchain {
    pub fn new(runtime: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            runtime: runtime.into(),
            extra_args,
        }
    }
}

impl Toolchain for JavaScriptToolchain {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn run_command(&self, workspace_dir: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.runtime)
            .args(self.extra_args.iter().cloned())
            .with_working_dir(workspace_dir);
        if let Some(source) = workspace::source_path(workspace_dir, Language::JavaScript) {
            cmd = cmd.path_arg(&source);
        }
        cmd
    }

    fn interpret_run(&self, output: &ProcessOutput) -> ExecutionResult {
        if output.success {
            ExecutionResult::RuntimeOutput(output.merged())
        } else {
            ExecutionResult::ExecutionError(format!("{NODE_FAILURE_MARKER}\n{}", output.merged()))
        }
    }
}
