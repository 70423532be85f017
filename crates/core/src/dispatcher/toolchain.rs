use std::path::Path;

use crate::process::{ProcessOutput, ToolCommand};
use crate::types::{ExecutionResult, Language};

/// Toolchain contract for language-specific compile/run stages
pub trait Toolchain: Send + Sync {
    fn language(&self) -> Language;

    /// Compile step, `None` for interpreted languages
    fn compile_command(&self, _workspace_dir: &Path) -> Option<ToolCommand> {
        None
    }

    fn run_command(&self, workspace_dir: &Path) -> ToolCommand;

    /// Turn the finished run step into a result
    fn interpret_run(&self, output: &ProcessOutput) -> ExecutionResult {
        ExecutionResult::RuntimeOutput(output.merged())
    }
}

/// Compile failure check shared by every compiled toolchain.
///
/// A nonzero exit fails, and so does any output containing the literal
/// `"error"`, even from a compiler that exited cleanly. The substring test
/// also fires on warnings that merely mention the word.
pub fn compile_failed(output: &ProcessOutput) -> bool {
    !output.success || output.merged().contains("error")
}
