//! Toolchain dispatch.
//!
//! Core dispatch stays language-agnostic. Each [`Toolchain`] supplies the
//! compile and run commands for one language; the [`Dispatcher`] writes the
//! source, runs the compile step when there is one, stops on a compile
//! failure, and otherwise runs the program.

pub mod registry;
pub mod toolchain;
pub mod toolchains;

pub use registry::toolchain_for;
pub use toolchain::{Toolchain, compile_failed};

use std::path::Path;
use std::time::Duration;

use crate::config::{Config, ToolchainConfig};
use crate::error::Result;
use crate::process::ToolCommand;
use crate::types::{ExecutionResult, Language};
use crate::workspace;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    toolchains: ToolchainConfig,
    timeout: Option<Duration>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            toolchains: config.toolchains.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Write `source` into `workspace_dir` and compile/run it.
    ///
    /// Never fails: orchestration errors such as a missing tool become
    /// [`ExecutionResult::ExecutionError`] carrying the error message.
    pub fn run(&self, language: Language, source: &str, workspace_dir: &Path) -> ExecutionResult {
        if !language.is_executable() {
            tracing::debug!("No toolchain for {}", language);
            return ExecutionResult::unsupported_language(language);
        }

        match self.try_run(language, source, workspace_dir) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Run of {} snippet failed: {}", language, e);
                e.into()
            }
        }
    }

    fn try_run(
        &self,
        language: Language,
        source: &str,
        workspace_dir: &Path,
    ) -> Result<ExecutionResult> {
        let toolchain = toolchain_for(language, &self.toolchains)?;
        workspace::write_source(workspace_dir, language, source)?;

        if let Some(compile) = toolchain.compile_command(workspace_dir) {
            tracing::info!("Compiling: {}", compile.to_shell_command());
            let output = compile.execute(self.timeout)?;
            if compile_failed(&output) {
                tracing::info!("Compile step failed with {:?}", output.exit_code);
                return Ok(ExecutionResult::CompileError(output.merged()));
            }
        }

        let run = toolchain.run_command(workspace_dir);
        tracing::info!("Running: {}", run.to_shell_command());
        let output = run.execute(self.timeout)?;
        Ok(toolchain.interpret_run(&output))
    }

    /// Commands a run would execute, in order, without executing them
    pub fn plan(&self, language: Language, workspace_dir: &Path) -> Result<Vec<ToolCommand>> {
        let toolchain = toolchain_for(language, &self.toolchains)?;
        let mut commands = Vec::with_capacity(2);
        if let Some(compile) = toolchain.compile_command(workspace_dir) {
            commands.push(compile);
        }
        commands.push(toolchain.run_command(workspace_dir));
        Ok(commands)
    }
}
