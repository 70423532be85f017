use std::path::Path;

use crate::dispatcher::toolchain::Toolchain;
use crate::process::ToolCommand;
use crate::types::Language;
use crate::workspace;

#[derive(Debug, Clone)]
pub struct PythonToolchain {
    interpreter: String,
    extra_args: Vec<String>,
}

impl PythonToolchain {
    pub fn new(interpreter: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            extra_args,
        }
    }
}

impl Toolchain for PythonToolchain {
    fn language(&self) -> Language {
        Language::Python
    }

    fn run_command(&self, workspace_dir: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.interpreter)
            .args(self.extra_args.iter().cloned())
            .with_working_dir(workspace_dir);
        if let Some(source) = workspace::source_path(workspace_dir, Language::Python) {
            cmd = cmd.path_arg(&source);
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_source_directly() {
        let dir = Path::new("/tmp/polyrun_py");
        let toolchain = PythonToolchain::new("python3", Vec::new());
        assert!(toolchain.compile_command(dir).is_none());
        let run = toolchain.run_command(dir);
        assert_eq!(run.program, "python3");
        assert_eq!(run.args, [dir.join("code.py").to_string_lossy()]);
    }
}
