use std::path::Path;

use crate::dispatcher::toolchain::Toolchain;
use crate::process::ToolCommand;
use crate::types::Language;
use crate::workspace;

/// C and C++: compile `code.<ext>` to `code<EXE>` then run the binary.
#[derive(Debug, Clone)]
pub struct CompiledToolchain {
    language: Language,
    compiler: String,
    extra_args: Vec<String>,
}

impl CompiledToolchain {
    pub fn new(language: Language, compiler: impl Into<String>, extra_args: Vec<String>) -> Self {
        debug_assert!(language.is_compiled());
        Self {
            language,
            compiler: compiler.into(),
            extra_args,
        }
    }
}

impl Toolchain for CompiledToolchain {
    fn language(&self) -> Language {
        self.language
    }

    fn compile_command(&self, workspace_dir: &Path) -> Option<ToolCommand> {
        let source = self.language.source_file_name()?;
        Some(
            ToolCommand::new(&self.compiler)
                .args(self.extra_args.iter().cloned())
                .arg("-o")
                .arg(workspace::binary_file_name())
                .arg(source)
                .with_working_dir(workspace_dir),
        )
    }

    fn run_command(&self, workspace_dir: &Path) -> ToolCommand {
        ToolCommand::new(workspace::binary_path(workspace_dir).to_string_lossy())
            .with_working_dir(workspace_dir)
    }
}
