use anyhow::Result;
use polyrun_core::{CodeExecutor, ExecutionResult, RunRequest, ToolCommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Stand-in for the workspace a real run would create
pub fn placeholder_workspace() -> PathBuf {
    std::env::temp_dir().join("polyrun_XXXXXX")
}

#[derive(Debug, Serialize)]
struct PlannedCommand {
    program: String,
    args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_dir: Option<PathBuf>,
}

impl From<&ToolCommand> for PlannedCommand {
    fn from(command: &ToolCommand) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args.clone(),
            working_dir: command.working_dir.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PlanView {
    language: polyrun_core::Language,
    workspace: PathBuf,
    timeout_secs: Option<u64>,
    commands: Vec<PlannedCommand>,
}

/// Print the commands a run would execute, without executing them.
///
/// Languages with no toolchain print the same error a real run would and
/// exit non-zero.
pub fn print_plan(executor: &CodeExecutor, request: &RunRequest, json: bool) -> Result<()> {
    if request.source.is_empty() {
        println!("{}", ExecutionResult::no_code().render());
        std::process::exit(1);
    }

    let language = executor.resolve_language(request);
    if !language.is_executable() {
        println!("{}", ExecutionResult::unsupported_language(language).render());
        std::process::exit(1);
    }
    let workspace = placeholder_workspace();

    let commands = match executor.dispatcher().plan(language, &workspace) {
        Ok(commands) => commands,
        Err(e) => {
            println!("{}", ExecutionResult::from(e).render());
            std::process::exit(1);
        }
    };

    if json {
        let view = PlanView {
            language,
            workspace,
            timeout_secs: executor.dispatcher().timeout().map(|t| t.as_secs()),
            commands: commands.iter().map(PlannedCommand::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("🔍 Detected language: {}", language.display_name());
    println!("📁 Workspace: {}", workspace.display());
    match executor.dispatcher().timeout() {
        Some(limit) => println!("⏱️  Timeout: {}s per step", limit.as_secs()),
        None => println!("⏱️  Timeout: none"),
    }
    println!();

    for (index, command) in commands.iter().enumerate() {
        let step = if commands.len() > 1 && index == 0 {
            "compile"
        } else {
            "run"
        };
        println!("🚀 {} step:", step);
        println!("   {}", command.to_shell_command());
        print_command_breakdown(command, &workspace);
    }

    Ok(())
}

fn print_command_breakdown(command: &ToolCommand, workspace: &Path) {
    println!("   🔧 Command breakdown:");
    println!("      • program: {}", command.program);
    if !command.args.is_empty() {
        println!("      • args: {}", command.args.join(" "));
    }
    if let Some(ref dir) = command.working_dir {
        if dir == workspace {
            println!("      • working dir: <workspace>");
        } else {
            println!("      • working dir: {}", dir.display());
        }
    }
    println!();
}
