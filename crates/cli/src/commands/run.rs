use anyhow::{Context, Result};
use polyrun_core::{CodeExecutor, Config, Language, RunRequest};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::display::print_plan;
use crate::utils::read_source;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub language: Option<Language>,
    pub dry_run: bool,
    pub keep: bool,
    pub timeout: Option<u64>,
    pub output: Option<PathBuf>,
    pub json: bool,
}

pub fn run_command(input: &str, options: RunOptions) -> Result<()> {
    debug!("Running snippet from: {}", input);

    let source = read_source(input)?;
    let (mut config, config_path) = Config::load().context("Failed to load configuration")?;
    if let Some(ref path) = config_path {
        debug!("Using config: {}", path.display());
    }
    if let Some(secs) = options.timeout {
        config.timeout_secs = Some(secs);
    }

    let executor = CodeExecutor::new(config);
    let request = RunRequest {
        source,
        language: options.language,
        keep_workspace: options.keep,
    };

    if options.dry_run {
        return print_plan(&executor, &request, options.json);
    }

    let report = executor.execute(&request);
    let rendered = if options.json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.result.render()
    };
    println!("{rendered}");

    if let Some(ref dir) = report.workspace {
        eprintln!("📁 Workspace kept at: {}", dir.display());
    }

    if let Some(ref path) = options.output {
        fs::write(path, &rendered)
            .with_context(|| format!("Failed to save output to {}", path.display()))?;
        info!("Output saved to: {}", path.display());
    }

    if !report.result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
