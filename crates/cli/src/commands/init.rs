use anyhow::{Context, Result};
use polyrun_core::Config;
use polyrun_core::config::CONFIG_FILE_NAMES;
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let config_path = root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote default config to {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Edit 'toolchains' to point at specific compilers or interpreters,");
    println!("   and 'timeout_secs' to change how long a tool may run (0 = no limit).");

    Ok(())
}
