use anyhow::Result;
use clap::{Parser, Subcommand};
use polyrun_core::Language;
use std::path::PathBuf;

use crate::commands::{
    RunOptions, detect_command, init_command, keys_test_command, keys_wait_command, run_command,
};

#[derive(Parser, Debug)]
#[command(name = "polyrun")]
#[command(version, about, long_about = None, propagate_version = true)]
#[command(after_help = "ENVIRONMENT:
    RUST_LOG=debug             Enable debug logging
    POLYRUN_CONFIG=<path>      Use this config file instead of searching for .polyrun.json
    POLYRUN_INJECT_KEY=<spec>  Answer `keys wait` with vk=<n>;char=<n>;down=<0|1>;state=<n>;repeat=<n>")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of a snippet
    #[command(visible_alias = "d")]
    Detect {
        /// Path to the snippet, or `-` to read stdin
        input: String,

        /// Show which signature matched, as JSON
        #[arg(short, long)]
        verbose: bool,
    },
    /// Compile and run a snippet with the matching toolchain
    #[command(visible_alias = "r")]
    Run {
        /// Path to the snippet, or `-` to read stdin
        input: String,

        /// Skip detection and use this language (c, cpp, python, javascript, powershell, batch)
        #[arg(short, long = "lang")]
        language: Option<Language>,

        /// Print the commands without executing them
        #[arg(short, long)]
        dry_run: bool,

        /// Keep the temporary workspace on disk
        #[arg(long)]
        keep: bool,

        /// Kill each tool after this many seconds (0 waits forever)
        #[arg(long)]
        timeout: Option<u64>,

        /// Also save the result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read and decode console key events
    #[command(visible_alias = "k")]
    Keys {
        #[command(subcommand)]
        command: KeysCommand,
    },
    /// Write a default .polyrun.json
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// Wait for one key and print its record
    Wait {
        /// Print the key event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Echo key events until Q
    Test,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Detect { input, verbose } => detect_command(&input, verbose),
            Commands::Run {
                input,
                language,
                dry_run,
                keep,
                timeout,
                output,
                json,
            } => run_command(
                &input,
                RunOptions {
                    language,
                    dry_run,
                    keep,
                    timeout,
                    output,
                    json,
                },
            ),
            Commands::Keys { command } => match command {
                KeysCommand::Wait { json } => keys_wait_command(json),
                KeysCommand::Test => keys_test_command(),
            },
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
