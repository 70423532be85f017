use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::ToolchainConfig;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".polyrun.json", "polyrun.json"];
pub const CONFIG_ENV_VAR: &str = "POLYRUN_CONFIG";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub toolchains: ToolchainConfig,

    /// Deadline for each child process; `0` or `null` waits forever
    pub timeout_secs: Option<u64>,

    /// Leave workspaces on disk after the run
    pub keep_workspace: bool,

    /// Directory workspaces are created in (defaults to the system temp dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toolchains: ToolchainConfig::default(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            keep_workspace: false,
            workspace_root: None,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Resolve the active config.
    ///
    /// An explicit path (normally from `POLYRUN_CONFIG`) must exist. Otherwise
    /// the nearest config file at or above `start_path` is used, falling back
    /// to defaults when there is none.
    pub fn discover(start_path: &Path, explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from explicit path {}", path.display());
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }

        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Found config at {}", path.display());
                Ok((Self::load_from_file(&path)?, Some(path)))
            }
            None => {
                tracing::debug!("No config found above {}", start_path.display());
                Ok((Self::default(), None))
            }
        }
    }

    /// [`Config::discover`] from the current directory, honouring
    /// `POLYRUN_CONFIG`
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        let cwd = std::env::current_dir()?;
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::discover(&cwd, explicit.as_deref())
    }
}
