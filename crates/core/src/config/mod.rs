//! Configuration management for polyrun

mod settings;
pub mod toolchains;

// Re-export main types
pub use settings::{CONFIG_ENV_VAR, CONFIG_FILE_NAMES, Config, DEFAULT_TIMEOUT_SECS};
pub use toolchains::ToolchainConfig;
