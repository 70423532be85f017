//! polyrun - Guess the language of a code snippet and compile/run it
//!
//! This crate provides functionality to:
//! - Classify raw source text into a language with ordered substring signatures
//! - Write the snippet into a scoped temporary workspace and drive the matching
//!   compiler or interpreter, capturing merged output under a deadline
//! - Decode console key events, with an injection override for scripted tests
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod keys;
pub mod process;
pub mod sniffer;
pub mod types;
pub mod utils;
pub mod workspace;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use dispatcher::{Dispatcher, Toolchain};
pub use executor::{CodeExecutor, RunReport, RunRequest};
pub use keys::{KeyEvent, KeySource, wait_for_key};
pub use process::{ProcessOutput, ToolCommand};
pub use sniffer::{LanguageSniffer, SniffMatch, classify};
pub use workspace::RunWorkspace;
