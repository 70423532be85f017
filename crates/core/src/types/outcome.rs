use serde::{Deserialize, Serialize};
use std::fmt;

use super::Language;
use crate::error::Error;

pub const COMPILE_ERROR_TAG: &str = "[COMPILE ERROR]";
pub const OUTPUT_TAG: &str = "[OUTPUT]";
pub const ERROR_TAG: &str = "[ERROR]";

/// Outcome of a single run. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ExecutionResult {
    /// Merged compiler output when the compile step failed
    CompileError(String),
    /// Merged output of the program or interpreter
    RuntimeOutput(String),
    /// Anything that stopped the run before output could be produced
    ExecutionError(String),
}

impl ExecutionResult {
    pub fn unsupported_language(language: Language) -> Self {
        ExecutionResult::ExecutionError(format!(
            "Unknown language: {}\n\nSupported: {}",
            language.tag(),
            Language::supported_list()
        ))
    }

    pub fn no_code() -> Self {
        ExecutionResult::ExecutionError("No code to execute!".to_string())
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ExecutionResult::CompileError(_) => COMPILE_ERROR_TAG,
            ExecutionResult::RuntimeOutput(_) => OUTPUT_TAG,
            ExecutionResult::ExecutionError(_) => ERROR_TAG,
        }
    }

    /// Payload without the tag
    pub fn text(&self) -> &str {
        match self {
            ExecutionResult::CompileError(text)
            | ExecutionResult::RuntimeOutput(text)
            | ExecutionResult::ExecutionError(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::RuntimeOutput(_))
    }

    /// Tagged text blob as shown to the user.
    ///
    /// Compile errors and output put the payload on the line after the tag,
    /// errors keep it on the same line.
    pub fn render(&self) -> String {
        match self {
            ExecutionResult::CompileError(text) | ExecutionResult::RuntimeOutput(text) => {
                format!("{}\n{}", self.tag(), text)
            }
            ExecutionResult::ExecutionError(text) => format!("{} {}", self.tag(), text),
        }
    }
}

impl From<Error> for ExecutionResult {
    fn from(err: Error) -> Self {
        ExecutionResult::ExecutionError(err.to_string())
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
