use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Language;

/// Program names for each toolchain, resolved through `PATH` unless absolute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ToolchainConfig {
    pub c_compiler: String,
    pub cpp_compiler: String,
    pub python: String,
    pub node: String,
    pub powershell: String,
    pub cmd: String,

    /// Extra arguments per language, placed before the source file
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: BTreeMap<Language, Vec<String>>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            c_compiler: "gcc".to_string(),
            cpp_compiler: "g++".to_string(),
            python: default_python().to_string(),
            node: "node".to_string(),
            powershell: "powershell".to_string(),
            cmd: "cmd".to_string(),
            extra_args: BTreeMap::new(),
        }
    }
}

impl ToolchainConfig {
    pub fn extra_args_for(&self, language: Language) -> &[String] {
        self.extra_args
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn default_python() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ToolchainConfig =
            serde_json::from_str(r#"{"c_compiler": "clang", "extra_args": {"CPP": ["-std=c++17"]}}"#)
                .unwrap();
        assert_eq!(config.c_compiler, "clang");
        assert_eq!(config.cpp_compiler, "g++");
        assert_eq!(config.extra_args_for(Language::Cpp), ["-std=c++17"]);
        assert!(config.extra_args_for(Language::C).is_empty());
    }
}
