use crate::config::ToolchainConfig;
use crate::dispatcher::toolchain::Toolchain;
use crate::dispatcher::toolchains::{
    BatchToolchain, CompiledToolchain, JavaScriptToolchain, PowerShellToolchain, PythonToolchain,
};
use crate::error::{Error, Result};
use crate::types::Language;

pub fn toolchain_for(language: Language, config: &ToolchainConfig) -> Result<Box<dyn Toolchain>> {
    let extra_args = config.extra_args_for(language).to_vec();
    match language {
        Language::C => Ok(Box::new(CompiledToolchain::new(
            language,
            &config.c_compiler,
            extra_args,
        ))),
        Language::Cpp => Ok(Box::new(CompiledToolchain::new(
            language,
            &config.cpp_compiler,
            extra_args,
        ))),
        Language::Python => Ok(Box::new(PythonToolchain::new(&config.python, extra_args))),
        Language::JavaScript => Ok(Box::new(JavaScriptToolchain::new(&config.node, extra_args))),
        Language::PowerShell => Ok(Box::new(PowerShellToolchain::new(
            &config.powershell,
            extra_args,
        ))),
        Language::Batch => Ok(Box::new(BatchToolchain::new(&config.cmd, extra_args))),
        Language::Bash | Language::Unknown => {
            Err(Error::UnsupportedLanguage(language.tag().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_language_has_a_toolchain() {
        let config = ToolchainConfig::default();
        for language in Language::SUPPORTED {
            let toolchain = toolchain_for(language, &config).unwrap();
            assert_eq!(toolchain.language(), language);
        }
    }

    #[test]
    fn test_bash_and_unknown_are_rejected() {
        let config = ToolchainConfig::default();
        assert!(toolchain_for(Language::Bash, &config).is_err());
        assert!(toolchain_for(Language::Unknown, &config).is_err());
    }
}
