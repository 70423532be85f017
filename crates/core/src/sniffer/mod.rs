//! Language sniffing from raw source text.
//!
//! Classification is an ordered list of [`Signature`]s; the first one that
//! matches decides the language. There is no scoring and no tie breaking.

pub mod signature;

pub use signature::{DEFAULT_SIGNATURES, NeedleSignature, Signature};

use crate::types::Language;
use serde::Serialize;

/// Why a language was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SniffMatch {
    pub language: Language,
    /// Needle that fired, `None` when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needle: Option<&'static str>,
    /// Zero-based position of the rule in the priority list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_index: Option<usize>,
}

impl SniffMatch {
    fn unknown() -> Self {
        Self {
            language: Language::Unknown,
            needle: None,
            rule_index: None,
        }
    }
}

pub struct LanguageSniffer {
    signatures: Vec<Box<dyn Signature>>,
}

impl Default for LanguageSniffer {
    fn default() -> Self {
        Self {
            signatures: DEFAULT_SIGNATURES
                .iter()
                .cloned()
                .map(|signature| Box::new(signature) as Box<dyn Signature>)
                .collect(),
        }
    }
}

impl LanguageSniffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sniffer from a custom, already ordered, signature list
    pub fn with_signatures(signatures: Vec<Box<dyn Signature>>) -> Self {
        Self { signatures }
    }

    pub fn classify(&self, source: &str) -> Language {
        self.explain(source).language
    }

    pub fn explain(&self, source: &str) -> SniffMatch {
        if source.is_empty() {
            tracing::debug!("Empty source, skipping signatures");
            return SniffMatch::unknown();
        }

        for (index, signature) in self.signatures.iter().enumerate() {
            if let Some(needle) = signature.find(source) {
                tracing::debug!(
                    "Detected {} via {:?} (rule {})",
                    signature.language(),
                    needle,
                    index + 1
                );
                return SniffMatch {
                    language: signature.language(),
                    needle: Some(needle),
                    rule_index: Some(index),
                };
            }
        }

        tracing::debug!("No signature matched");
        SniffMatch::unknown()
    }
}

/// Classify with the built-in signature list
pub fn classify(source: &str) -> Language {
    LanguageSniffer::default().classify(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(classify(""), Language::Unknown);
        assert_eq!(LanguageSniffer::new().explain(""), SniffMatch::unknown());
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(classify("Write-Host 'hi'"), Language::PowerShell);
        assert_eq!(classify("console.log(1)"), Language::JavaScript);
        assert_eq!(classify("print(\"hi\")"), Language::Python);
        assert_eq!(classify("#include <iostream>\nint main(){}"), Language::Cpp);
        assert_eq!(classify("#include <stdio.h>\nint main(){}"), Language::C);
        assert_eq!(classify("@echo off\necho hi"), Language::Batch);
        assert_eq!(classify("#!/bin/bash\necho hi"), Language::Bash);
        assert_eq!(classify("hello world"), Language::Unknown);
    }

    #[test]
    fn test_powershell_wins_over_python() {
        assert_eq!(classify("def f():\n    Get-Item\nprint(1)"), Language::PowerShell);
    }

    #[test]
    fn test_dollar_anywhere_means_powershell() {
        // A C printf with a dollar sign is still claimed by the first rule
        let source = "#include <stdio.h>\nint main(){ printf(\"$5\"); }";
        assert_eq!(classify(source), Language::PowerShell);
    }

    #[test]
    fn test_std_namespace_without_include_is_cpp() {
        assert_eq!(classify("int main() { std::cout << 1; }"), Language::Cpp);
    }

    #[test]
    fn test_bash_shebang_loses_to_earlier_rules() {
        assert_eq!(classify("#!/bin/bash\necho $HOME"), Language::PowerShell);
    }

    #[test]
    fn test_explain_reports_needle_and_rule() {
        let found = LanguageSniffer::new().explain("import os");
        assert_eq!(found.language, Language::Python);
        assert_eq!(found.needle, Some("import "));
        assert_eq!(found.rule_index, Some(2));
    }

    #[test]
    fn test_custom_signatures() {
        let sniffer = LanguageSniffer::with_signatures(vec![Box::new(NeedleSignature::new(
            Language::Batch,
            &["REM "],
        ))]);
        assert_eq!(sniffer.classify("REM comment"), Language::Batch);
        assert_eq!(sniffer.classify("print(1)"), Language::Unknown);
    }
}
