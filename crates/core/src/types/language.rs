use crate::error::{Error, Result};
use crate::impl_case_insensitive_names;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Language guessed for a snippet.
///
/// `Bash` can be detected but has no execution strategy, so it is reported
/// the same way as `Unknown` when a run is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Cpp,
    Python,
    JavaScript,
    PowerShell,
    Batch,
    Bash,
    Unknown,
}

impl_case_insensitive_names!(
    Language,
    C => "c",
    Cpp => "cpp" | "c++" | "cxx" | "cc",
    Python => "python" | "py",
    JavaScript => "javascript" | "js" | "node",
    PowerShell => "powershell" | "ps1" | "pwsh",
    Batch => "batch" | "bat" | "cmd",
    Bash => "bash" | "sh",
    Unknown => "unknown"
);

impl Language {
    /// Languages with an execution strategy, in the order they are advertised
    pub const SUPPORTED: [Language; 6] = [
        Language::C,
        Language::Cpp,
        Language::Python,
        Language::JavaScript,
        Language::PowerShell,
        Language::Batch,
    ];

    /// Lowercase tag used in output and configuration
    pub fn tag(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::PowerShell => "powershell",
            Language::Batch => "batch",
            Language::Bash => "bash",
            Language::Unknown => "unknown",
        }
    }

    /// Human readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::PowerShell => "PowerShell",
            Language::Batch => "Batch",
            Language::Bash => "Bash",
            Language::Unknown => "Unknown",
        }
    }

    /// File name the snippet is written to inside a workspace
    pub fn source_file_name(self) -> Option<&'static str> {
        match self {
            Language::C => Some("code.c"),
            Language::Cpp => Some("code.cpp"),
            Language::Python => Some("code.py"),
            Language::JavaScript => Some("code.js"),
            Language::PowerShell => Some("code.ps1"),
            Language::Batch => Some("code.bat"),
            Language::Bash | Language::Unknown => None,
        }
    }

    pub fn is_executable(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Needs a compile step before it can run
    pub fn is_compiled(self) -> bool {
        matches!(self, Language::C | Language::Cpp)
    }

    /// "C, C++, Python, JavaScript, PowerShell, Batch"
    pub fn supported_list() -> String {
        Self::SUPPORTED
            .iter()
            .map(|language| language.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("C++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!("node".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("PWSH".parse::<Language>().unwrap(), Language::PowerShell);
        assert_eq!("bat".parse::<Language>().unwrap(), Language::Batch);
        assert!(matches!(
            "cobol".parse::<Language>(),
            Err(Error::UnsupportedLanguage(name)) if name == "cobol"
        ));
    }

    #[test]
    fn test_tag_round_trips_through_serde() {
        for language in Language::SUPPORTED {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{}\"", language.tag()));
            let back: Language = serde_json::from_str(&json).unwrap();
            assert_eq!(back, language);
        }
    }

    #[test]
    fn test_bash_is_detectable_but_not_executable() {
        assert!(!Language::Bash.is_executable());
        assert!(!Language::Unknown.is_executable());
        assert_eq!(Language::Bash.source_file_name(), None);
        assert!(Language::Batch.is_executable());
    }

    #[test]
    fn test_supported_list() {
        assert_eq!(
            Language::supported_list(),
            "C, C++, Python, JavaScript, PowerShell, Batch"
        );
    }
}
