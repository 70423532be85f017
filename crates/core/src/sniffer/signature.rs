use crate::types::Language;

/// Trait for recognising a language from raw source text
pub trait Signature: Send + Sync {
    fn language(&self) -> Language;

    /// Return the needle that matched, if any
    fn find(&self, source: &str) -> Option<&'static str>;
}

/// Matches when the source contains any of a fixed set of substrings.
///
/// Needles are checked in order and compared case-sensitively.
#[derive(Debug, Clone)]
pub struct NeedleSignature {
    language: Language,
    needles: &'static [&'static str],
}

impl NeedleSignature {
    pub const fn new(language: Language, needles: &'static [&'static str]) -> Self {
        Self { language, needles }
    }
}

impl Signature for NeedleSignature {
    fn language(&self) -> Language {
        self.language
    }

    fn find(&self, source: &str) -> Option<&'static str> {
        self.needles
            .iter()
            .copied()
            .find(|needle| source.contains(needle))
    }
}

/// Built-in signatures in priority order. Later entries only fire when every
/// earlier one missed, so `"#include"` alone means C only because the C++
/// markers were checked first.
pub const DEFAULT_SIGNATURES: [NeedleSignature; 7] = [
    NeedleSignature::new(Language::PowerShell, &["Write-Host", "Get-", "$"]),
    NeedleSignature::new(Language::JavaScript, &["console.log", "const ", "function "]),
    NeedleSignature::new(Language::Python, &["print(", "import ", "def "]),
    NeedleSignature::new(Language::Cpp, &["#include <iostream>", "std::"]),
    NeedleSignature::new(Language::C, &["#include"]),
    NeedleSignature::new(Language::Batch, &["@echo off", "setlocal"]),
    NeedleSignature::new(Language::Bash, &["#!/bin/bash"]),
];
