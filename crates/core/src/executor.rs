//! One-shot run sessions: sniff, create a workspace, dispatch, clean up.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::sniffer::LanguageSniffer;
use crate::types::{ExecutionResult, Language};
use crate::workspace::RunWorkspace;

/// Everything a single run needs, passed explicitly instead of read from
/// shared state
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub source: String,
    /// Skip sniffing and use this language
    pub language: Option<Language>,
    pub keep_workspace: bool,
}

impl RunRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn keep_workspace(mut self, keep: bool) -> Self {
        self.keep_workspace = keep;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub language: Language,
    pub result: ExecutionResult,
    /// Set only when the workspace was kept on disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,
}

pub struct CodeExecutor {
    config: Config,
    sniffer: LanguageSniffer,
    dispatcher: Dispatcher,
}

impl CodeExecutor {
    pub fn new(config: Config) -> Self {
        let dispatcher = Dispatcher::new(&config);
        Self {
            config,
            sniffer: LanguageSniffer::default(),
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Language a request resolves to
    pub fn resolve_language(&self, request: &RunRequest) -> Language {
        request
            .language
            .unwrap_or_else(|| self.sniffer.classify(&request.source))
    }

    pub fn execute(&self, request: &RunRequest) -> RunReport {
        if request.source.is_empty() {
            return RunReport {
                language: Language::Unknown,
                result: ExecutionResult::no_code(),
                workspace: None,
            };
        }

        let language = self.resolve_language(request);
        tracing::info!("Executing {} snippet ({} bytes)", language, request.source.len());

        if !language.is_executable() {
            return RunReport {
                language,
                result: ExecutionResult::unsupported_language(language),
                workspace: None,
            };
        }

        let workspace = match RunWorkspace::create(self.config.workspace_root.as_deref()) {
            Ok(workspace) => workspace,
            Err(e) => {
                return RunReport {
                    language,
                    result: e.into(),
                    workspace: None,
                };
            }
        };

        let result = self
            .dispatcher
            .run(language, &request.source, workspace.path());

        let kept = if request.keep_workspace || self.config.keep_workspace {
            Some(workspace.persist())
        } else {
            if let Err(e) = workspace.close() {
                tracing::warn!("Failed to remove workspace: {}", e);
            }
            None
        };

        RunReport {
            language,
            result,
            workspace: kept,
        }
    }
}

impl Default for CodeExecutor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
