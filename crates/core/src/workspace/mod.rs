//! Per-run temporary workspace.
//!
//! Every run gets its own uniquely named directory. The directory is removed
//! when the [`RunWorkspace`] is dropped or closed, on success and failure
//! alike, unless the caller asks to [`persist`](RunWorkspace::persist) it.

use std::env::consts::EXE_SUFFIX;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::types::Language;

const WORKSPACE_PREFIX: &str = "polyrun_";
const BINARY_STEM: &str = "code";

/// Path of the source file for `language` inside `workspace_dir`
pub fn source_path(workspace_dir: &Path, language: Language) -> Option<PathBuf> {
    language
        .source_file_name()
        .map(|name| workspace_dir.join(name))
}

/// Path the compiled binary is written to inside `workspace_dir`
pub fn binary_path(workspace_dir: &Path) -> PathBuf {
    workspace_dir.join(binary_file_name())
}

pub fn binary_file_name() -> String {
    format!("{BINARY_STEM}{EXE_SUFFIX}")
}

/// Write `source` verbatim to the conventional file for `language`
pub fn write_source(workspace_dir: &Path, language: Language, source: &str) -> Result<PathBuf> {
    let path = source_path(workspace_dir, language)
        .ok_or_else(|| Error::UnsupportedLanguage(language.tag().to_string()))?;
    fs::write(&path, source)?;
    tracing::trace!("Wrote {} bytes to {}", source.len(), path.display());
    Ok(path)
}

#[derive(Debug)]
pub struct RunWorkspace {
    dir: TempDir,
}

impl RunWorkspace {
    /// Create a fresh workspace under `root`, or the system temp dir
    pub fn create(root: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);

        let dir = match root {
            Some(root) => {
                fs::create_dir_all(root)?;
                builder.tempdir_in(root)?
            }
            None => builder.tempdir()?,
        };

        tracing::debug!("Created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_source(&self, language: Language, source: &str) -> Result<PathBuf> {
        write_source(self.path(), language, source)
    }

    /// Keep the directory on disk and hand back its path
    pub fn persist(self) -> PathBuf {
        let path = self.dir.keep();
        tracing::warn!("Keeping workspace {}", path.display());
        path
    }

    /// Remove the directory now, reporting failures instead of ignoring them
    pub fn close(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.dir.close()?;
        tracing::debug!("Removed workspace {}", path.display());
        Ok(())
    }
}
