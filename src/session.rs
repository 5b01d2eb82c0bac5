//! The per-session context shared by the `build` and `test` commands.

use crate::build::{self, BuildOutcome};
use crate::config::IcieConfig;
use crate::error::IcieError;
use crate::host::{Editor, Notification, Reporter};
use crate::paths;
use crate::tool::ToolRunner;
use std::path::PathBuf;
use std::sync::Arc;

/// Collaborators and configuration for one host session.
///
/// Holds no per-run state: every command resolves a fresh
/// [`WorkspaceContext`] because the active document may have changed.
#[derive(Clone)]
pub struct Session {
    editor: Arc<dyn Editor>,
    reporter: Arc<dyn Reporter>,
    runner: Arc<dyn ToolRunner>,
    config: IcieConfig,
}

impl Session {
    pub fn new(
        editor: Arc<dyn Editor>,
        reporter: Arc<dyn Reporter>,
        runner: Arc<dyn ToolRunner>,
        config: IcieConfig,
    ) -> Self {
        Self {
            editor,
            reporter,
            runner,
            config,
        }
    }

    /// Saves all documents, then compiles the active document.
    pub async fn build(&self) -> Result<BuildOutcome, IcieError> {
        build::build_solution(self).await
    }

    /// Rebuilds if needed, then runs the tests. `Ok(true)` when the tool reports success.
    pub async fn test(&self) -> Result<bool, IcieError> {
        build::run_tests(self).await
    }

    pub fn config(&self) -> &IcieConfig {
        &self.config
    }

    pub fn workspace(&self) -> WorkspaceContext {
        WorkspaceContext {
            source: self.editor.active_document(),
            test_directory: self
                .editor
                .workspace_root()
                .map(|root| paths::test_directory(&root, &self.config)),
        }
    }

    pub fn tool_path(&self) -> Result<PathBuf, IcieError> {
        paths::tool_path(&self.config)
    }

    pub(crate) fn editor(&self) -> &dyn Editor {
        self.editor.as_ref()
    }

    pub(crate) fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub(crate) fn runner(&self) -> &dyn ToolRunner {
        self.runner.as_ref()
    }

    /// Surfaces a precondition failure to the user and hands it back for propagation.
    pub(crate) fn reject(&self, title: &str, err: IcieError) -> IcieError {
        tracing::error!("{}: {}", title, err);
        self.reporter
            .notify(Notification::error(format!("{}: {}", title, err)));
        err
    }

    pub(crate) fn require<T>(
        &self,
        title: &str,
        value: Result<T, IcieError>,
    ) -> Result<T, IcieError> {
        value.map_err(|err| self.reject(title, err))
    }
}

/// Active source and test directory as seen by the editor at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    pub source: Option<PathBuf>,
    pub test_directory: Option<PathBuf>,
}

impl WorkspaceContext {
    pub fn source(&self) -> Result<PathBuf, IcieError> {
        self.source.clone().ok_or(IcieError::NoActiveDocument)
    }

    pub fn test_directory(&self) -> Result<PathBuf, IcieError> {
        self.test_directory.clone().ok_or(IcieError::NoWorkspaceRoot)
    }
}
