//! Seams to the host environment: the editor that owns the documents and
//! the UI that displays progress and notifications.

mod editor;
mod terminal;

pub use editor::WorkspaceEditor;
pub use terminal::TerminalReporter;

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// Document and workspace model of the host editor.
#[async_trait]
pub trait Editor: Send + Sync {
    /// Path of the document the user is working on.
    fn active_document(&self) -> Option<PathBuf>;

    fn workspace_root(&self) -> Option<PathBuf>;

    /// Persist every open document with unsaved changes.
    async fn save_all(&self) -> anyhow::Result<()>;
}

/// Sink for user-facing progress and notifications.
pub trait Reporter: Send + Sync {
    fn progress(&self, event: ProgressEvent);
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SavingDocuments,
    Compiling,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn percent(self) -> u8 {
        match self {
            Phase::SavingDocuments => 0,
            Phase::Compiling => 50,
            Phase::Succeeded | Phase::Failed => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::SavingDocuments => "Saving changes",
            Phase::Compiling => "Compiling",
            Phase::Succeeded => "Finished",
            Phase::Failed => "Failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Title of the operation, e.g. "ICIE Build".
    pub title: &'static str,
    pub phase: Phase,
    pub percent: u8,
    pub message: &'static str,
}

impl ProgressEvent {
    pub fn new(title: &'static str, phase: Phase) -> Self {
        Self {
            title,
            phase,
            percent: phase.percent(),
            message: phase.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
