use super::Editor;
use async_trait::async_trait;
use std::path::PathBuf;

/// Editor backed by plain files on disk, used when running from a terminal.
///
/// Files on disk are always saved, so `save_all` has nothing to do.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceEditor {
    active: Option<PathBuf>,
    root: Option<PathBuf>,
}

impl WorkspaceEditor {
    pub fn new(active: Option<PathBuf>, root: Option<PathBuf>) -> Self {
        Self { active, root }
    }
}

#[async_trait]
impl Editor for WorkspaceEditor {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    async fn save_all(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
