use super::log_tool_failure;
use crate::error::{IcieError, ToolError};
use crate::host::{Notification, Phase, ProgressEvent};
use crate::session::Session;
use crate::tool::{ToolInvocation, ToolOutput};
use std::path::Path;

const TITLE: &str = "ICIE Build";

/// Terminal state of a build run.
#[derive(Debug)]
pub enum BuildOutcome {
    Succeeded(ToolOutput),
    Failed(ToolError),
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Succeeded(_))
    }

    pub fn phase(&self) -> Phase {
        match self {
            BuildOutcome::Succeeded(_) => Phase::Succeeded,
            BuildOutcome::Failed(_) => Phase::Failed,
        }
    }
}

// --- COMMAND: Build ---
pub async fn build_solution(session: &Session) -> Result<BuildOutcome, IcieError> {
    let source = session.require(TITLE, session.workspace().source())?;
    let tool = session.require(TITLE, session.tool_path())?;
    tracing::info!(source = %source.display(), "build requested");

    Ok(compile(session, &tool, &source).await)
}

/// Saves every document, then runs `<tool> build <source>`.
///
/// Always reaches a terminal phase and emits exactly one notification.
pub(crate) async fn compile(session: &Session, tool: &Path, source: &Path) -> BuildOutcome {
    let reporter = session.reporter();

    reporter.progress(ProgressEvent::new(TITLE, Phase::SavingDocuments));
    if let Err(e) = session.editor().save_all().await {
        tracing::warn!("saving open documents failed, compiling anyway: {:#}", e);
    }

    reporter.progress(ProgressEvent::new(TITLE, Phase::Compiling));
    let outcome = match session.runner().run(ToolInvocation::build(tool, source)).await {
        Ok(output) => BuildOutcome::Succeeded(output),
        Err(err) => {
            log_tool_failure(TITLE, &err);
            BuildOutcome::Failed(err)
        }
    };

    reporter.progress(ProgressEvent::new(TITLE, outcome.phase()));
    if outcome.is_success() {
        reporter.notify(Notification::info(format!("{} finished", TITLE)));
    } else {
        reporter.notify(Notification::error(format!("{} failed", TITLE)));
    }
    outcome
}
