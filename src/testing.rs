//! In-memory collaborators for unit tests.

use crate::error::ToolError;
use crate::host::{Editor, Notification, ProgressEvent, Reporter};
use crate::tool::{ToolInvocation, ToolOutput, ToolRunner};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub struct FakeEditor {
    active: Mutex<Option<PathBuf>>,
    root: Option<PathBuf>,
    save_fails: bool,
    saves: Mutex<usize>,
}

impl FakeEditor {
    pub fn new(active: Option<impl Into<PathBuf>>, root: Option<impl Into<PathBuf>>) -> Self {
        Self {
            active: Mutex::new(active.map(Into::into)),
            root: root.map(Into::into),
            save_fails: false,
            saves: Mutex::new(0),
        }
    }

    pub fn failing_save(mut self) -> Self {
        self.save_fails = true;
        self
    }

    pub fn set_active(&self, active: Option<impl Into<PathBuf>>) {
        *self.active.lock().unwrap() = active.map(Into::into);
    }

    pub fn saves(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl Editor for FakeEditor {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.lock().unwrap().clone()
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    async fn save_all(&self) -> anyhow::Result<()> {
        *self.saves.lock().unwrap() += 1;
        if self.save_fails {
            anyhow::bail!("document is read-only");
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Scripted {
    Exit(i32),
    LaunchFailure,
}

/// Records every invocation; exits 0 unless told otherwise per subcommand.
#[derive(Default)]
pub struct FakeRunner {
    script: HashMap<&'static str, Scripted>,
    invocations: Mutex<Vec<ToolInvocation>>,
}

impl FakeRunner {
    pub fn exit_with(mut self, subcommand: &'static str, code: i32) -> Self {
        self.script.insert(subcommand, Scripted::Exit(code));
        self
    }

    pub fn unlaunchable(mut self, subcommand: &'static str) -> Self {
        self.script.insert(subcommand, Scripted::LaunchFailure);
        self
    }

    pub fn subcommands(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(ToolInvocation::subcommand)
            .collect()
    }

    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|inv| {
                inv.args
                    .iter()
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect()
            })
            .collect()
    }
}

#[async_trait]
impl ToolRunner for FakeRunner {
    async fn run(&self, invocation: ToolInvocation) -> Result<ToolOutput, ToolError> {
        let subcommand = invocation.subcommand();
        let program = invocation.program.clone();
        self.invocations.lock().unwrap().push(invocation);

        match self.script.get(subcommand.as_str()).copied() {
            None | Some(Scripted::Exit(0)) => Ok(ToolOutput {
                code: Some(0),
                stdout: b"ok".to_vec(),
                stderr: vec![],
            }),
            Some(Scripted::Exit(code)) => Err(ToolError::NonZeroExit {
                code: Some(code),
                stdout: vec![],
                stderr: b"error: expected ';'".to_vec(),
            }),
            Some(Scripted::LaunchFailure) => Err(ToolError::LaunchFailed {
                program,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    progress: Mutex<Vec<ProgressEvent>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingReporter {
    pub fn progress_events(&self) -> Vec<ProgressEvent> {
        self.progress.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn progress(&self, event: ProgressEvent) {
        self.progress.lock().unwrap().push(event);
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
