//! Compiler-driver invocation.
//!
//! A [`ToolInvocation`] describes one run of the external tool. It is
//! consumed by [`ToolRunner::run`], which waits for the process to exit and
//! hands back the captured output untouched.

use crate::error::ToolError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

#[derive(Debug, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    /// `<tool> build <source>`
    pub fn build(tool: &Path, source: &Path) -> Self {
        Self {
            program: tool.to_path_buf(),
            args: vec!["build".into(), source.into()],
        }
    }

    /// `<tool> test <executable> <test_dir>`
    pub fn test(tool: &Path, executable: &Path, test_dir: &Path) -> Self {
        Self {
            program: tool.to_path_buf(),
            args: vec!["test".into(), executable.into(), test_dir.into()],
        }
    }

    /// First argument, used as a label in logs.
    pub fn subcommand(&self) -> String {
        self.args
            .first()
            .map(|a| a.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: ToolInvocation) -> Result<ToolOutput, ToolError>;
}

/// Runs the tool as a child process with stdin closed and both output streams captured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: ToolInvocation) -> Result<ToolOutput, ToolError> {
        let ToolInvocation { program, args } = invocation;
        tracing::debug!(program = %program.display(), ?args, "spawning tool");

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ToolError::LaunchFailed {
                program: program.clone(),
                source,
            })?;

        let code = output.status.code();
        tracing::debug!(
            program = %program.display(),
            ?code,
            stdout = %String::from_utf8_lossy(&output.stdout),
            stderr = %String::from_utf8_lossy(&output.stderr),
            "tool exited"
        );

        if output.status.success() {
            Ok(ToolOutput {
                code,
                stdout: output.stdout,
                stderr: output.stderr,
            })
        } else {
            Err(ToolError::NonZeroExit {
                code,
                stdout: output.stdout,
                stderr: output.stderr,
            })
        }
    }
}
