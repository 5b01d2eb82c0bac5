//! Error taxonomy for the orchestrators.
//!
//! Precondition failures ([`IcieError`]) abort a command before any I/O.
//! Compiler-driver failures ([`ToolError`]) are resolved by the
//! orchestrator that issued the invocation and never escape it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IcieError {
    #[error("no active document")]
    NoActiveDocument,
    #[error("no workspace root")]
    NoWorkspaceRoot,
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("could not find home directory")]
    NoHomeDirectory,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch {}: {source}", .program.display())]
    LaunchFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("tool exited with {}", describe_exit(.code))]
    NonZeroExit {
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
}

impl ToolError {
    /// Exit code of the failed run, if the tool ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ToolError::LaunchFailed { .. } => None,
            ToolError::NonZeroExit { code, .. } => *code,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
