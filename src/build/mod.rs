//! Build and test orchestration on top of the compiler-driver.

mod core;

pub use self::core::{BuildOutcome, build_solution};
pub use test::run_tests;

use crate::error::ToolError;

/// Logs the full detail of a failed tool run. Users only see a short notification.
fn log_tool_failure(title: &str, err: &ToolError) {
    match err {
        ToolError::NonZeroExit { stdout, stderr, .. } => tracing::error!(
            stdout = %String::from_utf8_lossy(stdout),
            stderr = %String::from_utf8_lossy(stderr),
            "{}: {}",
            title,
            err
        ),
        ToolError::LaunchFailed { .. } => tracing::error!("{}: {}", title, err),
    }
}
