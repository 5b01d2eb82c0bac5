//! # icie - build and test a single solution file
//!
//! icie drives the external `ci` compiler-driver on behalf of an editor: it
//! saves open documents, compiles the active source file, and runs the tests
//! against the resulting executable, rebuilding first only when the source
//! is newer than the executable.
//!
//! ## Quick Start
//!
//! ```bash
//! # Compile ./main.cpp into ./main.e
//! icie build
//!
//! # Rebuild if needed, then run ci against the tests
//! icie test
//! ```
//!
//! ## Module Organization
//!
//! - [`session`] - Per-session context exposing the `build` and `test` commands
//! - [`build`] - Build and test orchestrators
//! - [`staleness`] - Source/executable timestamp comparison
//! - [`tool`] - Compiler-driver process invocation
//! - [`host`] - Editor and reporter seams
//! - [`paths`] - Path resolution
//! - [`config`] - Configuration parsing (`icie.toml`)

/// Build and test orchestration.
pub mod build;

/// Configuration file parsing (`icie.toml`).
pub mod config;

/// Error types.
pub mod error;

/// Editor and UI collaborators.
pub mod host;

/// Solution, executable, tests and tool paths.
pub mod paths;

/// Host-session context.
pub mod session;

/// Rebuild detection.
pub mod staleness;

/// External tool invocation.
pub mod tool;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{IcieError, ToolError};
pub use session::Session;
