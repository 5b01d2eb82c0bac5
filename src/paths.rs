//! Path resolution for the solution file, its executable, the tests
//! directory and the compiler-driver.
//!
//! Nothing here touches the filesystem. Missing context is reported as an
//! [`IcieError`] instead of falling back to a default.

use crate::config::IcieConfig;
use crate::error::IcieError;
use std::path::{Path, PathBuf};

/// Executable produced by `ci build` for `source`: same stem, artifact extension.
pub fn executable_for(source: &Path, artifact_extension: &str) -> PathBuf {
    source.with_extension(artifact_extension)
}

/// Location of the compiler-driver: the configured override, else `~/.cargo/bin/ci`.
pub fn tool_path(config: &IcieConfig) -> Result<PathBuf, IcieError> {
    if let Some(path) = &config.tool.path {
        return Ok(path.clone());
    }
    let home = dirs::home_dir().ok_or(IcieError::NoHomeDirectory)?;
    Ok(default_tool_path(&home))
}

fn default_tool_path(home: &Path) -> PathBuf {
    let bin_name = format!("ci{}", std::env::consts::EXE_SUFFIX);
    home.join(".cargo").join("bin").join(bin_name)
}

pub fn test_directory(workspace_root: &Path, config: &IcieConfig) -> PathBuf {
    match &config.test.directory {
        Some(dir) => workspace_root.join(dir),
        None => workspace_root.to_path_buf(),
    }
}

/// Default solution file in a workspace, e.g. `<root>/main.cpp`.
pub fn solution(workspace_root: &Path, config: &IcieConfig) -> PathBuf {
    workspace_root
        .join(&config.solution.stem)
        .with_extension(&config.solution.extension)
}
