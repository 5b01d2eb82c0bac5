use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-workspace configuration file.
pub const CONFIG_FILE: &str = "icie.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct IcieConfig {
    #[serde(default)]
    pub solution: SolutionConfig,
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub test: TestConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionConfig {
    #[serde(default = "default_stem")]
    pub stem: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_artifact_extension")]
    pub artifact_extension: String,
}

impl Default for SolutionConfig {
    fn default() -> Self {
        Self {
            stem: default_stem(),
            extension: default_extension(),
            artifact_extension: default_artifact_extension(),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ToolConfig {
    /// Overrides `~/.cargo/bin/ci`.
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TestConfig {
    /// Subdirectory of the workspace root holding the tests. The root itself when unset.
    pub directory: Option<String>,
}

fn default_stem() -> String {
    "main".to_string()
}

fn default_extension() -> String {
    "cpp".to_string()
}

fn default_artifact_extension() -> String {
    "e".to_string()
}

/// Loads `icie.toml` from the workspace root, falling back to defaults when absent.
pub fn load_config(workspace_root: &Path) -> Result<IcieConfig> {
    let path = workspace_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(IcieConfig::default());
    }
    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&config_str).with_context(|| {
        format!(
            "Failed to parse {} - check for syntax errors (missing quotes, brackets)",
            path.display()
        )
    })
}
