//! Coach configuration, loaded from `.vbcoach/config.yaml`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vb_core::Role;
use vb_tools::DisplayMode;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Role used when `--role` is omitted
    #[serde(default = "default_role")]
    pub default_role: Role,

    /// Wizard rendering: `full` shows every node, `focused` dims unvisited ones
    #[serde(default = "default_display_mode")]
    pub display_mode: DisplayMode,

    /// Output format for `decide` and `trace`
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_role() -> Role {
    Role::OutsideHitter
}

fn default_display_mode() -> DisplayMode {
    DisplayMode::Focused
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            display_mode: default_display_mode(),
            output: OutputFormat::default(),
        }
    }
}

impl CoachConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from project root (looks for .vbcoach/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".vbcoach/config.yaml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
