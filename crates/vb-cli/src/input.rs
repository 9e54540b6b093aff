//! Context files given on the command line.

use std::path::Path;

use anyhow::{Context as _, Result};
use vb_core::Context;

/// Load a context from JSON, or YAML when the extension says so.
pub fn load_context(path: &Path) -> Result<Context> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read context from {}", path.display()))?;

    let ctx = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML context from {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON context from {}", path.display()))?,
    };
    tracing::debug!(path = %path.display(), "context loaded");
    Ok(ctx)
}
