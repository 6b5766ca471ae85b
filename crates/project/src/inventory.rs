//! Loaded project inventory as supplied by the configuration loader.

use serde::{Deserialize, Serialize};

/// A loaded project, read-only for the duration of a deploy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInventory {
    /// Application name, the basis for stack identity derivation.
    pub app: String,
    /// Static-asset settings; `None` means the project publishes no
    /// static assets and the pipeline has nothing to do.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_assets: Option<StaticSettings>,
    /// Raw project configuration, consumed by the fingerprint resolver.
    #[serde(default)]
    pub raw: serde_json::Value,
}

/// Per-project static publishing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticSettings {
    /// Source folder, relative to the project working directory.
    pub folder: String,
    /// Project-level default for pruning remote files absent locally.
    #[serde(default)]
    pub prune: bool,
    /// Project-level default publish-path prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}
