//! Fingerprint settings resolution.
//!
//! Reads the `static` section of the raw project configuration and produces
//! the fingerprint mode plus the list of files the publisher must skip.
//! Resolution is pure and synchronous — the actual content hashing lives in
//! the publish engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How static assets are fingerprinted on publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintMode {
    /// Assets are published under their plain names.
    #[default]
    Disabled,
    /// The publish engine content-hashes asset names.
    Enabled,
    /// Assets arrive pre-fingerprinted by an external build step.
    External,
}

/// Resolved fingerprint rules for one deploy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintSettings {
    pub mode: FingerprintMode,
    /// File names excluded from publishing.
    pub ignore: Vec<String>,
}

impl FingerprintSettings {
    /// Resolves fingerprint rules from the raw project configuration.
    ///
    /// Recognizes `fingerprint: true`, `fingerprint: "external"`, and an
    /// `ignore` entry holding either a single name or a list of names.
    /// Anything else falls back to disabled fingerprinting with an empty
    /// ignore list.
    pub fn resolve(raw: &Value) -> Self {
        let section = raw.get("static");

        let mode = match section.and_then(|s| s.get("fingerprint")) {
            Some(Value::Bool(true)) => FingerprintMode::Enabled,
            Some(Value::String(s)) if s == "external" => FingerprintMode::External,
            _ => FingerprintMode::Disabled,
        };

        let ignore = match section.and_then(|s| s.get("ignore")) {
            Some(Value::String(name)) => vec![name.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        };

        Self { mode, ignore }
    }
}
