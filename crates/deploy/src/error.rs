//! Deploy pipeline error types.

use std::path::PathBuf;

use skylift_cloud::{LookupError, StoreError};

use crate::publisher::PublishError;

/// Errors produced by the static deploy pipeline.
///
/// Each variant maps to one stage; the first error aborts all later stages.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("static folder not found: {}", .0.display())]
    StaticFolderMissing(PathBuf),

    #[error("working directory unavailable: {0}")]
    WorkDir(#[from] std::io::Error),

    #[error("resource lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The stack exists but its resources carry no static bucket — the
    /// provisioned stack does not match the expected template.
    #[error("stack {stack} has no static bucket resource")]
    StaticBucketMissing { stack: String },

    #[error("storage client error: {0}")]
    Store(#[from] StoreError),

    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}
