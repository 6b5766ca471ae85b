//! Publish engine boundary.
//!
//! `Publisher` is implemented by the transfer engine that uploads,
//! fingerprints and prunes assets. Using a trait keeps the pipeline
//! decoupled from the transfer implementation and testable with mocks.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use object_store::ObjectStore;
use skylift_project::FingerprintSettings;

use crate::reporter::ProgressReporter;

/// Fully resolved payload handed to the publish engine.
pub struct PublishJob {
    /// Physical identity of the target bucket.
    pub bucket: String,
    pub fingerprint: FingerprintSettings,
    /// Absolute path of the source folder.
    pub folder: PathBuf,
    pub full_deploy: bool,
    pub prefix: Option<String>,
    pub prune: bool,
    pub region: String,
    /// Bucket-scoped storage client.
    pub store: Arc<dyn ObjectStore>,
    pub reporter: Arc<dyn ProgressReporter>,
    pub verbose: bool,
}

/// Failure reported by the publish engine, surfaced verbatim.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct PublishError(pub String);

/// Abstract publish engine.
pub trait Publisher: Send + Sync {
    /// Publishes the job's folder to its bucket. One completion per call;
    /// retries belong to the implementation, never to the pipeline.
    fn publish(
        &self,
        job: PublishJob,
    ) -> Pin<Box<dyn Future<Output = Result<(), PublishError>> + Send + '_>>;
}
