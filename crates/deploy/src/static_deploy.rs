//! Static deploy pipeline.
//!
//! Three stages run strictly in order: resolve parameters, resolve the
//! target bucket, dispatch to the publish engine. The first failure aborts
//! the rest. A project without static settings (or a dry run) is a
//! successful no-op, carried in the result type rather than the error
//! channel.

use std::path::PathBuf;
use std::sync::Arc;

use object_store::ObjectStore;
use skylift_cloud::{
    Credentials, ResourceLookup, ResourceQuery, StoreError, build_store, find_static_bucket,
};
use skylift_project::{FingerprintSettings, ProjectInventory};
use tracing::{debug, error, info};

use crate::error::DeployError;
use crate::publisher::{PublishJob, Publisher};
use crate::reporter::{LogReporter, ProgressReporter};
use crate::request::DeployRequest;

/// Builds a bucket-scoped storage client from region, bucket and optional
/// credentials. Injectable so tests can substitute an in-memory store.
pub type StoreFactory = Box<
    dyn Fn(&str, &str, Option<&Credentials>) -> Result<Arc<dyn ObjectStore>, StoreError>
        + Send
        + Sync,
>;

/// Terminal outcome of a deploy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Assets were handed to the publish engine and it completed.
    Published,
    /// Nothing to do — a successful no-op.
    Skipped(SkipReason),
}

/// Why a deploy completed without publishing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Dry runs are reported and skipped; no diffing is performed.
    DryRun,
    /// The project declares no static-asset settings.
    NoStaticSettings,
}

/// Mid-pipeline value produced by parameter resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStatic {
    pub fingerprint: FingerprintSettings,
    /// Absolute source folder path, verified to exist.
    pub folder: PathBuf,
    /// Request flag OR project default.
    pub prune: bool,
    /// Request override, else project default, else none.
    pub prefix: Option<String>,
}

/// Orchestrates static asset deployment for one project.
///
/// Collaborators are injected at construction; the reporter, storage client
/// factory and working directory carry defaults and are overridable for
/// embedding and tests. The deployer holds no per-invocation state — each
/// [`deploy_static`](Self::deploy_static) call owns its resolved parameters.
pub struct StaticDeployer {
    lookup: Arc<dyn ResourceLookup>,
    publisher: Arc<dyn Publisher>,
    reporter: Arc<dyn ProgressReporter>,
    store_factory: StoreFactory,
    work_dir: Option<PathBuf>,
}

impl StaticDeployer {
    /// Creates a deployer with the default reporter and storage factory.
    pub fn new(lookup: Arc<dyn ResourceLookup>, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            lookup,
            publisher,
            reporter: Arc::new(LogReporter),
            store_factory: Box::new(|region, bucket, credentials| {
                build_store(region, bucket, credentials)
            }),
            work_dir: None,
        }
    }

    /// Replaces the progress reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Replaces the storage client factory.
    pub fn with_store_factory(mut self, factory: StoreFactory) -> Self {
        self.store_factory = factory;
        self
    }

    /// Resolves the static folder against `dir` instead of the process
    /// working directory.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Deploys the project's static assets.
    ///
    /// Completes exactly once: `Ok(Published)` after a successful publish,
    /// `Ok(Skipped(_))` when there is nothing to do, or the first stage
    /// error otherwise.
    pub async fn deploy_static(
        &self,
        inventory: &ProjectInventory,
        request: &DeployRequest,
    ) -> Result<DeployOutcome, DeployError> {
        if request.dry_run {
            // TODO: implement a real dry-run diff against the bucket contents.
            self.reporter
                .status("Static dry run not yet available, skipping static deploy...");
            return Ok(DeployOutcome::Skipped(SkipReason::DryRun));
        }

        self.reporter.status("Deploying static assets...");

        match self.run(inventory, request).await {
            Ok(outcome) => {
                info!(app = %inventory.app, ?outcome, "static deploy completed");
                Ok(outcome)
            }
            Err(e) => {
                error!(app = %inventory.app, error = %e, "static deploy failed");
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        inventory: &ProjectInventory,
        request: &DeployRequest,
    ) -> Result<DeployOutcome, DeployError> {
        let Some(resolved) = self.resolve_params(inventory, request)? else {
            debug!(app = %inventory.app, "project has no static settings, nothing to deploy");
            return Ok(DeployOutcome::Skipped(SkipReason::NoStaticSettings));
        };

        let bucket = self.resolve_bucket(inventory, request).await?;
        self.dispatch(resolved, bucket, request).await?;

        Ok(DeployOutcome::Published)
    }

    /// Stage 1: resolve fingerprint rules, prune flag, folder and prefix.
    ///
    /// Returns `None` when the project declares no static settings.
    fn resolve_params(
        &self,
        inventory: &ProjectInventory,
        request: &DeployRequest,
    ) -> Result<Option<ResolvedStatic>, DeployError> {
        let Some(settings) = &inventory.static_assets else {
            return Ok(None);
        };

        let fingerprint = FingerprintSettings::resolve(&inventory.raw);
        let prune = request.prune || settings.prune;

        let work_dir = match &self.work_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let folder = work_dir.join(&settings.folder);
        if !folder.exists() {
            return Err(DeployError::StaticFolderMissing(folder));
        }

        let prefix = request.prefix.clone().or_else(|| settings.prefix.clone());

        Ok(Some(ResolvedStatic {
            fingerprint,
            folder,
            prune,
            prefix,
        }))
    }

    /// Stage 2: determine the bucket's physical identity.
    ///
    /// Pass-through when the request names a bucket; otherwise queries the
    /// stack's resource inventory exactly once.
    async fn resolve_bucket(
        &self,
        inventory: &ProjectInventory,
        request: &DeployRequest,
    ) -> Result<String, DeployError> {
        if let Some(bucket) = &request.bucket {
            return Ok(bucket.clone());
        }

        let stack_name = request.resolve_stack_name(&inventory.app);
        debug!(stack = %stack_name, region = %request.region, "resolving static bucket");

        let resources = self
            .lookup
            .resources(ResourceQuery {
                credentials: request.credentials.clone(),
                region: request.region.clone(),
                stack_name: stack_name.clone(),
            })
            .await?;

        match find_static_bucket(&resources) {
            Some(resource) => Ok(resource.physical_id.clone()),
            None => Err(DeployError::StaticBucketMissing { stack: stack_name }),
        }
    }

    /// Stage 3: build the storage client and hand off to the publish engine.
    async fn dispatch(
        &self,
        resolved: ResolvedStatic,
        bucket: String,
        request: &DeployRequest,
    ) -> Result<(), DeployError> {
        let store = (self.store_factory)(&request.region, &bucket, request.credentials.as_ref())?;

        let job = PublishJob {
            bucket,
            fingerprint: resolved.fingerprint,
            folder: resolved.folder,
            full_deploy: request.full_deploy,
            prefix: resolved.prefix,
            prune: resolved.prune,
            region: request.region.clone(),
            store,
            reporter: Arc::clone(&self.reporter),
            verbose: request.verbose,
        };

        self.publisher.publish(job).await?;
        Ok(())
    }
}
