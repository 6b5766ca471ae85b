//! Static deploy pipeline: publish a project's static assets to the
//! object-storage bucket of its provisioned stack.
//!
//! This crate implements the **sequencing logic** for static deploys. It is
//! a library crate with no provider SDK or transfer dependencies — the
//! embedding application provides a [`ResourceLookup`](skylift_cloud::ResourceLookup)
//! for stack queries and a [`Publisher`] that performs the actual upload,
//! fingerprinting and pruning.
//!
//! # Pipeline
//!
//! 1. **Resolve parameters** — fingerprint/ignore rules, prune flag, source
//!    folder, publish prefix; bails out (a successful no-op, not an error)
//!    when the project publishes no static assets
//! 2. **Resolve bucket** — discover the stack's static bucket, skipped when
//!    the caller already names one
//! 3. **Dispatch** — build the storage client and hand the resolved job to
//!    the publisher
//!
//! Stages run strictly in order; the first failure aborts the rest.

pub mod error;
pub mod publisher;
pub mod reporter;
pub mod request;
pub mod static_deploy;

// Re-export primary types for convenience.
pub use error::DeployError;
pub use publisher::{PublishError, PublishJob, Publisher};
pub use reporter::{LogReporter, NullReporter, ProgressReporter};
pub use request::{DeployRequest, derive_stack_name};
pub use static_deploy::{DeployOutcome, ResolvedStatic, SkipReason, StaticDeployer, StoreFactory};
