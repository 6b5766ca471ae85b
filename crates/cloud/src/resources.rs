//! Stack resource inventory boundary.
//!
//! `ResourceLookup` is implemented by the embedding application on top of
//! its infrastructure provider client. Using a trait keeps the deploy
//! pipeline decoupled from the provider SDK and testable with mocks.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::store::Credentials;

/// Resource type of an object-storage bucket in a provisioned stack.
pub const BUCKET_RESOURCE_TYPE: &str = "AWS::S3::Bucket";

/// Logical ID the infrastructure template assigns to the static bucket.
pub const STATIC_BUCKET_LOGICAL_ID: &str = "StaticBucket";

/// One provisioned resource of a stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackResource {
    pub resource_type: String,
    /// Template-level name of the resource.
    pub logical_id: String,
    /// Provider-assigned identity of the provisioned resource.
    pub physical_id: String,
}

/// Parameters for one stack resource query.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceQuery {
    pub credentials: Option<Credentials>,
    pub region: String,
    pub stack_name: String,
}

/// Errors from the resource inventory lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("stack not found: {0}")]
    StackNotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("resource lookup failed: {0}")]
    Service(String),
}

/// Abstract resource inventory of provisioned stacks.
pub trait ResourceLookup: Send + Sync {
    /// Lists the resources of the named stack.
    fn resources(
        &self,
        query: ResourceQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StackResource>, LookupError>> + Send + '_>>;
}

/// Finds the static bucket resource in a stack's resource list.
///
/// Matches on both resource type and logical ID; a stack provisioned from
/// the expected template carries exactly one such resource.
pub fn find_static_bucket(resources: &[StackResource]) -> Option<&StackResource> {
    resources.iter().find(|r| {
        r.resource_type == BUCKET_RESOURCE_TYPE && r.logical_id == STATIC_BUCKET_LOGICAL_ID
    })
}
