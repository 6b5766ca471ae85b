//! Provisioned-stack resource access.
//!
//! The deploy pipeline needs two things from the cloud: the resource
//! inventory of a named stack (to discover the static bucket) and a storage
//! client scoped to that bucket. The lookup is a trait so the caller decides
//! how stacks are queried; the storage client is built with `object_store`.

pub mod resources;
pub mod store;

pub use resources::{
    BUCKET_RESOURCE_TYPE, LookupError, ResourceLookup, ResourceQuery, STATIC_BUCKET_LOGICAL_ID,
    StackResource, find_static_bucket,
};
pub use store::{Credentials, StoreError, build_store};
