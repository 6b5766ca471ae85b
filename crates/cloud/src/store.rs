//! Storage client construction.
//!
//! Builds a bucket-scoped `object_store` client for the publish engine.
//! Explicit credentials override the ambient environment; without them the
//! client falls back to whatever the environment provides.

use std::sync::Arc;

use object_store::ObjectStore;
use object_store::aws::AmazonS3Builder;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Caller-supplied provider credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

/// Error type for storage client construction.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create storage client: {0}")]
    ClientCreation(String),
}

/// Creates a storage client scoped to one bucket in one region.
pub fn build_store(
    region: &str,
    bucket: &str,
    credentials: Option<&Credentials>,
) -> Result<Arc<dyn ObjectStore>, StoreError> {
    let mut builder = AmazonS3Builder::from_env()
        .with_region(region)
        .with_bucket_name(bucket);

    if let Some(creds) = credentials {
        builder = builder
            .with_access_key_id(&creds.access_key_id)
            .with_secret_access_key(&creds.secret_access_key);
        if let Some(token) = &creds.session_token {
            builder = builder.with_token(token);
        }
    }

    let store = builder
        .build()
        .map_err(|e| StoreError::ClientCreation(e.to_string()))?;

    info!(region = %region, bucket = %bucket, "storage client created");

    Ok(Arc::new(store))
}
