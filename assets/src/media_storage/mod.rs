//! Object store access: presigned read URLs and uploads

mod client;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::MediaStorage;

use crate::types::AssetResult;

/// Presigned URL with expiration information.
///
/// Handed out in responses only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    /// The presigned GET URL
    pub url: String,
    /// UTC timestamp when the URL stops granting access
    pub expires_at: DateTime<Utc>,
}

/// Produces time-limited URLs for objects in the store
#[async_trait]
pub trait PresignedUrlProvider: Send + Sync {
    /// Signs a GET for `key` in `bucket` valid for `ttl`.
    ///
    /// Every call signs anew; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Signing` if the store cannot sign the request
    async fn presign(&self, bucket: &str, key: &str, ttl: Duration) -> AssetResult<SignedUrl>;
}

/// Writes object bytes to the store
#[async_trait]
pub trait ObjectUploader: Send + Sync {
    /// Stores `body` under `key` in `bucket`
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Upload` if the store rejects the write
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> AssetResult<()>;
}
