//! S3 implementation of the object store traits

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, primitives::ByteStream, Client as S3Client};
use chrono::{DateTime, Utc};
use tracing::{debug, error};

use super::{ObjectUploader, PresignedUrlProvider, SignedUrl};
use crate::{
    media_type,
    types::{AssetError, AssetResult},
};

/// Media storage client for S3 operations.
///
/// Holds only the shared client handle, so one instance serves concurrent requests.
pub struct MediaStorage {
    s3_client: Arc<S3Client>,
}

impl MediaStorage {
    /// Creates a new media storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl PresignedUrlProvider for MediaStorage {
    /// Generates a presigned URL for GET operations
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Signing` if presigned URL generation fails
    /// Returns `AssetError::Config` if `ttl` is outside what S3 accepts
    async fn presign(&self, bucket: &str, key: &str, ttl: Duration) -> AssetResult<SignedUrl> {
        let presigned_config = PresigningConfig::expires_in(ttl)?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigned_config)
            .await
            .map_err(|e| {
                error!("Failed to presign {bucket}/{key}: {e}");
                AssetError::Signing(format!("Failed to generate presigned URL: {e}"))
            })?;

        let expires_at: DateTime<Utc> = Utc::now() + ttl;

        debug!("Generated presigned URL for {bucket}/{key} expires at: {expires_at}");

        Ok(SignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}

#[async_trait]
impl ObjectUploader for MediaStorage {
    /// Uploads `body` in a single `PutObject` request
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Upload` if S3 rejects the request or cannot be reached
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> AssetResult<()> {
        let content_type = media_type::upload_content_type(content_type);
        let content_length = body.len();

        self.s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type.to_string())
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to upload {bucket}/{key}: {e}");
                AssetError::from(e)
            })?;

        debug!("Uploaded {content_length} bytes to {bucket}/{key} as {content_type}");

        Ok(())
    }
}
