//! Orchestrates naming, storing and resolving video assets

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::{
    media_storage::{ObjectUploader, PresignedUrlProvider, SignedUrl},
    object_key::ObjectKey,
    reference::{self, AssetReference, DELIMITER},
    types::{AssetResult, AssetsConfig},
    video::Video,
};

/// Asset resolver.
///
/// Holds the storage handle and immutable configuration only, so a single instance can be
/// shared across concurrent requests.
pub struct AssetResolver<S> {
    storage: Arc<S>,
    config: AssetsConfig,
}

impl<S> AssetResolver<S> {
    /// Creates a new resolver
    #[must_use]
    pub const fn new(storage: Arc<S>, config: AssetsConfig) -> Self {
        Self { storage, config }
    }

    /// Configuration the resolver was built with
    #[must_use]
    pub const fn config(&self) -> &AssetsConfig {
        &self.config
    }

    /// Picks the key for a new upload of `content_type`
    ///
    /// # Errors
    ///
    /// Returns `AssetError::RandomSource` if no identifier could be generated
    #[instrument(skip(self))]
    pub fn materialize_for_write(&self, content_type: &str) -> AssetResult<ObjectKey> {
        let key = ObjectKey::generate(content_type)?;
        debug!("Materialized object key {key}");
        Ok(key)
    }
}

impl<S: PresignedUrlProvider> AssetResolver<S> {
    /// Signs a fresh read URL for `reference` with the configured lifetime
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Signing` if the store cannot sign the request
    pub async fn sign(&self, reference: &AssetReference) -> AssetResult<SignedUrl> {
        self.storage
            .presign(
                reference.bucket(),
                reference.key(),
                self.config.read_url_ttl(),
            )
            .await
    }

    /// Returns a copy of `video` whose `video_url` is a presigned URL.
    ///
    /// A video without a stored reference is returned unchanged and nothing is signed. The
    /// input record is never modified, so on error the stored reference is still available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::MalformedReference` if the stored reference is corrupted
    /// Returns `AssetError::Signing` if the store cannot sign the request
    #[instrument(skip(self, video), fields(video_id = %video.id))]
    pub async fn resolve_for_read(&self, video: &Video) -> AssetResult<Video> {
        let Some(reference) = video.asset_reference()? else {
            debug!("Video has no stored asset, nothing to sign");
            return Ok(video.clone());
        };

        let signed = self.sign(&reference).await?;

        Ok(Video {
            video_url: Some(signed.url),
            ..video.clone()
        })
    }
}

impl<S: ObjectUploader> AssetResolver<S> {
    /// Uploads `body` under a new key and returns a copy of `video` pointing at it.
    ///
    /// The returned record carries the encoded reference in `video_url`; persisting it is
    /// the caller's job. If the upload fails the input record is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::RandomSource` if no identifier could be generated
    /// Returns `AssetError::Upload` if the store rejects the write
    #[instrument(skip(self, video, body), fields(video_id = %video.id, size = body.len()))]
    pub async fn store_for_write(
        &self,
        video: &Video,
        body: Vec<u8>,
        content_type: &str,
    ) -> AssetResult<Video> {
        let key = self.materialize_for_write(content_type)?.to_string();
        let bucket = self.config.bucket();

        if key.contains(DELIMITER) {
            warn!(
                "Object key {key:?} contains {DELIMITER:?}, its reference will not decode back to it"
            );
        }

        self.storage
            .put_object(bucket, &key, body, content_type)
            .await?;

        info!("Stored video asset {bucket}/{key}");

        Ok(Video {
            video_url: Some(reference::encode(bucket, &key)),
            updated_at: Utc::now(),
            ..video.clone()
        })
    }
}
