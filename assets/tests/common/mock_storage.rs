use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use video_assets::{
    media_storage::{ObjectUploader, PresignedUrlProvider, SignedUrl},
    types::{AssetError, AssetResult},
};

/// Arguments of one `presign` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignCall {
    pub bucket: String,
    pub key: String,
    pub ttl: Duration,
}

/// Arguments of one `put_object` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// In-memory object store that records calls and can be told to fail
#[derive(Default)]
pub struct MockStorage {
    pub fail_signing: bool,
    pub fail_uploads: bool,
    presign_calls: Mutex<Vec<PresignCall>>,
    upload_calls: Mutex<Vec<UploadCall>>,
}

impl MockStorage {
    pub fn failing_signing() -> Self {
        Self {
            fail_signing: true,
            ..Self::default()
        }
    }

    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    pub fn presign_calls(&self) -> Vec<PresignCall> {
        self.presign_calls.lock().unwrap().clone()
    }

    pub fn upload_calls(&self) -> Vec<UploadCall> {
        self.upload_calls.lock().unwrap().clone()
    }

    /// URL the mock hands out for the n-th (1-based) signing call
    pub fn signed_url_for(bucket: &str, key: &str, n: usize) -> String {
        format!("https://{bucket}.s3.example.com/{key}?X-Amz-Signature=sig{n}")
    }
}

#[async_trait]
impl PresignedUrlProvider for MockStorage {
    async fn presign(&self, bucket: &str, key: &str, ttl: Duration) -> AssetResult<SignedUrl> {
        let n = {
            let mut calls = self.presign_calls.lock().unwrap();
            calls.push(PresignCall {
                bucket: bucket.to_string(),
                key: key.to_string(),
                ttl,
            });
            calls.len()
        };

        if self.fail_signing {
            return Err(AssetError::Signing("InvalidAccessKeyId".to_string()));
        }

        Ok(SignedUrl {
            url: Self::signed_url_for(bucket, key, n),
            expires_at: Utc::now() + ttl,
        })
    }
}

#[async_trait]
impl ObjectUploader for MockStorage {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> AssetResult<()> {
        self.upload_calls.lock().unwrap().push(UploadCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });

        if self.fail_uploads {
            return Err(AssetError::Upload("NoSuchBucket".to_string()));
        }

        Ok(())
    }
}
