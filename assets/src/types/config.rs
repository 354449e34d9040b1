//! Immutable settings for the asset resolver

use std::time::Duration;

use super::{AssetError, AssetResult, Environment};
use crate::reference::DELIMITER;

/// Settings shared by every asset operation.
///
/// Built once at startup and handed to [`crate::resolver::AssetResolver`]; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    bucket: String,
    read_url_ttl: Duration,
}

impl AssetsConfig {
    /// Lifetime of presigned read URLs unless configured otherwise
    pub const DEFAULT_READ_URL_TTL: Duration = Duration::from_secs(60 * 60);

    /// Creates a configuration for `bucket`
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Config` if the bucket name is empty or contains the reference
    /// delimiter, since such a bucket could not be stored in a reference.
    pub fn new(bucket: impl Into<String>, read_url_ttl: Duration) -> AssetResult<Self> {
        let bucket = bucket.into();

        if bucket.is_empty() {
            return Err(AssetError::Config("bucket name is empty".to_string()));
        }
        if bucket.contains(DELIMITER) {
            return Err(AssetError::Config(format!(
                "bucket name {bucket:?} contains the reference delimiter"
            )));
        }

        Ok(Self {
            bucket,
            read_url_ttl,
        })
    }

    /// Creates a configuration with the default one-hour read URL lifetime
    ///
    /// # Errors
    ///
    /// See [`AssetsConfig::new`]
    pub fn with_bucket(bucket: impl Into<String>) -> AssetResult<Self> {
        Self::new(bucket, Self::DEFAULT_READ_URL_TTL)
    }

    /// Reads bucket and TTL from the deployment environment
    ///
    /// # Errors
    ///
    /// See [`AssetsConfig::new`]
    pub fn from_environment(environment: &Environment) -> AssetResult<Self> {
        Self::new(environment.s3_bucket(), environment.read_url_ttl())
    }

    /// Bucket that new uploads are written to
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Lifetime of presigned read URLs
    #[must_use]
    pub const fn read_url_ttl(&self) -> Duration {
        self.read_url_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_ttl_is_one_hour() {
        let config = AssetsConfig::with_bucket("my-bucket").unwrap();
        assert_eq!(config.bucket(), "my-bucket");
        assert_eq!(config.read_url_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_rejects_unstorable_bucket_names() {
        assert!(matches!(
            AssetsConfig::with_bucket(""),
            Err(AssetError::Config(_))
        ));
        assert!(matches!(
            AssetsConfig::with_bucket("a,b"),
            Err(AssetError::Config(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_environment_uses_override() {
        let environment = Environment::Development {
            presign_expiry_override: Some(90),
        };
        std::env::set_var("S3_BUCKET_NAME", "config-test-bucket");
        let config = AssetsConfig::from_environment(&environment).unwrap();
        std::env::remove_var("S3_BUCKET_NAME");

        assert_eq!(config.bucket(), "config-test-bucket");
        assert_eq!(config.read_url_ttl(), Duration::from_secs(90));
    }
}
