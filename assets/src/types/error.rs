//! Error types for asset operations

use aws_sdk_s3::{
    error::SdkError, operation::put_object::PutObjectError, presigning::PresigningConfigError,
};
use thiserror::Error;

/// Result type for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors that can occur while naming, storing or resolving assets
#[derive(Error, Debug)]
pub enum AssetError {
    /// The OS random source could not produce an identifier
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// A stored reference does not split into a bucket and a key
    #[error("Malformed asset reference: {0}")]
    MalformedReference(String),

    /// The object store refused or failed to sign a URL
    #[error("Failed to sign URL: {0}")]
    Signing(String),

    /// The object store rejected an upload
    #[error("Failed to upload object: {0}")]
    Upload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AssetError {
    /// Whether the request that produced this error may be retried by the client.
    ///
    /// Nothing in this crate retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Signing(_) | Self::Upload(_))
    }
}

impl From<SdkError<PutObjectError>> for AssetError {
    fn from(error: SdkError<PutObjectError>) -> Self {
        match error {
            SdkError::ServiceError(err) => Self::Upload(format!("{:?}", err.err())),
            _ => Self::Upload(error.to_string()),
        }
    }
}

impl From<PresigningConfigError> for AssetError {
    fn from(error: PresigningConfigError) -> Self {
        Self::Config(format!("Failed to create presigning config: {error}"))
    }
}
