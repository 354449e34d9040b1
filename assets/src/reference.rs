//! Asset references persisted on video records.
//!
//! A reference is stored as `<bucket>,<key>`. Neither part is escaped: a reference whose key
//! contains a comma decodes to the first two segments only, which is how existing records
//! have always been read. A missing or empty value means the record has no asset.

use std::{fmt, str::FromStr};

use tracing::warn;

use crate::types::{AssetError, AssetResult};

/// Separator between bucket and key
pub const DELIMITER: char = ',';

/// Location of an object in the object store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetReference {
    bucket: String,
    key: String,
}

impl AssetReference {
    /// Creates a reference to `key` in `bucket`
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Decodes a stored reference.
    ///
    /// Segments after the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::MalformedReference` if the value has no delimiter or either the
    /// bucket or the key is empty. Such values are never produced by [`encode`] and point at
    /// corrupted records.
    pub fn decode(reference: &str) -> AssetResult<Self> {
        let mut segments = reference.split(DELIMITER);

        match (segments.next(), segments.next()) {
            (Some(bucket), Some(key)) if !bucket.is_empty() && !key.is_empty() => {
                if segments.next().is_some() {
                    warn!("Asset reference {reference:?} has extra segments, ignoring them");
                }
                Ok(Self::new(bucket, key))
            }
            _ => Err(AssetError::MalformedReference(reference.to_string())),
        }
    }

    /// Decodes an optional stored reference; `None` and `""` mean no asset
    ///
    /// # Errors
    ///
    /// See [`AssetReference::decode`]
    pub fn decode_optional(reference: Option<&str>) -> AssetResult<Option<Self>> {
        match reference {
            None | Some("") => Ok(None),
            Some(reference) => Self::decode(reference).map(Some),
        }
    }

    /// Encoded form, suitable for persisting
    #[must_use]
    pub fn encode(&self) -> String {
        encode(&self.bucket, &self.key)
    }

    /// Bucket holding the object
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object within its bucket
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Encodes a bucket and key as a stored reference
#[must_use]
pub fn encode(bucket: &str, key: &str) -> String {
    format!("{bucket}{DELIMITER}{key}")
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.bucket, self.key)
    }
}

impl FromStr for AssetReference {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
