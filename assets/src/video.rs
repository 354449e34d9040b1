//! Video metadata as read from and written back to the metadata store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{reference::AssetReference, types::AssetResult};

/// Video record.
///
/// `video_url` holds an encoded [`AssetReference`] while stored, and a presigned URL once
/// resolved for a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Primary key
    pub id: Uuid,
    /// Timestamp of record creation
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
    /// Owner of the video
    pub user_id: Uuid,
    /// Title shown to viewers
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Thumbnail location, if one was uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Encoded asset reference, or presigned URL after resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Video {
    /// Decodes the stored video reference, `None` when no video was uploaded
    ///
    /// # Errors
    ///
    /// Returns `AssetError::MalformedReference` if the stored value is not a reference
    pub fn asset_reference(&self) -> AssetResult<Option<AssetReference>> {
        AssetReference::decode_optional(self.video_url.as_deref())
    }
}
