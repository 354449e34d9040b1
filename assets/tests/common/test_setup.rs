use std::sync::Arc;

use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{retry::RetryConfig, BehaviorVersion, Region},
    Client as S3Client,
};
use chrono::Utc;
use uuid::Uuid;
use video_assets::{resolver::AssetResolver, types::AssetsConfig, video::Video};

use super::MockStorage;

pub const TEST_BUCKET: &str = "my-bucket";

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Resolver over a mock store, configured for `TEST_BUCKET` with the default TTL
pub fn mock_resolver(storage: MockStorage) -> (AssetResolver<MockStorage>, Arc<MockStorage>) {
    setup_test_env();

    let storage = Arc::new(storage);
    let config = AssetsConfig::with_bucket(TEST_BUCKET).expect("valid bucket");
    (AssetResolver::new(storage.clone(), config), storage)
}

/// S3 client with static credentials; presigning works without any network access
pub fn offline_s3_client(endpoint_url: &str) -> Arc<S3Client> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("test", "test", None))
        .endpoint_url(endpoint_url)
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();

    Arc::new(S3Client::from_conf(config))
}

/// Video record as the metadata store would return it
pub fn stored_video(video_url: Option<&str>) -> Video {
    let created_at = Utc::now() - chrono::Duration::days(1);
    Video {
        id: Uuid::new_v4(),
        created_at,
        updated_at: created_at,
        user_id: Uuid::new_v4(),
        title: "Boots and where to find them".to_string(),
        description: "A tour of the boot closet".to_string(),
        thumbnail_url: Some("http://localhost:8091/assets/thumb.png".to_string()),
        video_url: video_url.map(ToString::to_string),
    }
}
