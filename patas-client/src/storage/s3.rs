//! S3-backed media storage
//!
//! Works against AWS proper or any S3-compatible endpoint (MinIO and
//! friends) via `PATAS_STORAGE_ENDPOINT`.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::config::Config;
use crate::storage::MediaStorage;

pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let base: String = public_base_url.into();
        Self {
            client,
            bucket: bucket.into(),
            public_base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from config, honoring a custom endpoint when set
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if !config.storage_region.is_empty() {
            loader = loader.region(aws_config::Region::new(config.storage_region.clone()));
        }
        let sdk_config = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if !config.storage_endpoint.is_empty() {
            // Path-style addressing; MinIO does not resolve bucket subdomains
            builder = builder
                .endpoint_url(&config.storage_endpoint)
                .force_path_style(true);
        }
        let client = aws_sdk_s3::Client::from_conf(builder.build());
        Self::new(
            client,
            config.storage_bucket.clone(),
            config.storage_public_url.clone(),
        )
    }
}

#[async_trait]
impl MediaStorage for S3Storage {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> AppResult<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key, error = %e, "Object upload failed");
                AppError::upload_failed(format!("upload of {key} failed: {e}"))
            })?;
        Ok(self.public_url(key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_message(
                    ErrorCode::StorageDeleteFailed,
                    format!("delete of {key} failed: {e}"),
                )
            })?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| !key.is_empty())
            .map(|key| key.to_string())
    }
}
