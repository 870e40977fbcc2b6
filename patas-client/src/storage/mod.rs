//! Media storage gateway
//!
//! Blob storage for record images. Hosts inject a [`MediaStorage`]; the
//! production implementation is [`S3Storage`], tests use in-memory
//! doubles.

mod s3;

pub use s3::S3Storage;

use async_trait::async_trait;
use shared::error::AppResult;

/// Blob storage for record images
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store an object and return its public URL
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> AppResult<String>;

    /// Remove an object
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Public URL for a key
    fn public_url(&self, key: &str) -> String;

    /// Map a public URL back to its key, if it belongs to this storage
    fn key_for_url(&self, url: &str) -> Option<String>;
}

/// Storage key for a record image: `{collection}/{slug}_{millis}.jpg`
///
/// The millisecond suffix keeps successive uploads for the same record
/// from overwriting each other.
pub fn object_key(collection: &str, label: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{}/{}_{}.jpg", collection, slugify(label), millis)
}

fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut last_dash = true;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("record");
    }
    slug
}
