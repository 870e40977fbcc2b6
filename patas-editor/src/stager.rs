//! Asset staging and upload
//!
//! Turns a locally picked image into an uploaded object at save time.
//! Nothing leaves the device while the user is still editing, and a
//! draft with no newly staged image never re-uploads.

use std::path::Path;
use std::sync::Arc;

use patas_client::{MediaPicker, MediaStorage, PickedImage, object_key};
use shared::error::{AppError, AppResult, ErrorCode};

/// Upload size cap, matching the hosted bucket policy
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
const SUPPORTED_FORMATS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Stages a picked image and commits it to storage at save time
pub struct AssetStager {
    storage: Arc<dyn MediaStorage>,
    picker: Arc<dyn MediaPicker>,
}

impl AssetStager {
    pub fn new(storage: Arc<dyn MediaStorage>, picker: Arc<dyn MediaPicker>) -> Self {
        Self { storage, picker }
    }

    /// Ask the device for an image; `None` means the user cancelled
    pub async fn pick(&self) -> Option<PickedImage> {
        self.picker.pick().await
    }

    /// Resolve a draft's image URL at save time
    ///
    /// With nothing staged the existing URL is kept as is. A staged image
    /// is validated, uploaded byte for byte, and its new URL returned.
    /// Any failure here aborts the save.
    pub async fn resolve(
        &self,
        staged: Option<&PickedImage>,
        existing_url: &str,
        collection: &str,
        label: &str,
    ) -> AppResult<String> {
        let Some(image) = staged else {
            return Ok(existing_url.to_string());
        };

        let bytes = tokio::fs::read(&image.path).await.map_err(|e| {
            AppError::with_message(
                ErrorCode::FileReadFailed,
                format!("could not read {}: {e}", image.path.display()),
            )
        })?;
        validate_image(&image.path, &bytes)?;

        let key = object_key(collection, label);
        let content_type = mime_guess::from_path(&image.path)
            .first_or_octet_stream()
            .to_string();
        self.storage.put(&key, bytes, &content_type).await
    }

    /// Best-effort removal of a replaced image's blob
    ///
    /// The record's save has already landed by the time this runs, so
    /// cleanup problems are logged and swallowed.
    pub async fn discard_previous(&self, old_url: &str) {
        if old_url.is_empty() {
            return;
        }
        let Some(key) = self.storage.key_for_url(old_url) else {
            tracing::warn!(url = old_url, "Replaced image is not in our storage, leaving it");
            return;
        };
        if let Err(err) = self.storage.delete(&key).await {
            tracing::warn!(key = %key, error = %err, "Could not remove replaced image");
        }
    }
}

fn validate_image(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if bytes.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::EmptyFile,
            "picked file is empty",
        ));
    }
    if bytes.len() > MAX_FILE_SIZE {
        return Err(AppError::with_message(
            ErrorCode::FileTooLarge,
            format!(
                "file is {} bytes, limit is {} bytes",
                bytes.len(),
                MAX_FILE_SIZE
            ),
        ));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_FORMATS.contains(&extension.as_str()) {
        return Err(AppError::with_message(
            ErrorCode::UnsupportedFileFormat,
            format!("unsupported format '{extension}', expected one of {SUPPORTED_FORMATS:?}"),
        ));
    }
    if image::load_from_memory(bytes).is_err() {
        return Err(AppError::with_message(
            ErrorCode::InvalidImageFile,
            "file does not decode as an image",
        ));
    }
    Ok(())
}
