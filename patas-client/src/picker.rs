//! Device media picker seam
//!
//! The editor never opens a file dialog itself; hosts inject a
//! [`MediaPicker`]. A native implementation backed by `rfd` ships behind
//! the `native-picker` feature.

use async_trait::async_trait;
use std::path::PathBuf;

/// An image chosen on the device, not yet uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub path: PathBuf,
}

impl PickedImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Source of locally picked images
///
/// Returning `None` means the user cancelled. Cancellation is never an
/// error.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    async fn pick(&self) -> Option<PickedImage>;
}

/// Native file-dialog picker
#[cfg(feature = "native-picker")]
#[derive(Debug, Default)]
pub struct DialogPicker;

#[cfg(feature = "native-picker")]
#[async_trait]
impl MediaPicker for DialogPicker {
    async fn pick(&self) -> Option<PickedImage> {
        // The dialog blocks its thread until dismissed
        tokio::task::spawn_blocking(|| {
            rfd::FileDialog::new()
                .set_title("Select an image")
                .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                .pick_file()
                .map(PickedImage::new)
        })
        .await
        .ok()
        .flatten()
    }
}
