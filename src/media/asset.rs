// SPDX-License-Identifier: MPL-2.0
//! Encoded image assets with decoded dimensions and a display handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;
use std::sync::Arc;

/// Fallback media type for payloads whose type could not be resolved.
pub const FALLBACK_MEDIA_TYPE: &str = "image/png";

/// An encoded image plus everything the UI and the remote call need:
/// the payload, its media type, decoded dimensions, a display handle,
/// and the original file name when the asset came from disk.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// Encoded payload (PNG, JPEG, ...).
    /// Stored in Arc to avoid expensive cloning.
    bytes: Arc<Vec<u8>>,
    media_type: String,
    handle: image::Handle,
    width: u32,
    height: u32,
    file_name: Option<String>,
}

impl ImageAsset {
    /// Creates an asset from encoded bytes.
    ///
    /// The payload is decoded once to validate it and record its dimensions;
    /// the handle keeps its own copy of the encoded bytes for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the payload cannot be decoded.
    pub fn from_encoded(
        bytes: Vec<u8>,
        media_type: impl Into<String>,
        file_name: Option<String>,
    ) -> Result<Self> {
        let decoded = image_rs::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();

        let handle = image::Handle::from_bytes(bytes.clone());
        Ok(Self {
            bytes: Arc::new(bytes),
            media_type: media_type.into(),
            handle,
            width,
            height,
            file_name,
        })
    }

    /// Encoded payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Media type of the payload, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Display handle for iced image widgets and canvas drawing.
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// File name of the source file, if the asset was loaded from disk.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

/// Loads an image asset from the given path.
///
/// The media type comes from the extension table, falling back to content
/// sniffing and finally to [`FALLBACK_MEDIA_TYPE`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`]
/// if its content cannot be decoded.
pub async fn load_asset(path: &Path) -> Result<ImageAsset> {
    let media_type = match super::media_type_for_path(path) {
        Some(media_type) => media_type.to_string(),
        None => super::sniff_media_type(path).unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string()),
    };

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::Io(e.to_string()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string);

    ImageAsset::from_encoded(bytes, media_type, file_name)
}
