// SPDX-License-Identifier: MPL-2.0
//! Image asset handling: loading, media type resolution, and validation.

pub mod asset;
pub mod validate;

use std::path::Path;

// Re-export commonly used types
pub use asset::{load_asset, ImageAsset};
pub use extensions::IMAGE_EXTENSIONS;
pub use validate::{probe, validate, FileCandidate, ValidationError};

/// Supported image extensions and their media types
pub mod extensions {
    /// Image file extensions offered in the open dialog
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "heic", "heif",
    ];

    /// Extension to media type table. Extensions are matched case-insensitively.
    pub const MEDIA_TYPES: &[(&str, &str)] = &[
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("tiff", "image/tiff"),
        ("tif", "image/tiff"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("heic", "image/heic"),
        ("heif", "image/heif"),
    ];
}

/// Resolves the media type for a path from its extension.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension().and_then(|s| s.to_str())?;
    extensions::MEDIA_TYPES
        .iter()
        .find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
        .map(|(_, media_type)| *media_type)
}

/// Sniffs the media type from file content. Used when the extension is
/// absent or unknown.
pub fn sniff_media_type(path: &Path) -> Option<String> {
    match infer::get_from_path(path) {
        Ok(Some(kind)) => Some(kind.mime_type().to_string()),
        Ok(None) => None,
        Err(err) => {
            log::warn!("Content sniffing failed for {}: {err}", path.display());
            None
        }
    }
}

/// Suggested file name for a saved result, derived from the original name.
pub fn cleaned_file_name(original: Option<&str>) -> String {
    format!("cleaned-{}", original.unwrap_or("image.png"))
}
