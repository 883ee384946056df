// SPDX-License-Identifier: MPL-2.0
//! Candidate file validation before a file enters the upload session.
//!
//! Validation is split in two: [`probe`] touches the filesystem, while
//! [`validate`] is a pure check over the probed candidate so the rules can
//! be tested without fixtures.

use crate::error::Result;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A probed candidate file: size from metadata, media type from the
/// extension table with content sniffing as fallback.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub media_type: Option<String>,
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The resolved media type is absent or not an `image/*` type.
    InvalidType { media_type: Option<String> },
    /// The file exceeds the configured upload cap.
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

impl ValidationError {
    /// Returns the i18n message key for this rejection.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { .. } => "notification-invalid-type",
            ValidationError::TooLarge { .. } => "notification-too-large",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidType { media_type } => match media_type {
                Some(media_type) => write!(f, "Not an image file: {}", media_type),
                None => write!(f, "Not an image file"),
            },
            ValidationError::TooLarge {
                size_bytes,
                max_bytes,
            } => write!(
                f,
                "File is too large: {} bytes (maximum {} bytes)",
                size_bytes, max_bytes
            ),
        }
    }
}

/// Probes a path for validation.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when metadata cannot be read. I/O
/// failures are crate errors, not validation rejections.
pub fn probe(path: &Path) -> Result<FileCandidate> {
    let metadata = fs::metadata(path)?;

    let media_type = match super::media_type_for_path(path) {
        Some(media_type) => Some(media_type.to_string()),
        None => super::sniff_media_type(path),
    };

    Ok(FileCandidate {
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
        media_type,
    })
}

/// Applies the acceptance rules to a probed candidate.
///
/// The media type check runs first, so an oversized non-image reports
/// `InvalidType`. The size rule rejects strictly greater than `max_bytes`;
/// a file of exactly the cap passes.
///
/// # Errors
///
/// Returns the rejection reason; the candidate never reaches the session.
pub fn validate(candidate: &FileCandidate, max_bytes: u64) -> std::result::Result<(), ValidationError> {
    let is_image = candidate
        .media_type
        .as_deref()
        .is_some_and(|media_type| media_type.starts_with("image/"));
    if !is_image {
        return Err(ValidationError::InvalidType {
            media_type: candidate.media_type.clone(),
        });
    }

    if candidate.size_bytes > max_bytes {
        return Err(ValidationError::TooLarge {
            size_bytes: candidate.size_bytes,
            max_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_png_bytes;
    use tempfile::tempdir;

    const TEN_MIB: u64 = 10 * 1024 * 1024;

    fn candidate(size_bytes: u64, media_type: Option<&str>) -> FileCandidate {
        FileCandidate {
            path: PathBuf::from("candidate.bin"),
            size_bytes,
            media_type: media_type.map(str::to_string),
        }
    }

    #[test]
    fn accepts_image_within_cap() {
        let candidate = candidate(1024, Some("image/png"));
        assert!(validate(&candidate, TEN_MIB).is_ok());
    }

    #[test]
    fn accepts_file_of_exactly_the_cap() {
        let candidate = candidate(TEN_MIB, Some("image/jpeg"));
        assert!(validate(&candidate, TEN_MIB).is_ok());
    }

    #[test]
    fn rejects_one_byte_over_the_cap() {
        let candidate = candidate(TEN_MIB + 1, Some("image/jpeg"));
        match validate(&candidate, TEN_MIB) {
            Err(ValidationError::TooLarge {
                size_bytes,
                max_bytes,
            }) => {
                assert_eq!(size_bytes, TEN_MIB + 1);
                assert_eq!(max_bytes, TEN_MIB);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_image_type() {
        let candidate = candidate(1024, Some("application/pdf"));
        assert!(matches!(
            validate(&candidate, TEN_MIB),
            Err(ValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn rejects_unknown_type() {
        let candidate = candidate(1024, None);
        assert!(matches!(
            validate(&candidate, TEN_MIB),
            Err(ValidationError::InvalidType { media_type: None })
        ));
    }

    #[test]
    fn type_check_wins_over_size_check() {
        // A 20 MiB PDF must report the type problem, not the size problem.
        let candidate = candidate(2 * TEN_MIB, Some("application/pdf"));
        assert!(matches!(
            validate(&candidate, TEN_MIB),
            Err(ValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn zero_byte_image_passes_validation() {
        // The later decode step reports empty payloads.
        let candidate = candidate(0, Some("image/png"));
        assert!(validate(&candidate, TEN_MIB).is_ok());
    }

    #[test]
    fn i18n_keys_map_per_variant() {
        let invalid = ValidationError::InvalidType { media_type: None };
        let too_large = ValidationError::TooLarge {
            size_bytes: 1,
            max_bytes: 0,
        };
        assert_eq!(invalid.i18n_key(), "notification-invalid-type");
        assert_eq!(too_large.i18n_key(), "notification-too-large");
    }

    #[test]
    fn probe_resolves_size_and_type_from_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("photo.png");
        let bytes = sample_png_bytes(2, 2);
        fs::write(&path, &bytes).expect("failed to write png");

        let candidate = probe(&path).expect("probe should succeed");
        assert_eq!(candidate.size_bytes, bytes.len() as u64);
        assert_eq!(candidate.media_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn probe_sniffs_content_without_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("headless");
        fs::write(&path, sample_png_bytes(2, 2)).expect("failed to write png");

        let candidate = probe(&path).expect("probe should succeed");
        assert_eq!(candidate.media_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn probe_missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone.png");
        assert!(probe(&missing).is_err());
    }
}
