// SPDX-License-Identifier: MPL-2.0
//! Remote image processing port.
//!
//! This module defines the [`ImageProcessor`] trait the app shell drives
//! and the instruction composition shared by every adapter.
//!
//! # Design Notes
//!
//! - The call is asynchronous; adapters return a boxed future so the app
//!   can hold the processor as a trait object behind an `Arc`.
//! - Session bookkeeping (tickets, status) stays outside: an adapter only
//!   turns one image plus one instruction into one result.
//! - The trait is `Send + Sync` so futures can run on the iced executor.

pub mod gemini;

use crate::media::ImageAsset;
use futures_util::future::BoxFuture;
use std::fmt;

pub use gemini::GeminiClient;

/// Fixed instruction prefix for every processing call.
pub const DEFAULT_INSTRUCTION: &str = "Remove all watermarks, logos, text overlays, and timestamps from this image. Reconstruct the background where the elements were removed to blend seamlessly with the surrounding area. Output only the cleaned image.";

/// Builds the full instruction for a call.
///
/// A blank addendum yields the default instruction alone; anything else is
/// appended after `Additional instructions:`. Surrounding whitespace is
/// trimmed so a stray space never produces a dangling suffix.
#[must_use]
pub fn compose_instruction(addendum: &str) -> String {
    let addendum = addendum.trim();
    if addendum.is_empty() {
        DEFAULT_INSTRUCTION.to_string()
    } else {
        format!("{DEFAULT_INSTRUCTION} Additional instructions: {addendum}")
    }
}

// =============================================================================
// ProcessError
// =============================================================================

/// Errors that can occur during a remote processing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// Transport, API, or payload failure. The message is surfaced to the
    /// user verbatim.
    Failed(String),

    /// The model answered without any image part.
    NoImage,
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Failed(msg) => write!(f, "{msg}"),
            ProcessError::NoImage => write!(f, "No image data returned from the model."),
        }
    }
}

impl std::error::Error for ProcessError {}

// =============================================================================
// ImageProcessor Trait
// =============================================================================

/// Port for remote image processing.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the returned future is `'static`
/// so it can be handed to `Task::perform`.
pub trait ImageProcessor: Send + Sync {
    /// Processes an image with the given full instruction.
    ///
    /// Returns the cleaned image, or a [`ProcessError`] describing why the
    /// call failed.
    fn process(
        &self,
        image: ImageAsset,
        instruction: String,
    ) -> BoxFuture<'static, Result<ImageAsset, ProcessError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_asset;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn compose_uses_default_for_empty_addendum() {
        assert_eq!(compose_instruction(""), DEFAULT_INSTRUCTION);
    }

    #[test]
    fn compose_treats_whitespace_as_empty() {
        assert_eq!(compose_instruction("   \n"), DEFAULT_INSTRUCTION);
    }

    #[test]
    fn compose_appends_addendum() {
        assert_eq!(
            compose_instruction("remove bottom-right logo"),
            format!("{DEFAULT_INSTRUCTION} Additional instructions: remove bottom-right logo")
        );
    }

    #[test]
    fn compose_trims_addendum_edges() {
        assert_eq!(
            compose_instruction("  keep the sky  "),
            format!("{DEFAULT_INSTRUCTION} Additional instructions: keep the sky")
        );
    }

    #[test]
    fn process_error_display() {
        let err = ProcessError::Failed("429 Too Many Requests".to_string());
        assert_eq!(format!("{err}"), "429 Too Many Requests");

        assert_eq!(
            format!("{}", ProcessError::NoImage),
            "No image data returned from the model."
        );
    }

    // Mock implementation counting invocations.
    struct CountingProcessor {
        calls: Arc<AtomicUsize>,
    }

    impl ImageProcessor for CountingProcessor {
        fn process(
            &self,
            image: ImageAsset,
            _instruction: String,
        ) -> BoxFuture<'static, Result<ImageAsset, ProcessError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { Ok(image) })
        }
    }

    #[tokio::test]
    async fn mock_processor_counts_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let processor = CountingProcessor {
            calls: Arc::clone(&calls),
        };

        let asset = sample_asset(2, 2, None);
        let result = processor
            .process(asset, compose_instruction(""))
            .await
            .expect("mock returns the input");
        assert_eq!(result.width(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
