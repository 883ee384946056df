// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison view.
//!
//! Renders the original and the cleaned image on a single canvas, split by
//! a draggable vertical divider. The left side shows the original, the
//! right side reveals the processed result. While no processed image exists
//! yet, the canvas simply letterboxes the original.
//!
//! The divider position lives in [`State`] as a percentage of the displayed
//! image width, so window resizes keep the split where the user left it.

mod canvas;
mod state;

pub use canvas::CompareCanvas;
pub use state::{Message, State, DEFAULT_POSITION};

use crate::media::ImageAsset;
use iced::widget::Canvas;
use iced::{Element, Length};

/// Builds the comparison canvas for the current session images.
///
/// Labels are resolved by the caller so this module stays free of i18n
/// plumbing.
pub fn view(
    original: &ImageAsset,
    processed: Option<&ImageAsset>,
    state: &State,
    original_label: String,
    processed_label: String,
) -> Element<'static, Message> {
    Canvas::new(CompareCanvas::new(
        original,
        processed,
        state,
        original_label,
        processed_label,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
