// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the workspace and comparison view.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_900, WHITE},
};
use iced::Color;

/// Background color of the image stage behind the letterboxed picture.
pub fn stage_background() -> Color {
    GRAY_900
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

// ============================================================================
// Comparison Overlay Styles
// ============================================================================
// Shared colors for the elements drawn on top of the before/after view
// (divider line, drag handle, pane labels), so both panes read consistently.

/// Color of the vertical divider line between the two panes.
pub fn divider_color() -> Color {
    WHITE
}

/// Fill color for the divider drag handle.
pub fn divider_handle_color() -> Color {
    WHITE
}

/// Border color for the divider drag handle.
pub fn divider_handle_border_color() -> Color {
    BLACK
}

/// Text color for the pane labels drawn over the image corners.
pub fn pane_label_text_color() -> Color {
    WHITE
}

/// Chip color behind the pane labels, dark enough to stay readable
/// over bright image content.
pub fn pane_label_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Dim veil drawn over the picture while a processing call is in flight.
pub fn processing_veil_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}
