// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings sidebar.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark stage behind the letterboxed image and the comparison view.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::stage_background())),
        ..Default::default()
    }
}

/// Bordered drop target shown while no image is loaded.
///
/// The border brightens while the OS reports a file hovering over the
/// window, as drag feedback.
pub fn dropzone(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.weak.color;
        let (border_color, width) = if hovering {
            (palette::PRIMARY_400, border::WIDTH_MD)
        } else {
            (palette::GRAY_400, border::WIDTH_SM)
        };

        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: border_color,
                width,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}
