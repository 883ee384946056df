// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the split original/cleaned view.
//!
//! Uses f32 for canvas coordinates and u32 for pixel dimensions.
//! Precision loss in conversions is acceptable for typical image sizes.
#![allow(clippy::cast_precision_loss)]

use super::state::{Message, State};
use crate::media::ImageAsset;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::image;
use iced::{Point, Rectangle, Size};

/// Rough advance width of an uppercase label glyph, as a fraction of the
/// font size. Canvas text is not measured, so the label chips are sized
/// from this estimate.
const LABEL_CHAR_WIDTH: f32 = 0.62;

/// Area of the canvas actually covered by the letterboxed image.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DisplayArea {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

/// Canvas program used to draw and interact with the comparison view.
pub struct CompareCanvas {
    original: image::Handle,
    processed: Option<image::Handle>,
    img_width: u32,
    img_height: u32,
    position: f32,
    dragging: bool,
    original_label: String,
    processed_label: String,
}

impl CompareCanvas {
    #[must_use]
    pub fn new(
        original: &ImageAsset,
        processed: Option<&ImageAsset>,
        state: &State,
        original_label: String,
        processed_label: String,
    ) -> Self {
        Self {
            original: original.handle().clone(),
            processed: processed.map(|asset| asset.handle().clone()),
            img_width: original.width(),
            img_height: original.height(),
            position: state.position(),
            dragging: state.is_dragging(),
            original_label,
            processed_label,
        }
    }

    /// ContentFit::Contain placement of the original image inside `bounds`,
    /// in coordinates local to the canvas.
    fn display_area(&self, bounds: Rectangle) -> DisplayArea {
        let img_aspect = self.img_width as f32 / self.img_height as f32;
        let bounds_aspect = bounds.width / bounds.height;

        if img_aspect > bounds_aspect {
            // Image is wider - fit to width
            let width = bounds.width;
            let height = bounds.width / img_aspect;
            DisplayArea {
                x: 0.0,
                y: (bounds.height - height) / 2.0,
                width,
                height,
            }
        } else {
            // Image is taller - fit to height
            let height = bounds.height;
            let width = bounds.height * img_aspect;
            DisplayArea {
                x: (bounds.width - width) / 2.0,
                y: 0.0,
                width,
                height,
            }
        }
    }

    /// Horizontal divider position within the display area, local coordinates.
    fn divider_x(&self, area: DisplayArea) -> f32 {
        area.x + area.width * self.position / 100.0
    }

    /// Whether a cursor position (local to the canvas) grabs the divider.
    ///
    /// The whole divider line is grabbable within a corridor wide enough
    /// for touch-sized pointers, not just the handle circle.
    fn hits_divider(&self, position: Point, area: DisplayArea) -> bool {
        let divider_x = self.divider_x(area);
        let half_hit = sizing::SLIDER_HANDLE_HIT / 2.0;

        (position.x - divider_x).abs() <= half_hit
            && position.y >= area.y
            && position.y <= area.y + area.height
    }

    /// Draws one pane label as a dark chip with uppercase text.
    fn draw_label(
        frame: &mut iced::widget::canvas::Frame,
        content: &str,
        anchor_x: f32,
        y: f32,
        align_right: bool,
    ) {
        use iced::widget::canvas::Text;

        let text_width = content.chars().count() as f32 * typography::CAPTION * LABEL_CHAR_WIDTH;
        let chip_width = text_width + 2.0 * spacing::XXS;
        let chip_height = typography::CAPTION + 2.0 * spacing::XXS;
        let chip_x = if align_right {
            anchor_x - chip_width
        } else {
            anchor_x
        };

        frame.fill_rectangle(
            Point::new(chip_x, y),
            Size::new(chip_width, chip_height),
            theme::pane_label_background(),
        );
        frame.fill_text(Text {
            content: content.to_owned(),
            position: Point::new(chip_x + spacing::XXS, y + spacing::XXS),
            color: theme::pane_label_text_color(),
            size: typography::CAPTION.into(),
            ..Text::default()
        });
    }
}

impl iced::widget::canvas::Program<Message> for CompareCanvas {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        // Without a processed image there is no divider to interact with.
        if self.processed.is_none() {
            return None;
        }

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(cursor_position) = cursor.position_in(bounds) {
                    if self.hits_divider(cursor_position, self.display_area(bounds)) {
                        return Some(Action::publish(Message::Grabbed).and_capture());
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // Keep following the cursor while dragging, even outside the
                // canvas. The state clamps the resulting position.
                if self.dragging {
                    if let Some(absolute) = cursor.position() {
                        let area = self.display_area(bounds);
                        return Some(
                            Action::publish(Message::Moved {
                                x: absolute.x - bounds.x - area.x,
                                width: area.width,
                            })
                            .and_capture(),
                        );
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left))
            | iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                if self.dragging {
                    return Some(Action::publish(Message::Released).and_capture());
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Image, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());
        let area = self.display_area(bounds);
        let image_rect = Rectangle::new(
            Point::new(area.x, area.y),
            Size::new(area.width, area.height),
        );

        // Original image fills the letterboxed area
        frame.draw_image(image_rect, Image::new(self.original.clone()));

        if let Some(processed) = &self.processed {
            let divider_x = self.divider_x(area);
            let reveal_width = area.x + area.width - divider_x;

            // Cleaned image revealed right of the divider. The clip region
            // starts at the divider, so the image is drawn shifted left to
            // stay aligned with the original underneath.
            if reveal_width > 0.0 {
                let clip_region = Rectangle::new(
                    Point::new(divider_x, area.y),
                    Size::new(reveal_width, area.height),
                );
                let shift = divider_x - area.x;

                frame.with_clip(clip_region, |clipped| {
                    clipped.draw_image(
                        Rectangle::new(
                            Point::new(-shift, 0.0),
                            Size::new(area.width, area.height),
                        ),
                        Image::new(processed.clone()),
                    );
                });
            }

            // Divider line
            let divider = Path::line(
                Point::new(divider_x, area.y),
                Point::new(divider_x, area.y + area.height),
            );
            frame.stroke(
                &divider,
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(theme::divider_color()),
            );

            // Drag handle
            let handle_center = Point::new(divider_x, area.y + area.height / 2.0);
            let handle = Path::circle(handle_center, sizing::SLIDER_HANDLE / 2.0);
            frame.fill(&handle, theme::divider_handle_color());
            frame.stroke(
                &handle,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(theme::divider_handle_border_color()),
            );

            // Pane labels over the top corners
            Self::draw_label(
                &mut frame,
                &self.original_label,
                area.x + spacing::XS,
                area.y + spacing::XS,
                false,
            );
            Self::draw_label(
                &mut frame,
                &self.processed_label,
                area.x + area.width - spacing::XS,
                area.y + spacing::XS,
                true,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> iced::mouse::Interaction {
        if self.dragging {
            return iced::mouse::Interaction::ResizingHorizontally;
        }

        if self.processed.is_some() {
            if let Some(cursor_position) = cursor.position_in(bounds) {
                if self.hits_divider(cursor_position, self.display_area(bounds)) {
                    return iced::mouse::Interaction::ResizingHorizontally;
                }
            }
        }

        iced::mouse::Interaction::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_asset;

    fn canvas_for(width: u32, height: u32, position: f32) -> CompareCanvas {
        let original = sample_asset(width, height, Some("test.png"));
        let mut state = State::new();
        state.handle(Message::Grabbed);
        state.handle(Message::Moved {
            x: position,
            width: 100.0,
        });
        state.handle(Message::Released);

        CompareCanvas::new(
            &original,
            Some(&original),
            &state,
            "ORIGINAL".to_owned(),
            "CLEANED".to_owned(),
        )
    }

    #[test]
    fn wide_image_is_letterboxed_vertically() {
        let canvas = canvas_for(200, 100, 50.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));

        let area = canvas.display_area(bounds);

        assert_eq!(area.x, 0.0);
        assert_eq!(area.y, 25.0);
        assert_eq!(area.width, 100.0);
        assert_eq!(area.height, 50.0);
    }

    #[test]
    fn tall_image_is_letterboxed_horizontally() {
        let canvas = canvas_for(100, 200, 50.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));

        let area = canvas.display_area(bounds);

        assert_eq!(area.x, 25.0);
        assert_eq!(area.y, 0.0);
        assert_eq!(area.width, 50.0);
        assert_eq!(area.height, 100.0);
    }

    #[test]
    fn divider_follows_position() {
        let canvas = canvas_for(100, 100, 25.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(200.0, 200.0));

        let area = canvas.display_area(bounds);

        assert_eq!(canvas.divider_x(area), 50.0);
    }

    #[test]
    fn divider_corridor_is_grabbable() {
        let canvas = canvas_for(100, 100, 50.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(200.0, 200.0));
        let area = canvas.display_area(bounds);

        // On the divider
        assert!(canvas.hits_divider(Point::new(100.0, 100.0), area));
        // Within the hit corridor
        assert!(canvas.hits_divider(Point::new(110.0, 30.0), area));
        // Too far to the side
        assert!(!canvas.hits_divider(Point::new(160.0, 100.0), area));
    }

    #[test]
    fn corridor_does_not_extend_past_image() {
        let canvas = canvas_for(200, 100, 50.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        let area = canvas.display_area(bounds);

        // Vertically inside the letterbox band but outside the image
        assert!(!canvas.hits_divider(Point::new(50.0, 10.0), area));
        assert!(canvas.hits_divider(Point::new(50.0, 50.0), area));
    }
}
