// SPDX-License-Identifier: MPL-2.0
//! Divider state for the comparison view.

/// Initial divider position, an even split.
pub const DEFAULT_POSITION: f32 = 50.0;

/// Messages published by the comparison canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The user pressed the divider handle.
    Grabbed,
    /// The cursor moved during a drag. `x` is the horizontal cursor
    /// position relative to the displayed image, `width` the displayed
    /// image width, both in screen pixels.
    Moved { x: f32, width: f32 },
    /// The drag ended (button released or cursor left the window).
    Released,
}

/// Position of the divider between the original and the cleaned image.
///
/// The position is a percentage of the displayed image width. 0 shows the
/// cleaned image only, 100 the original only.
#[derive(Debug, Clone)]
pub struct State {
    position: f32,
    dragging: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            dragging: false,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current divider position in percent, always within `0.0..=100.0`.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Puts the divider back to the centered default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies a canvas message.
    ///
    /// Moves are ignored outside an active drag, and a degenerate display
    /// width leaves the position untouched.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Grabbed => self.dragging = true,
            Message::Moved { x, width } => {
                if self.dragging && width > 0.0 {
                    self.position = (x / width * 100.0).clamp(0.0, 100.0);
                }
            }
            Message::Released => self.dragging = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered_and_idle() {
        let state = State::new();
        assert_eq!(state.position(), DEFAULT_POSITION);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_sequence_updates_position() {
        let mut state = State::new();

        state.handle(Message::Grabbed);
        assert!(state.is_dragging());

        state.handle(Message::Moved {
            x: 150.0,
            width: 600.0,
        });
        assert_eq!(state.position(), 25.0);

        state.handle(Message::Released);
        assert!(!state.is_dragging());
        assert_eq!(state.position(), 25.0);
    }

    #[test]
    fn moves_without_grab_are_ignored() {
        let mut state = State::new();

        state.handle(Message::Moved {
            x: 10.0,
            width: 100.0,
        });

        assert_eq!(state.position(), DEFAULT_POSITION);
    }

    #[test]
    fn drag_beyond_left_edge_clamps_to_zero() {
        let mut state = State::new();

        state.handle(Message::Grabbed);
        state.handle(Message::Moved {
            x: -40.0,
            width: 600.0,
        });

        assert_eq!(state.position(), 0.0);
    }

    #[test]
    fn drag_beyond_right_edge_clamps_to_hundred() {
        let mut state = State::new();

        state.handle(Message::Grabbed);
        state.handle(Message::Moved {
            x: 900.0,
            width: 600.0,
        });

        assert_eq!(state.position(), 100.0);
    }

    #[test]
    fn edge_coordinates_map_to_bounds_exactly() {
        let mut state = State::new();

        state.handle(Message::Grabbed);
        state.handle(Message::Moved {
            x: 0.0,
            width: 400.0,
        });
        assert_eq!(state.position(), 0.0);

        state.handle(Message::Moved {
            x: 400.0,
            width: 400.0,
        });
        assert_eq!(state.position(), 100.0);
    }

    #[test]
    fn zero_width_move_keeps_position() {
        let mut state = State::new();

        state.handle(Message::Grabbed);
        state.handle(Message::Moved { x: 10.0, width: 0.0 });

        assert_eq!(state.position(), DEFAULT_POSITION);
    }

    #[test]
    fn reset_restores_center() {
        let mut state = State::new();

        state.handle(Message::Grabbed);
        state.handle(Message::Moved {
            x: 90.0,
            width: 100.0,
        });
        state.reset();

        assert_eq!(state.position(), DEFAULT_POSITION);
        assert!(!state.is_dragging());
    }
}
