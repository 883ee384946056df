// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window-level file drag events cannot be observed from widgets, so they
//! are routed here into application messages. The periodic tick only runs
//! while something on screen actually moves.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the window event subscription.
///
/// File drops drive the session; hover enter/leave only toggle the drop
/// zone highlight.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path.clone()))
        }
        event::Event::Window(iced::window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
            Some(Message::FileHoverLeft)
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for the spinner animation and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    is_processing: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_processing || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
