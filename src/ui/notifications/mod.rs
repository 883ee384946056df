// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Transient events that should not interrupt the workspace (a rejected
//! file, a finished save, a configuration problem) surface as toasts in
//! the bottom-right corner. Successes and warnings dismiss themselves,
//! errors stay until the user closes them.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
