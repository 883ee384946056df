// SPDX-License-Identifier: MPL-2.0
//! `clearview` is a desktop watermark-removal tool built with the Iced GUI
//! framework.
//!
//! A dropped or picked image goes through validation, an upload session, and
//! a Gemini image-editing call; the result comes back as a before/after
//! comparison with a draggable divider. The crate demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/clearview/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod remote;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_utils;
