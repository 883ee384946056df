// SPDX-License-Identifier: MPL-2.0
//! Application messages and launch flags.

use crate::media::{ImageAsset, ValidationError};
use crate::remote::ProcessError;
use crate::session::ProcessingTicket;
use crate::ui::compare;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Launch parameters assembled by `main.rs` from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (`--lang`). Takes precedence over config and the
    /// system locale.
    pub lang: Option<String>,
    /// Image file to load at startup.
    pub file_path: Option<String>,
}

/// Why a picked or dropped file never became the session's image.
#[derive(Debug, Clone)]
pub enum FileRejection {
    /// The acceptance rules turned the file down.
    Refused(ValidationError),
    /// Reading or decoding failed for an accepted file.
    LoadFailed(String),
}

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the file picker from the drop zone.
    OpenFileDialog,
    /// Result of the open dialog. `None` when the user cancelled.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A drag carrying a file entered the window.
    FileHovered,
    /// The drag left the window without dropping.
    FileHoverLeft,
    /// Outcome of validating and loading a candidate file.
    FileLoaded(Result<ImageAsset, FileRejection>),
    /// The instruction addendum changed in the sidebar.
    InstructionChanged(String),
    /// Start or retry a processing call.
    StartProcessing,
    /// A processing call came back.
    ProcessingCompleted {
        ticket: ProcessingTicket,
        result: Result<ImageAsset, ProcessError>,
    },
    /// Comparison slider interaction.
    Compare(compare::Message),
    /// Save the processed image.
    SaveRequested,
    /// Result of the save dialog. `None` when the user cancelled.
    SaveDialogResult(Option<PathBuf>),
    /// Outcome of writing the processed image to disk.
    SaveCompleted(Result<(), String>),
    /// Clear the session and return to the drop zone.
    Reset,
    /// Toast notification interaction.
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for the spinner and toast auto-dismiss
}
