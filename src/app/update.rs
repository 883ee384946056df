// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! `App::update` borrows its fields into an [`UpdateContext`] and dispatches
//! here. Handlers mutate state synchronously and hand anything slow (dialogs,
//! file reads, the processing call) to a [`Task`].

use super::message::{FileRejection, Message};
use crate::config::Config;
use crate::media::{self, ImageAsset, ValidationError};
use crate::remote::{ImageProcessor, ProcessError};
use crate::session::{ProcessingTicket, UploadSession};
use crate::ui::compare;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Mutable borrows of the application fields the handlers work on.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub session: &'a mut UploadSession,
    pub compare: &'a mut compare::State,
    pub notifications: &'a mut notifications::Manager,
    pub processor: &'a Arc<dyn ImageProcessor>,
}

/// Handles the open file dialog request from the drop zone.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(
    ctx: &UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    load_file(ctx.config.max_upload_bytes(), path)
}

/// Handles a file dropped on the window.
pub fn handle_file_dropped(ctx: &UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    load_file(ctx.config.max_upload_bytes(), path)
}

/// Probes, validates, and loads a candidate file off the UI thread.
///
/// Validation runs before the read, so an oversized or non-image file is
/// rejected without pulling its content into memory.
pub fn load_file(max_bytes: u64, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let candidate =
                media::probe(&path).map_err(|err| FileRejection::LoadFailed(err.to_string()))?;
            media::validate(&candidate, max_bytes).map_err(FileRejection::Refused)?;
            media::load_asset(&path)
                .await
                .map_err(|err| FileRejection::LoadFailed(err.to_string()))
        },
        Message::FileLoaded,
    )
}

/// Applies a load outcome: installs the asset or reports the rejection.
///
/// A rejected or failed file leaves the session exactly as it was; whatever
/// image was up stays up.
pub fn handle_file_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageAsset, FileRejection>,
) -> Task<Message> {
    match result {
        Ok(asset) => {
            // Rejection toasts from earlier attempts are stale once a new
            // image is up.
            ctx.notifications.clear_errors();
            ctx.session.select_file(asset);
            ctx.compare.reset();
        }
        Err(FileRejection::Refused(rejection)) => {
            log::info!("File rejected: {rejection}");
            let mut notification = Notification::error(rejection.i18n_key());
            if let ValidationError::TooLarge { max_bytes, .. } = rejection {
                notification =
                    notification.with_arg("max", (max_bytes / (1024 * 1024)).to_string());
            }
            ctx.notifications.push(notification);
        }
        Err(FileRejection::LoadFailed(reason)) => {
            log::warn!("File load failed: {reason}");
            ctx.notifications
                .push(Notification::error("notification-load-error").with_arg("reason", reason));
        }
    }

    Task::none()
}

/// Starts a processing call when the session allows one.
pub fn handle_start_processing(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(original) = ctx.session.original().cloned() else {
        return Task::none();
    };
    let Some(ticket) = ctx.session.begin_processing() else {
        return Task::none();
    };

    let instruction = ctx.session.effective_instruction();
    let processor = Arc::clone(ctx.processor);
    log::info!(
        "Processing started: {} bytes, {}",
        original.bytes().len(),
        original.media_type()
    );

    Task::perform(
        async move { processor.process(original, instruction).await },
        move |result| Message::ProcessingCompleted { ticket, result },
    )
}

/// Applies a processing outcome.
///
/// The session discards results whose ticket no longer matches its
/// generation; a reset or a new file between start and arrival makes the
/// result stale.
pub fn handle_processing_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: ProcessingTicket,
    result: Result<ImageAsset, ProcessError>,
) -> Task<Message> {
    if let Err(err) = &result {
        log::warn!("Processing failed: {err}");
    }

    let succeeded = result.is_ok();
    if !ctx.session.complete_processing(ticket, result) {
        log::debug!("Dropped a stale processing result");
        return Task::none();
    }

    if succeeded {
        // A new before/after pair starts with the divider centered.
        ctx.compare.reset();
    }

    Task::none()
}

/// Opens the save dialog pre-filled with a name derived from the original.
pub fn handle_save_requested(ctx: &UpdateContext<'_>) -> Task<Message> {
    if ctx.session.processed().is_none() {
        return Task::none();
    }

    let file_name =
        media::cleaned_file_name(ctx.session.original().and_then(ImageAsset::file_name));

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .save_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Writes the processed bytes to the chosen path.
pub fn handle_save_dialog_result(ctx: &UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    let Some(processed) = ctx.session.processed().cloned() else {
        return Task::none();
    };

    Task::perform(
        async move {
            tokio::fs::write(&path, processed.bytes())
                .await
                .map_err(|err| err.to_string())
        },
        Message::SaveCompleted,
    )
}

/// Reports the save outcome as a toast.
pub fn handle_save_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), String>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.notifications
                .push(Notification::success("notification-save-success"));
        }
        Err(reason) => {
            log::warn!("Save failed: {reason}");
            ctx.notifications
                .push(Notification::error("notification-save-error").with_arg("reason", reason));
        }
    }

    Task::none()
}

/// Clears the session back to the drop zone.
///
/// While processing this doubles as a cancel: the generation advances, so
/// the in-flight result lands stale and is dropped on arrival.
pub fn handle_reset(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.session.reset();
    ctx.compare.reset();
    Task::none()
}
