// SPDX-License-Identifier: MPL-2.0
//! Upload session state machine.
//!
//! Owns the original and processed assets, the user instruction, and the
//! processing lifecycle. The session never touches the rendering layer or
//! the network; the app shell drives it with the outcomes of async tasks.

use crate::media::ImageAsset;
use crate::remote::{compose_instruction, ProcessError};

/// Lifecycle of the current upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Empty,
    Loaded,
    Processing,
    Success,
    Error,
}

/// Stamp issued for one accepted processing call.
///
/// A completion is only applied when its stamp matches the session's
/// current generation, so responses that were superseded by a reset or a
/// new file selection are discarded on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingTicket(u64);

#[derive(Debug, Default)]
pub struct UploadSession {
    status: SessionStatus,
    original: Option<ImageAsset>,
    processed: Option<ImageAsset>,
    error_message: Option<String>,
    instruction: String,
    generation: u64,
}

impl UploadSession {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn original(&self) -> Option<&ImageAsset> {
        self.original.as_ref()
    }

    /// The processed asset. `Some` exactly when the status is `Success`.
    #[must_use]
    pub fn processed(&self) -> Option<&ImageAsset> {
        self.processed.as_ref()
    }

    /// The failure text of the last call. `Some` exactly when the status is
    /// `Error`.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.status == SessionStatus::Processing
    }

    /// Accepts a validated, decoded file as the session's original.
    ///
    /// Allowed from any state: a previous image, result, or error is
    /// replaced. The generation advances, so a call still in flight for the
    /// previous image lands stale.
    pub fn select_file(&mut self, asset: ImageAsset) {
        self.original = Some(asset);
        self.processed = None;
        self.error_message = None;
        self.status = SessionStatus::Loaded;
        self.generation += 1;
    }

    /// Stores the user's addendum to the default instruction, verbatim.
    pub fn set_instruction(&mut self, text: String) {
        self.instruction = text;
    }

    /// The full instruction for the next processing call.
    #[must_use]
    pub fn effective_instruction(&self) -> String {
        compose_instruction(&self.instruction)
    }

    /// Starts a processing call if the session allows one.
    ///
    /// Returns a ticket from `Loaded` or `Error` (clearing the error for
    /// the retry). From `Empty`, `Processing`, or `Success` this is a no-op
    /// returning `None`, which keeps a double start from ever issuing a
    /// second call.
    pub fn begin_processing(&mut self) -> Option<ProcessingTicket> {
        match self.status {
            SessionStatus::Loaded | SessionStatus::Error => {
                self.error_message = None;
                self.status = SessionStatus::Processing;
                Some(ProcessingTicket(self.generation))
            }
            SessionStatus::Empty | SessionStatus::Processing | SessionStatus::Success => None,
        }
    }

    /// Applies the outcome of a processing call.
    ///
    /// Returns whether the outcome was applied. Stale tickets and outcomes
    /// arriving outside `Processing` are ignored. The error text of a
    /// failed call is stored verbatim.
    pub fn complete_processing(
        &mut self,
        ticket: ProcessingTicket,
        result: Result<ImageAsset, ProcessError>,
    ) -> bool {
        if ticket.0 != self.generation || self.status != SessionStatus::Processing {
            return false;
        }

        match result {
            Ok(asset) => {
                self.processed = Some(asset);
                self.status = SessionStatus::Success;
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                self.status = SessionStatus::Error;
            }
        }
        true
    }

    /// Clears the session back to `Empty`.
    ///
    /// Also advances the generation: a call still in flight is discarded
    /// when its completion arrives.
    pub fn reset(&mut self) {
        self.status = SessionStatus::Empty;
        self.original = None;
        self.processed = None;
        self.error_message = None;
        self.instruction.clear();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::DEFAULT_INSTRUCTION;
    use crate::test_utils::sample_asset;

    fn loaded_session() -> UploadSession {
        let mut session = UploadSession::default();
        session.select_file(sample_asset(4, 2, Some("photo.png")));
        session
    }

    #[test]
    fn default_session_is_empty() {
        let session = UploadSession::default();
        assert_eq!(session.status(), SessionStatus::Empty);
        assert!(session.original().is_none());
        assert!(session.processed().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn happy_path_reaches_success_with_processed_asset() {
        let mut session = loaded_session();
        assert_eq!(session.status(), SessionStatus::Loaded);
        assert!(session.processed().is_none());

        let ticket = session.begin_processing().expect("ticket from Loaded");
        assert_eq!(session.status(), SessionStatus::Processing);
        assert!(session.processed().is_none());

        let applied = session.complete_processing(ticket, Ok(sample_asset(4, 2, None)));
        assert!(applied);
        assert_eq!(session.status(), SessionStatus::Success);
        assert!(session.processed().is_some());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn select_file_replaces_previous_image_and_derived_state() {
        let mut session = loaded_session();
        let ticket = session.begin_processing().expect("ticket");
        session.complete_processing(ticket, Ok(sample_asset(4, 2, None)));
        assert_eq!(session.status(), SessionStatus::Success);

        session.select_file(sample_asset(8, 8, Some("other.png")));
        assert_eq!(session.status(), SessionStatus::Loaded);
        assert_eq!(session.original().map(ImageAsset::width), Some(8));
        assert!(session.processed().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn double_begin_issues_exactly_one_ticket() {
        let mut session = loaded_session();
        assert!(session.begin_processing().is_some());
        assert!(session.begin_processing().is_none());
        assert_eq!(session.status(), SessionStatus::Processing);
    }

    #[test]
    fn begin_is_a_no_op_from_empty_and_success() {
        let mut session = UploadSession::default();
        assert!(session.begin_processing().is_none());

        let mut session = loaded_session();
        let ticket = session.begin_processing().expect("ticket");
        session.complete_processing(ticket, Ok(sample_asset(4, 2, None)));
        assert!(session.begin_processing().is_none());
        assert_eq!(session.status(), SessionStatus::Success);
    }

    #[test]
    fn failure_stores_verbatim_message_and_allows_retry() {
        let mut session = loaded_session();
        let ticket = session.begin_processing().expect("ticket");

        let applied = session.complete_processing(
            ticket,
            Err(ProcessError::Failed("quota exceeded".to_string())),
        );
        assert!(applied);
        assert_eq!(session.status(), SessionStatus::Error);
        assert_eq!(session.error_message(), Some("quota exceeded"));
        assert!(session.processed().is_none());

        // Retry from the error state clears the message.
        let retry = session.begin_processing().expect("retry ticket");
        assert_eq!(session.status(), SessionStatus::Processing);
        assert!(session.error_message().is_none());

        session.complete_processing(retry, Ok(sample_asset(4, 2, None)));
        assert_eq!(session.status(), SessionStatus::Success);
    }

    #[test]
    fn no_image_failure_uses_model_message() {
        let mut session = loaded_session();
        let ticket = session.begin_processing().expect("ticket");
        session.complete_processing(ticket, Err(ProcessError::NoImage));
        assert_eq!(
            session.error_message(),
            Some("No image data returned from the model.")
        );
    }

    #[test]
    fn reset_discards_in_flight_completion() {
        let mut session = loaded_session();
        let ticket = session.begin_processing().expect("ticket");

        session.reset();
        assert_eq!(session.status(), SessionStatus::Empty);

        let applied = session.complete_processing(ticket, Ok(sample_asset(4, 2, None)));
        assert!(!applied);
        assert_eq!(session.status(), SessionStatus::Empty);
        assert!(session.processed().is_none());
    }

    #[test]
    fn new_selection_supersedes_in_flight_call() {
        let mut session = loaded_session();
        let stale = session.begin_processing().expect("ticket");

        session.select_file(sample_asset(8, 8, Some("newer.png")));
        let fresh = session.begin_processing().expect("fresh ticket");

        assert!(!session.complete_processing(stale, Ok(sample_asset(1, 1, None))));
        assert_eq!(session.status(), SessionStatus::Processing);

        assert!(session.complete_processing(fresh, Ok(sample_asset(8, 8, None))));
        assert_eq!(session.status(), SessionStatus::Success);
        assert_eq!(session.processed().map(ImageAsset::width), Some(8));
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut session = loaded_session();
        let ticket = session.begin_processing().expect("ticket");
        assert!(session.complete_processing(ticket, Ok(sample_asset(4, 2, None))));
        assert!(!session.complete_processing(ticket, Err(ProcessError::NoImage)));
        assert_eq!(session.status(), SessionStatus::Success);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn reset_clears_instruction_and_assets() {
        let mut session = loaded_session();
        session.set_instruction("remove the logo".to_string());

        session.reset();
        assert_eq!(session.status(), SessionStatus::Empty);
        assert!(session.original().is_none());
        assert!(session.instruction().is_empty());
    }

    #[test]
    fn effective_instruction_defaults_when_addendum_empty() {
        let session = loaded_session();
        assert_eq!(session.effective_instruction(), DEFAULT_INSTRUCTION);
    }

    #[test]
    fn effective_instruction_appends_addendum() {
        let mut session = loaded_session();
        session.set_instruction("remove bottom-right logo".to_string());
        assert_eq!(
            session.effective_instruction(),
            format!("{DEFAULT_INSTRUCTION} Additional instructions: remove bottom-right logo")
        );
    }
}
