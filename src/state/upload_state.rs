// src/state/upload_state.rs
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::api::SubmissionError;
use crate::report::AnalysisResult;

pub const DEFAULT_RISK: u8 = 50;

/// Where the upload form sits in its submission cycle. Success is not a
/// stored phase: a finished submission is applied by the app (store write +
/// navigation) and the form drops back to `Ready` with its selection kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadPhase {
    /// No statement selected yet.
    Idle,
    /// Statement selected, nothing in flight.
    Ready,
    /// One request outstanding; submission controls are disabled.
    Submitting,
    /// Last attempt failed; the selection is kept so retry needs no re-pick.
    Failed,
}

pub struct UploadState {
    pub phase: UploadPhase,
    pub selected_file: Option<PathBuf>,
    pub risk: u8,
    pub error_message: Option<String>,

    /// Channel for the single in-flight submission, if any. `reset` drops
    /// it, which orphans the worker's result instead of applying it late.
    in_flight: Option<Receiver<Result<AnalysisResult, SubmissionError>>>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self {
            phase: UploadPhase::Idle,
            selected_file: None,
            risk: DEFAULT_RISK,
            error_message: None,
            in_flight: None,
        }
    }
}

impl UploadState {
    /// Picking a new statement clears any stale error and re-arms the form.
    /// Ignored while a submission is outstanding.
    pub fn select_file(&mut self, path: PathBuf) {
        if self.phase == UploadPhase::Submitting {
            return;
        }
        self.selected_file = Some(path);
        self.error_message = None;
        self.phase = UploadPhase::Ready;
    }

    /// Risk changes are accepted in every phase except `Submitting`; after a
    /// failure, touching the parameter re-arms the form for retry.
    pub fn set_risk(&mut self, risk: u8) {
        if self.phase == UploadPhase::Submitting {
            return;
        }
        self.risk = risk.min(100);
        if self.phase == UploadPhase::Failed && self.selected_file.is_some() {
            self.phase = UploadPhase::Ready;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && self.phase != UploadPhase::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }

    pub fn begin_submission(
        &mut self,
        rx: Receiver<Result<AnalysisResult, SubmissionError>>,
    ) {
        self.phase = UploadPhase::Submitting;
        self.error_message = None;
        self.in_flight = Some(rx);
    }

    /// Terminal-for-this-attempt: the message shows inline and the selected
    /// file and risk stay untouched.
    pub fn fail(&mut self, message: String) {
        self.phase = UploadPhase::Failed;
        self.error_message = Some(message);
        self.in_flight = None;
    }

    pub fn finish(&mut self) {
        self.phase = UploadPhase::Ready;
        self.error_message = None;
        self.in_flight = None;
    }

    /// Back to `Idle`: file cleared, risk back to the default, error gone.
    /// Any outstanding submission loses its receiver and its result is
    /// discarded when it completes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Non-blocking check of the in-flight submission; `None` while it is
    /// still pending (or when nothing is outstanding).
    pub fn poll(&mut self) -> Option<Result<AnalysisResult, SubmissionError>> {
        let rx = self.in_flight.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.in_flight = None;
                Some(Err(SubmissionError::Transport(
                    "submission worker exited unexpectedly".to_string(),
                )))
            }
        }
    }
}
