//! Submission state machine: `Idle -> Submitting -> Idle`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use ttb_editor::{FacultyStore, validate};

use crate::client::GenerationService;
use crate::error::SubmitError;
use crate::payload::{GenerateRequest, Header};

/// What the front-end shows around the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiStatus {
    pub busy: bool,
    pub submit_enabled: bool,
    /// Message of the last failed attempt.
    pub error: Option<String>,
}

impl Default for UiStatus {
    fn default() -> Self {
        Self {
            busy: false,
            submit_enabled: true,
            error: None,
        }
    }
}

/// Result of one [`SubmissionController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Generation succeeded; go to exactly this location.
    Navigate(String),
    Failed(SubmitError),
    /// Another submission is still in flight; nothing was done.
    Busy,
}

/// Validates the store and hands it to the generation service.
pub struct SubmissionController<S> {
    service: S,
    header: Header,
    status: Mutex<UiStatus>,
}

impl<S: GenerationService> SubmissionController<S> {
    pub fn new(service: S, header: Header) -> Self {
        Self {
            service,
            header,
            status: Mutex::new(UiStatus::default()),
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn set_header(&mut self, header: Header) {
        self.header = header;
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> UiStatus {
        lock(&self.status).clone()
    }

    /// Runs one submission attempt.
    ///
    /// Busy is cleared and submission re-enabled on every exit path,
    /// including a panic inside the service.
    pub fn submit(&self, store: &FacultyStore) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::enter(&self.status) else {
            warn!("submission refused: another one is in flight");
            return SubmitOutcome::Busy;
        };

        match self.run(store) {
            Ok(redirect) => {
                info!(%redirect, "timetable generated");
                SubmitOutcome::Navigate(redirect)
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                lock(&self.status).error = Some(err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn run(&self, store: &FacultyStore) -> Result<String, SubmitError> {
        validate(store)?;
        info!(faculties = store.len(), "store validated, submitting");

        let request = GenerateRequest::new(&self.header, store.faculties());
        self.service.generate(&request).inspect_err(|err| {
            if let SubmitError::Rejected { traceback, .. } = err
                && !traceback.is_empty()
            {
                debug!(traceback = ?traceback, "service traceback");
            }
        })
    }
}

fn lock(status: &Mutex<UiStatus>) -> MutexGuard<'_, UiStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the busy flag for the duration of one attempt.
struct BusyGuard<'a> {
    status: &'a Mutex<UiStatus>,
}

impl<'a> BusyGuard<'a> {
    fn enter(status: &'a Mutex<UiStatus>) -> Option<Self> {
        let mut current = lock(status);
        if current.busy {
            return None;
        }
        current.busy = true;
        current.submit_enabled = false;
        current.error = None;
        Some(Self { status })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut current = lock(self.status);
        current.busy = false;
        current.submit_enabled = true;
    }
}
