//! Submission of the faculty store to the timetable generation service.
//!
//! [`SubmissionController`] validates the store, builds the request payload
//! and passes it to a [`GenerationService`]. [`HttpGenerationService`] is the
//! network implementation.

pub mod client;
pub mod controller;
pub mod error;
pub mod payload;

pub use client::{DEFAULT_ENDPOINT, GenerationService, HttpGenerationService, resolve_redirect};
pub use controller::{SubmissionController, SubmitOutcome, UiStatus};
pub use error::{Result, SubmitError};
pub use payload::{GenerateRequest, GenerateResponse, Header, parse_response};
