//! Pre-submission validation of the whole store.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the store holds at least one faculty member;
//! 2. every faculty, in order, has a non-empty name and a known shift;
//! 3. every subject, in order, has no more holidays than its allowance.
//!
//! Positions in messages are 1-based, as the user sees them.

use thiserror::Error;
use tracing::debug;
use ttb_model::{Shift, Subject};

use crate::store::FacultyStore;

/// The first problem found in the store. Submission is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Add at least one faculty member before generating the timetable.")]
    NoFaculty,

    #[error("Faculty #{position}: name is required.")]
    MissingName { position: usize },

    #[error("Faculty #{position} ({name}): shift must be 8-3 or 10-5, got {shift:?}.")]
    InvalidShift {
        position: usize,
        name: String,
        shift: String,
    },

    #[error(
        "Faculty #{faculty} ({name}), {subject}: {selected} holidays selected but only {allowed} allowed."
    )]
    HolidaysOverCapacity {
        faculty: usize,
        name: String,
        /// Subject position and title, e.g. `subject #2 "Networks"`.
        subject: String,
        selected: usize,
        allowed: u32,
    },
}

/// Runs every check against the store, returning the first failure.
pub fn validate(store: &FacultyStore) -> Result<(), ValidationError> {
    if store.is_empty() {
        return Err(ValidationError::NoFaculty);
    }

    for (index, faculty) in store.faculties().iter().enumerate() {
        let position = index + 1;
        if faculty.name.is_empty() {
            return Err(ValidationError::MissingName { position });
        }
        if faculty.shift.parse::<Shift>().is_err() {
            return Err(ValidationError::InvalidShift {
                position,
                name: faculty.name.clone(),
                shift: faculty.shift.clone(),
            });
        }
    }

    for (index, faculty) in store.faculties().iter().enumerate() {
        for (subject_index, subject) in faculty.subjects.iter().enumerate() {
            if subject.holidays_over_capacity() {
                return Err(ValidationError::HolidaysOverCapacity {
                    faculty: index + 1,
                    name: faculty.name.clone(),
                    subject: describe_subject(subject_index + 1, subject),
                    selected: subject.holidays.len(),
                    allowed: subject.num_holidays,
                });
            }
        }
    }

    debug!(faculties = store.len(), "store passed validation");
    Ok(())
}

fn describe_subject(position: usize, subject: &Subject) -> String {
    if subject.subject.is_empty() {
        format!("subject #{position}")
    } else {
        format!("subject #{position} {:?}", subject.subject)
    }
}
