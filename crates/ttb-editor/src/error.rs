//! Errors raised by edits against the store.

use thiserror::Error;
use ttb_model::{SubjectKind, Weekday};

use crate::field::SubjectField;
use crate::view::ElementId;

/// A rejected edit. The store is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EditError {
    /// Faculty index past the end of the list.
    #[error("no faculty at index {index} (store has {len})")]
    FacultyOutOfRange { index: usize, len: usize },

    /// Subject index past the end of the faculty's subject list.
    #[error("faculty {faculty} has no subject at index {index} (it has {len})")]
    SubjectOutOfRange {
        faculty: usize,
        index: usize,
        len: usize,
    },

    /// Field name that does not exist on the record.
    #[error("unknown field: {0:?}")]
    UnknownField(String),

    /// Variant-only field written on the other variant.
    #[error("{field} does not apply to {kind} subjects")]
    FieldNotApplicable {
        field: SubjectField,
        kind: SubjectKind,
    },

    /// Input addressed to an element the current view does not contain.
    #[error("no control bound to {0}")]
    UnboundElement(ElementId),

    /// Holiday selection beyond the subject's allowance.
    #[error("You can select only {limit} holiday(s) for this subject.")]
    HolidayCapacity {
        faculty: usize,
        subject: usize,
        day: Weekday,
        limit: u32,
    },
}

impl EditError {
    /// True for a rejected holiday selection, as opposed to a bad request.
    #[must_use]
    pub fn is_capacity_violation(&self) -> bool {
        matches!(self, Self::HolidayCapacity { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message_names_the_limit() {
        let err = EditError::HolidayCapacity {
            faculty: 0,
            subject: 0,
            day: Weekday::Wed,
            limit: 2,
        };
        assert!(err.is_capacity_violation());
        assert_eq!(
            err.to_string(),
            "You can select only 2 holiday(s) for this subject."
        );
    }

    #[test]
    fn bounds_errors_are_not_capacity_violations() {
        let err = EditError::FacultyOutOfRange { index: 3, len: 1 };
        assert!(!err.is_capacity_violation());
        assert_eq!(err.to_string(), "no faculty at index 3 (store has 1)");
    }
}
