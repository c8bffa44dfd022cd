//! Message module for the faculty editor.
//!
//! Every user interaction with the rendered view becomes one of these
//! messages. [`Editor::update`](crate::Editor::update) applies exactly one
//! message and re-renders.

use ttb_model::{SubjectKind, Weekday};

use crate::field::{FacultyField, FieldInput, SubjectField};

/// One mutation request against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // =========================================================================
    // Faculty list
    // =========================================================================
    /// Append a faculty member with default values
    AddFaculty,

    /// Remove the faculty member at this index
    RemoveFaculty(usize),

    /// Write one faculty field
    UpdateFaculty {
        faculty: usize,
        field: FacultyField,
        input: FieldInput,
    },

    // =========================================================================
    // Subjects
    // =========================================================================
    AddSubject {
        faculty: usize,
        kind: SubjectKind,
    },

    RemoveSubject {
        faculty: usize,
        subject: usize,
    },

    /// Write one subject field
    UpdateSubject {
        faculty: usize,
        subject: usize,
        field: SubjectField,
        input: FieldInput,
    },

    /// Check or uncheck a holiday box
    ToggleHoliday {
        faculty: usize,
        subject: usize,
        day: Weekday,
        selected: bool,
    },
}
