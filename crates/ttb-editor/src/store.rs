//! The editable store: the single source of truth for the view.

use ttb_model::{Faculty, Subject};

use crate::error::EditError;

/// Ordered list of faculty members being edited.
///
/// Reads go through the accessors below. Writes go through the mutation API
/// (`edit` and `holiday` modules), which reports bad indices as
/// [`EditError`] without touching any record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyStore {
    faculties: Vec<Faculty>,
}

impl FacultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.faculties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faculties.is_empty()
    }

    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }

    pub fn faculty(&self, index: usize) -> Option<&Faculty> {
        self.faculties.get(index)
    }

    pub fn subject(&self, faculty: usize, subject: usize) -> Option<&Subject> {
        self.faculty(faculty)?.subject(subject)
    }

    pub(crate) fn faculties_mut(&mut self) -> &mut Vec<Faculty> {
        &mut self.faculties
    }

    pub(crate) fn faculty_mut(&mut self, index: usize) -> Result<&mut Faculty, EditError> {
        let len = self.faculties.len();
        self.faculties
            .get_mut(index)
            .ok_or(EditError::FacultyOutOfRange { index, len })
    }

    pub(crate) fn subject_mut(
        &mut self,
        faculty: usize,
        subject: usize,
    ) -> Result<&mut Subject, EditError> {
        let owner = self.faculty_mut(faculty)?;
        let len = owner.subjects.len();
        owner
            .subject_mut(subject)
            .ok_or(EditError::SubjectOutOfRange {
                faculty,
                index: subject,
                len,
            })
    }
}

impl From<Vec<Faculty>> for FacultyStore {
    fn from(faculties: Vec<Faculty>) -> Self {
        Self { faculties }
    }
}
