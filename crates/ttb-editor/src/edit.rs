//! Mutation API: add, remove and update records in the store.
//!
//! Every operation either applies completely or returns an [`EditError`] and
//! leaves the store untouched. Field writes apply the coercion rules in
//! [`crate::coerce`]; anything not listed there is stored verbatim.

use tracing::debug;
use ttb_model::{Faculty, Subject, SubjectDetails, SubjectKind};

use crate::coerce;
use crate::error::EditError;
use crate::field::{FacultyField, FieldInput, SubjectField};
use crate::store::FacultyStore;

impl FacultyStore {
    /// Appends a faculty member with default values and returns its index.
    pub fn add_faculty(&mut self) -> usize {
        let faculties = self.faculties_mut();
        faculties.push(Faculty::new());
        let index = faculties.len() - 1;
        debug!(faculty = index, "added faculty");
        index
    }

    /// Removes the faculty at `index` together with all of its subjects.
    ///
    /// Later faculties shift down by one.
    pub fn remove_faculty(&mut self, index: usize) -> Result<Faculty, EditError> {
        let len = self.len();
        if index >= len {
            return Err(EditError::FacultyOutOfRange { index, len });
        }
        let removed = self.faculties_mut().remove(index);
        debug!(faculty = index, subjects = removed.subjects.len(), "removed faculty");
        Ok(removed)
    }

    /// Appends a subject of the given kind and returns its index.
    pub fn add_subject(&mut self, faculty: usize, kind: SubjectKind) -> Result<usize, EditError> {
        let owner = self.faculty_mut(faculty)?;
        owner.subjects.push(Subject::new(kind));
        let index = owner.subjects.len() - 1;
        debug!(faculty, subject = index, %kind, "added subject");
        Ok(index)
    }

    pub fn remove_subject(&mut self, faculty: usize, subject: usize) -> Result<Subject, EditError> {
        let owner = self.faculty_mut(faculty)?;
        let len = owner.subjects.len();
        if subject >= len {
            return Err(EditError::SubjectOutOfRange {
                faculty,
                index: subject,
                len,
            });
        }
        let removed = owner.subjects.remove(subject);
        debug!(faculty, subject, "removed subject");
        Ok(removed)
    }

    /// Writes one faculty field.
    ///
    /// `Weekly_Hours` is parsed as an integer (invalid or empty input is 0);
    /// every other field keeps the raw text, untrimmed.
    pub fn update_faculty_field(
        &mut self,
        faculty: usize,
        field: FacultyField,
        input: impl Into<FieldInput>,
    ) -> Result<(), EditError> {
        let input = input.into();
        let record = self.faculty_mut(faculty)?;
        match field {
            FacultyField::WeeklyHours => record.weekly_hours = coerce::integer(&input),
            FacultyField::Name => record.name = input.into_text(),
            FacultyField::FullName => record.full_name = input.into_text(),
            FacultyField::Designation => record.designation = input.into_text(),
            FacultyField::Shift => record.shift = input.into_text(),
        }
        debug!(faculty, %field, "updated faculty field");
        Ok(())
    }

    /// Writes one subject field.
    ///
    /// Counts are parsed as integers, `Batches` is split into a non-empty
    /// list, `Batches_Grouped` is read as a flag, and the remaining fields
    /// keep the raw text. Writing a lab-only field on a theory subject (or
    /// the reverse) is rejected.
    pub fn update_subject_field(
        &mut self,
        faculty: usize,
        subject: usize,
        field: SubjectField,
        input: impl Into<FieldInput>,
    ) -> Result<(), EditError> {
        let input = input.into();
        let record = self.subject_mut(faculty, subject)?;
        let kind = record.kind();
        if !field.applies_to(kind) {
            return Err(EditError::FieldNotApplicable { field, kind });
        }

        match field {
            SubjectField::Semester => record.semester = input.into_text(),
            SubjectField::Division => record.division = input.into_text(),
            SubjectField::DivShift => record.div_shift = input.into_text(),
            SubjectField::Subject => record.subject = input.into_text(),
            SubjectField::CourseCode => record.course_code = input.into_text(),
            // Lowering the allowance never drops selected days; validation
            // catches the overflow.
            SubjectField::NumHolidays => record.num_holidays = coerce::holiday_allowance(&input),
            SubjectField::TheoryClasses
            | SubjectField::NumLabs
            | SubjectField::Batches
            | SubjectField::BatchesGrouped => write_variant_field(&mut record.details, field, &input),
        }
        debug!(faculty, subject, %field, "updated subject field");
        Ok(())
    }
}

fn write_variant_field(details: &mut SubjectDetails, field: SubjectField, input: &FieldInput) {
    match (details, field) {
        (SubjectDetails::Theory { theory_classes }, SubjectField::TheoryClasses) => {
            *theory_classes = coerce::integer(input);
        }
        (SubjectDetails::Lab { num_labs, .. }, SubjectField::NumLabs) => {
            *num_labs = coerce::integer(input);
        }
        (SubjectDetails::Lab { batches, .. }, SubjectField::Batches) => {
            *batches = coerce::batches(input);
        }
        (
            SubjectDetails::Lab {
                batches_grouped, ..
            },
            SubjectField::BatchesGrouped,
        ) => {
            *batches_grouped = coerce::truthy(input);
        }
        // Ruled out by `SubjectField::applies_to`.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttb_model::Weekday;

    fn store_with_subject(kind: SubjectKind) -> FacultyStore {
        let mut store = FacultyStore::new();
        store.add_faculty();
        store.add_subject(0, kind).unwrap();
        store
    }

    #[test]
    fn add_faculty_appends_defaults() {
        let mut store = FacultyStore::new();
        assert_eq!(store.add_faculty(), 0);
        assert_eq!(store.add_faculty(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.faculty(1), Some(&Faculty::new()));
    }

    #[test]
    fn remove_faculty_shifts_later_entries() {
        let mut store = FacultyStore::new();
        for name in ["A", "B", "C"] {
            let index = store.add_faculty();
            store
                .update_faculty_field(index, FacultyField::Name, name)
                .unwrap();
        }

        let removed = store.remove_faculty(1).unwrap();

        assert_eq!(removed.name, "B");
        assert_eq!(store.len(), 2);
        assert_eq!(store.faculty(1).unwrap().name, "C");
    }

    #[test]
    fn remove_faculty_out_of_range_leaves_store() {
        let mut store = store_with_subject(SubjectKind::Theory);
        let before = store.clone();
        assert_eq!(
            store.remove_faculty(5).unwrap_err(),
            EditError::FacultyOutOfRange { index: 5, len: 1 }
        );
        assert_eq!(store, before);
    }

    #[test]
    fn remove_subject_checks_bounds() {
        let mut store = store_with_subject(SubjectKind::Lab);
        assert!(store.remove_subject(0, 1).is_err());
        assert_eq!(store.remove_subject(0, 0).unwrap().kind(), SubjectKind::Lab);
        assert!(store.faculty(0).unwrap().subjects.is_empty());
    }

    #[test]
    fn weekly_hours_coerced() {
        let mut store = FacultyStore::new();
        store.add_faculty();
        store
            .update_faculty_field(0, FacultyField::WeeklyHours, "")
            .unwrap();
        assert_eq!(store.faculty(0).unwrap().weekly_hours, 0);
        store
            .update_faculty_field(0, FacultyField::WeeklyHours, "14")
            .unwrap();
        assert_eq!(store.faculty(0).unwrap().weekly_hours, 14);
    }

    #[test]
    fn text_fields_are_verbatim() {
        let mut store = FacultyStore::new();
        store.add_faculty();
        store
            .update_faculty_field(0, FacultyField::Name, "  Dr. Rao ")
            .unwrap();
        store
            .update_faculty_field(0, FacultyField::Shift, "9-4")
            .unwrap();
        let faculty = store.faculty(0).unwrap();
        assert_eq!(faculty.name, "  Dr. Rao ");
        assert_eq!(faculty.shift, "9-4");
    }

    #[test]
    fn lab_fields_coerced() {
        let mut store = store_with_subject(SubjectKind::Lab);
        store
            .update_subject_field(0, 0, SubjectField::NumLabs, "2")
            .unwrap();
        store
            .update_subject_field(0, 0, SubjectField::Batches, "b1, b2  b3")
            .unwrap();
        store
            .update_subject_field(0, 0, SubjectField::BatchesGrouped, true)
            .unwrap();

        let subject = store.subject(0, 0).unwrap();
        assert_eq!(
            subject.details,
            SubjectDetails::Lab {
                num_labs: 2,
                batches: vec!["b1".into(), "b2".into(), "b3".into()],
                batches_grouped: true,
            }
        );
    }

    #[test]
    fn variant_mismatch_rejected() {
        let mut store = store_with_subject(SubjectKind::Theory);
        let before = store.clone();
        assert_eq!(
            store
                .update_subject_field(0, 0, SubjectField::Batches, "B2")
                .unwrap_err(),
            EditError::FieldNotApplicable {
                field: SubjectField::Batches,
                kind: SubjectKind::Theory,
            }
        );
        assert_eq!(store, before);
    }

    #[test]
    fn lowering_allowance_keeps_selection() {
        let mut store = store_with_subject(SubjectKind::Theory);
        store
            .update_subject_field(0, 0, SubjectField::NumHolidays, "2")
            .unwrap();
        store.toggle_holiday(0, 0, Weekday::Mon, true).unwrap();
        store.toggle_holiday(0, 0, Weekday::Sat, true).unwrap();

        store
            .update_subject_field(0, 0, SubjectField::NumHolidays, "1")
            .unwrap();

        let subject = store.subject(0, 0).unwrap();
        assert_eq!(subject.num_holidays, 1);
        assert_eq!(subject.holidays.len(), 2);
        assert!(subject.holidays_over_capacity());
    }
}
