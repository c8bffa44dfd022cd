//! End-to-end editing scenarios through the public API.

use ttb_editor::{
    Control, EditError, Editor, ElementId, FacultyField, FacultyStore, Message, SubjectField,
    ValidationError, validate,
};
use ttb_model::{SubjectKind, Weekday};

#[test]
fn third_holiday_rejected_with_two_allowed() {
    let mut store = FacultyStore::new();
    let faculty = store.add_faculty();
    store
        .update_faculty_field(faculty, FacultyField::Name, "Dr. Rao")
        .unwrap();
    let subject = store.add_subject(faculty, SubjectKind::Theory).unwrap();
    store
        .update_subject_field(faculty, subject, SubjectField::NumHolidays, "2")
        .unwrap();

    store
        .toggle_holiday(faculty, subject, Weekday::Mon, true)
        .unwrap();
    store
        .toggle_holiday(faculty, subject, Weekday::Tue, true)
        .unwrap();
    let err = store
        .toggle_holiday(faculty, subject, Weekday::Wed, true)
        .unwrap_err();

    assert!(matches!(err, EditError::HolidayCapacity { limit: 2, .. }));
    assert_eq!(
        store.subject(faculty, subject).unwrap().holidays.as_slice(),
        &[Weekday::Mon, Weekday::Tue]
    );
}

#[test]
fn lab_batches_split_from_free_text() {
    let mut store = FacultyStore::new();
    store.add_faculty();
    store.add_subject(0, SubjectKind::Lab).unwrap();
    store
        .update_subject_field(0, 0, SubjectField::Batches, "b1, b2  b3")
        .unwrap();

    assert_eq!(
        store.subject(0, 0).unwrap().batches_label().as_deref(),
        Some("b1, b2, b3")
    );
}

#[test]
fn first_failure_in_list_order_wins() {
    let mut store = FacultyStore::new();
    store.add_faculty();
    store.add_faculty();
    store
        .update_faculty_field(1, FacultyField::Name, "RAO")
        .unwrap();
    store.add_subject(1, SubjectKind::Theory).unwrap();
    store
        .update_subject_field(1, 0, SubjectField::NumHolidays, "1")
        .unwrap();
    store.toggle_holiday(1, 0, Weekday::Sat, true).unwrap();
    store
        .update_subject_field(1, 0, SubjectField::NumHolidays, "0")
        .unwrap();

    assert_eq!(
        validate(&store),
        Err(ValidationError::MissingName { position: 1 })
    );
}

#[test]
fn editor_session_builds_a_valid_store() {
    let mut editor = Editor::new();
    editor.update(Message::AddFaculty).unwrap();
    editor
        .dispatch(
            ElementId::faculty(0, Control::FacultyField(FacultyField::Name)),
            "MSK",
        )
        .unwrap();
    editor
        .dispatch(
            ElementId::faculty(0, Control::FacultyField(FacultyField::Shift)),
            "10-5",
        )
        .unwrap();
    editor
        .dispatch(ElementId::faculty(0, Control::AddSubject(SubjectKind::Lab)), "")
        .unwrap();
    editor
        .dispatch(
            ElementId::subject(0, 0, Control::SubjectField(SubjectField::NumHolidays)),
            "1",
        )
        .unwrap();
    editor
        .dispatch(ElementId::subject(0, 0, Control::Holiday(Weekday::Thu)), true)
        .unwrap();

    let card = &editor.view().faculties[0].subjects[0];
    assert_eq!(card.holiday_usage, "1/1");
    assert!(!card.over_capacity);
    assert_eq!(validate(editor.store()), Ok(()));
}

#[test]
fn removing_a_subject_drops_its_bindings() {
    let mut editor = Editor::new();
    editor.update(Message::AddFaculty).unwrap();
    editor
        .update(Message::AddSubject {
            faculty: 0,
            kind: SubjectKind::Theory,
        })
        .unwrap();
    let holiday = ElementId::subject(0, 0, Control::Holiday(Weekday::Mon));
    assert!(editor.view().bindings.resolve(&holiday).is_some());

    editor
        .dispatch(ElementId::subject(0, 0, Control::RemoveSubject), "")
        .unwrap();

    assert!(editor.view().bindings.resolve(&holiday).is_none());
    assert!(editor.view().faculties[0].subjects.is_empty());
}
