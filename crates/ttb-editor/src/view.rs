//! Display structure derived from the store.
//!
//! [`render`] rebuilds the whole view on every call: one card per faculty,
//! one nested card per subject, and a [`Bindings`] map from stable element
//! identifiers to the mutation each control triggers. Nothing is patched
//! incrementally and rendering never touches the store.

use std::collections::BTreeMap;
use std::fmt;

use ttb_model::{
    Designation, Faculty, Semester, Shift, Subject, SubjectDetails, SubjectKind, Weekday,
};

use crate::coerce;
use crate::field::{FacultyField, FieldInput, SubjectField};
use crate::message::Message;
use crate::store::FacultyStore;

// =============================================================================
// Cards
// =============================================================================

/// The rendered editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub faculties: Vec<FacultyCard>,
    pub bindings: Bindings,
}

impl View {
    pub fn faculty(&self, index: usize) -> Option<&FacultyCard> {
        self.faculties.get(index)
    }
}

/// An enumerated field shown as a drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    /// Stored value, verbatim.
    pub value: String,
    pub options: Vec<&'static str>,
    /// Whether `value` is one of `options`.
    pub known: bool,
}

impl SelectField {
    fn new(value: &str, options: Vec<&'static str>) -> Self {
        let known = options.iter().any(|option| *option == value);
        Self {
            value: value.to_string(),
            options,
            known,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyCard {
    pub index: usize,
    /// "Faculty #n", 1-based.
    pub title: String,
    pub name: String,
    pub full_name: String,
    pub designation: SelectField,
    pub shift: SelectField,
    pub weekly_hours: u32,
    pub subjects: Vec<SubjectCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCard {
    pub index: usize,
    pub kind: SubjectKind,
    /// "Theory #n" or "Lab #n", 1-based within the faculty.
    pub title: String,
    pub semester: SelectField,
    pub division: String,
    pub div_shift: SelectField,
    pub subject: String,
    pub course_code: String,
    pub num_holidays: u32,
    /// All six weekdays in order.
    pub holidays: Vec<HolidayCheckbox>,
    /// "selected/allowed".
    pub holiday_usage: String,
    pub over_capacity: bool,
    pub variant: VariantFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayCheckbox {
    pub day: Weekday,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantFields {
    Theory {
        theory_classes: u32,
    },
    Lab {
        num_labs: u32,
        /// "B1/B2" when grouped, "B1, B2" otherwise.
        batches: String,
        batches_grouped: bool,
    },
}

// =============================================================================
// Bindings
// =============================================================================

/// A control inside a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    AddFaculty,
    RemoveFaculty,
    AddSubject(SubjectKind),
    RemoveSubject,
    FacultyField(FacultyField),
    SubjectField(SubjectField),
    Holiday(Weekday),
}

/// Stable identifier of a control: which card it lives in and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub faculty: Option<usize>,
    pub subject: Option<usize>,
    pub control: Control,
}

impl ElementId {
    /// The global "add faculty" button.
    pub fn add_faculty() -> Self {
        Self {
            faculty: None,
            subject: None,
            control: Control::AddFaculty,
        }
    }

    pub fn faculty(faculty: usize, control: Control) -> Self {
        Self {
            faculty: Some(faculty),
            subject: None,
            control,
        }
    }

    pub fn subject(faculty: usize, subject: usize, control: Control) -> Self {
        Self {
            faculty: Some(faculty),
            subject: Some(subject),
            control,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(faculty) = self.faculty {
            write!(f, "faculty[{faculty}].")?;
        }
        if let Some(subject) = self.subject {
            write!(f, "subject[{subject}].")?;
        }
        match self.control {
            Control::AddFaculty => write!(f, "add-faculty"),
            Control::RemoveFaculty | Control::RemoveSubject => write!(f, "remove"),
            Control::AddSubject(kind) => write!(f, "add-{}", kind.as_str().to_lowercase()),
            Control::FacultyField(field) => write!(f, "{field}"),
            Control::SubjectField(field) => write!(f, "{field}"),
            Control::Holiday(day) => write!(f, "holiday-{day}"),
        }
    }
}

/// The mutation a control triggers, with its indices bound at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    AddFaculty,
    RemoveFaculty {
        faculty: usize,
    },
    AddSubject {
        faculty: usize,
        kind: SubjectKind,
    },
    RemoveSubject {
        faculty: usize,
        subject: usize,
    },
    UpdateFaculty {
        faculty: usize,
        field: FacultyField,
    },
    UpdateSubject {
        faculty: usize,
        subject: usize,
        field: SubjectField,
    },
    ToggleHoliday {
        faculty: usize,
        subject: usize,
        day: Weekday,
    },
}

impl Handler {
    /// Builds the message for this handler from the control's input.
    ///
    /// Buttons ignore the input; holiday boxes read it as a checked state.
    pub fn message(self, input: FieldInput) -> Message {
        match self {
            Handler::AddFaculty => Message::AddFaculty,
            Handler::RemoveFaculty { faculty } => Message::RemoveFaculty(faculty),
            Handler::AddSubject { faculty, kind } => Message::AddSubject { faculty, kind },
            Handler::RemoveSubject { faculty, subject } => {
                Message::RemoveSubject { faculty, subject }
            }
            Handler::UpdateFaculty { faculty, field } => Message::UpdateFaculty {
                faculty,
                field,
                input,
            },
            Handler::UpdateSubject {
                faculty,
                subject,
                field,
            } => Message::UpdateSubject {
                faculty,
                subject,
                field,
                input,
            },
            Handler::ToggleHoliday {
                faculty,
                subject,
                day,
            } => Message::ToggleHoliday {
                faculty,
                subject,
                day,
                selected: coerce::truthy(&input),
            },
        }
    }
}

/// Element-to-handler map for one rendered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    handlers: BTreeMap<ElementId, Handler>,
}

impl Bindings {
    pub fn resolve(&self, element: &ElementId) -> Option<Handler> {
        self.handlers.get(element).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &Handler)> {
        self.handlers.iter()
    }

    fn bind(&mut self, element: ElementId, handler: Handler) {
        self.handlers.insert(element, handler);
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Derives the full view from the store.
pub fn render(store: &FacultyStore) -> View {
    let mut bindings = Bindings::default();
    bindings.bind(ElementId::add_faculty(), Handler::AddFaculty);

    let faculties = store
        .faculties()
        .iter()
        .enumerate()
        .map(|(index, faculty)| faculty_card(index, faculty, &mut bindings))
        .collect();

    View {
        faculties,
        bindings,
    }
}

fn faculty_card(index: usize, faculty: &Faculty, bindings: &mut Bindings) -> FacultyCard {
    bindings.bind(
        ElementId::faculty(index, Control::RemoveFaculty),
        Handler::RemoveFaculty { faculty: index },
    );
    for kind in SubjectKind::ALL {
        bindings.bind(
            ElementId::faculty(index, Control::AddSubject(kind)),
            Handler::AddSubject {
                faculty: index,
                kind,
            },
        );
    }
    for field in FacultyField::ALL {
        bindings.bind(
            ElementId::faculty(index, Control::FacultyField(field)),
            Handler::UpdateFaculty {
                faculty: index,
                field,
            },
        );
    }

    let subjects = faculty
        .subjects
        .iter()
        .enumerate()
        .map(|(subject_index, subject)| subject_card(index, subject_index, subject, bindings))
        .collect();

    FacultyCard {
        index,
        title: format!("Faculty #{}", index + 1),
        name: faculty.name.clone(),
        full_name: faculty.full_name.clone(),
        designation: SelectField::new(
            &faculty.designation,
            Designation::ALL.iter().map(Designation::as_str).collect(),
        ),
        shift: SelectField::new(&faculty.shift, Shift::ALL.iter().map(Shift::as_str).collect()),
        weekly_hours: faculty.weekly_hours,
        subjects,
    }
}

fn subject_card(
    faculty: usize,
    index: usize,
    subject: &Subject,
    bindings: &mut Bindings,
) -> SubjectCard {
    let kind = subject.kind();

    bindings.bind(
        ElementId::subject(faculty, index, Control::RemoveSubject),
        Handler::RemoveSubject {
            faculty,
            subject: index,
        },
    );
    for field in SubjectField::ALL
        .into_iter()
        .filter(|field| field.applies_to(kind))
    {
        bindings.bind(
            ElementId::subject(faculty, index, Control::SubjectField(field)),
            Handler::UpdateSubject {
                faculty,
                subject: index,
                field,
            },
        );
    }
    for day in Weekday::ALL {
        bindings.bind(
            ElementId::subject(faculty, index, Control::Holiday(day)),
            Handler::ToggleHoliday {
                faculty,
                subject: index,
                day,
            },
        );
    }

    let variant = match &subject.details {
        SubjectDetails::Theory { theory_classes } => VariantFields::Theory {
            theory_classes: *theory_classes,
        },
        SubjectDetails::Lab {
            num_labs,
            batches_grouped,
            ..
        } => VariantFields::Lab {
            num_labs: *num_labs,
            batches: subject.batches_label().unwrap_or_default(),
            batches_grouped: *batches_grouped,
        },
    };

    SubjectCard {
        index,
        kind,
        title: format!("{kind} #{}", index + 1),
        semester: SelectField::new(
            &subject.semester,
            Semester::ALL.iter().map(Semester::as_str).collect(),
        ),
        division: subject.division.clone(),
        div_shift: SelectField::new(
            &subject.div_shift,
            Shift::ALL.iter().map(Shift::as_str).collect(),
        ),
        subject: subject.subject.clone(),
        course_code: subject.course_code.clone(),
        num_holidays: subject.num_holidays,
        holidays: Weekday::ALL
            .into_iter()
            .map(|day| HolidayCheckbox {
                day,
                checked: subject.holidays.contains(day),
            })
            .collect(),
        holiday_usage: format!("{}/{}", subject.holidays.len(), subject.num_holidays),
        over_capacity: subject.holidays_over_capacity(),
        variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> FacultyStore {
        let mut store = FacultyStore::new();
        store.add_faculty();
        store
            .update_faculty_field(0, FacultyField::Name, "MSK")
            .unwrap();
        store.add_subject(0, SubjectKind::Theory).unwrap();
        store.add_subject(0, SubjectKind::Lab).unwrap();
        store
            .update_subject_field(0, 1, SubjectField::Batches, "B1 B2")
            .unwrap();
        store
    }

    #[test]
    fn empty_store_only_binds_add_faculty() {
        let view = render(&FacultyStore::new());
        assert!(view.faculties.is_empty());
        assert_eq!(view.bindings.len(), 1);
        assert_eq!(
            view.bindings.resolve(&ElementId::add_faculty()),
            Some(Handler::AddFaculty)
        );
    }

    #[test]
    fn cards_mirror_the_store() {
        let view = render(&sample_store());
        let card = view.faculty(0).unwrap();
        assert_eq!(card.title, "Faculty #1");
        assert_eq!(card.name, "MSK");
        assert!(card.shift.known);
        assert_eq!(card.shift.options, vec!["8-3", "10-5"]);
        assert_eq!(card.subjects.len(), 2);

        let lab = &card.subjects[1];
        assert_eq!(lab.title, "Lab #2");
        assert_eq!(lab.holidays.len(), 6);
        assert_eq!(lab.holiday_usage, "0/0");
        assert_eq!(
            lab.variant,
            VariantFields::Lab {
                num_labs: 1,
                batches: "B1, B2".to_string(),
                batches_grouped: false,
            }
        );
    }

    #[test]
    fn unknown_select_value_is_flagged() {
        let mut store = sample_store();
        store
            .update_faculty_field(0, FacultyField::Shift, "9-4")
            .unwrap();
        let view = render(&store);
        let shift = &view.faculty(0).unwrap().shift;
        assert_eq!(shift.value, "9-4");
        assert!(!shift.known);
    }

    #[test]
    fn variant_fields_bound_only_on_their_variant() {
        let view = render(&sample_store());
        let theory_batches =
            ElementId::subject(0, 0, Control::SubjectField(SubjectField::Batches));
        let lab_batches = ElementId::subject(0, 1, Control::SubjectField(SubjectField::Batches));
        assert_eq!(view.bindings.resolve(&theory_batches), None);
        assert_eq!(
            view.bindings.resolve(&lab_batches),
            Some(Handler::UpdateSubject {
                faculty: 0,
                subject: 1,
                field: SubjectField::Batches,
            })
        );
    }

    #[test]
    fn holiday_handler_reads_checked_state() {
        let handler = Handler::ToggleHoliday {
            faculty: 0,
            subject: 0,
            day: Weekday::Fri,
        };
        assert_eq!(
            handler.message(FieldInput::Checked(false)),
            Message::ToggleHoliday {
                faculty: 0,
                subject: 0,
                day: Weekday::Fri,
                selected: false,
            }
        );
    }

    #[test]
    fn render_is_repeatable() {
        let store = sample_store();
        assert_eq!(render(&store), render(&store));
    }

    #[test]
    fn element_ids_display_path() {
        let id = ElementId::subject(1, 2, Control::Holiday(Weekday::Mon));
        assert_eq!(id.to_string(), "faculty[1].subject[2].holiday-Mon");
        assert_eq!(ElementId::add_faculty().to_string(), "add-faculty");
    }
}
