//! Writable record fields and raw user input.

use std::fmt;
use std::str::FromStr;

use ttb_model::SubjectKind;

use crate::error::EditError;

/// Faculty fields writable through `update_faculty_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacultyField {
    Name,
    FullName,
    Designation,
    Shift,
    WeeklyHours,
}

impl FacultyField {
    pub const ALL: [FacultyField; 5] = [
        FacultyField::Name,
        FacultyField::FullName,
        FacultyField::Designation,
        FacultyField::Shift,
        FacultyField::WeeklyHours,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacultyField::Name => "Name",
            FacultyField::FullName => "Full_Name",
            FacultyField::Designation => "Designation",
            FacultyField::Shift => "Shift",
            FacultyField::WeeklyHours => "Weekly_Hours",
        }
    }
}

impl fmt::Display for FacultyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FacultyField {
    type Err = EditError;

    /// Matches wire names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditError::UnknownField(s.to_string()))
    }
}

/// Subject fields writable through `update_subject_field`.
///
/// `Holidays` is absent: it only changes through `toggle_holiday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubjectField {
    Semester,
    Division,
    DivShift,
    Subject,
    CourseCode,
    NumHolidays,
    TheoryClasses,
    NumLabs,
    Batches,
    BatchesGrouped,
}

impl SubjectField {
    pub const ALL: [SubjectField; 10] = [
        SubjectField::Semester,
        SubjectField::Division,
        SubjectField::DivShift,
        SubjectField::Subject,
        SubjectField::CourseCode,
        SubjectField::NumHolidays,
        SubjectField::TheoryClasses,
        SubjectField::NumLabs,
        SubjectField::Batches,
        SubjectField::BatchesGrouped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectField::Semester => "Semester",
            SubjectField::Division => "Division",
            SubjectField::DivShift => "Div_Shift",
            SubjectField::Subject => "Subject",
            SubjectField::CourseCode => "Course_Code",
            SubjectField::NumHolidays => "Num_Holidays",
            SubjectField::TheoryClasses => "Theory_Classes",
            SubjectField::NumLabs => "Num_Labs",
            SubjectField::Batches => "Batches",
            SubjectField::BatchesGrouped => "Batches_Grouped",
        }
    }

    /// The variant this field is restricted to, if any.
    pub fn variant(&self) -> Option<SubjectKind> {
        match self {
            SubjectField::TheoryClasses => Some(SubjectKind::Theory),
            SubjectField::NumLabs | SubjectField::Batches | SubjectField::BatchesGrouped => {
                Some(SubjectKind::Lab)
            }
            _ => None,
        }
    }

    pub fn applies_to(&self, kind: SubjectKind) -> bool {
        self.variant().is_none_or(|variant| variant == kind)
    }
}

impl fmt::Display for SubjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubjectField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditError::UnknownField(s.to_string()))
    }
}

/// Raw value coming from an input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Contents of a text, number or select control.
    Text(String),
    /// State of a checkbox.
    Checked(bool),
}

impl FieldInput {
    /// The value as a string; checkbox states become "true"/"false".
    pub fn into_text(self) -> String {
        match self {
            FieldInput::Text(text) => text,
            FieldInput::Checked(checked) => checked.to_string(),
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(value)
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Checked(value)
    }
}
