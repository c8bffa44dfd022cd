//! Type-safe enumerations for faculty and subject fields.
//!
//! Records keep the raw strings the user typed for designation, shift and
//! semester. These enums interpret those strings: they provide the defaults,
//! the option lists offered by the editor, and the membership checks used
//! before submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Academic rank of a faculty member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Designation {
    #[default]
    Professor,
    #[serde(rename = "Assistant Professor")]
    AssistantProfessor,
    #[serde(rename = "Jr Assistant Professor")]
    JrAssistantProfessor,
}

impl Designation {
    pub const ALL: [Designation; 3] = [
        Designation::Professor,
        Designation::AssistantProfessor,
        Designation::JrAssistantProfessor,
    ];

    /// Returns the label as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Designation::Professor => "Professor",
            Designation::AssistantProfessor => "Assistant Professor",
            Designation::JrAssistantProfessor => "Jr Assistant Professor",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Designation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_uppercase().as_str() {
            "PROFESSOR" => Ok(Designation::Professor),
            "ASSISTANT PROFESSOR" => Ok(Designation::AssistantProfessor),
            "JR ASSISTANT PROFESSOR" | "JR. ASSISTANT PROFESSOR" => {
                Ok(Designation::JrAssistantProfessor)
            }
            _ => Err(ModelError::unknown("designation", s)),
        }
    }
}

/// Working hours block of a faculty member or a division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// 8:00 to 15:00.
    #[default]
    #[serde(rename = "8-3")]
    EightToThree,
    /// 10:00 to 17:00.
    #[serde(rename = "10-5")]
    TenToFive,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::EightToThree, Shift::TenToFive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::EightToThree => "8-3",
            Shift::TenToFive => "10-5",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Shift {
    type Err = ModelError;

    /// Only the two canonical labels are accepted, without surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "8-3" => Ok(Shift::EightToThree),
            "10-5" => Ok(Shift::TenToFive),
            _ => Err(ModelError::unknown("shift", s)),
        }
    }
}

/// Semesters offered by the department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    #[default]
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "5")]
    Fifth,
    #[serde(rename = "7")]
    Seventh,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::Third, Semester::Fifth, Semester::Seventh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::Third => "3",
            Semester::Fifth => "5",
            Semester::Seventh => "7",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Semester {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3" => Ok(Semester::Third),
            "5" => Ok(Semester::Fifth),
            "7" => Ok(Semester::Seventh),
            _ => Err(ModelError::unknown("semester", s)),
        }
    }
}

/// Teaching days on which a division can be given a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All selectable days, Monday first.
    pub const ALL: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    /// Accepts the three letter token or the full day name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MON" | "MONDAY" => Ok(Weekday::Mon),
            "TUE" | "TUESDAY" => Ok(Weekday::Tue),
            "WED" | "WEDNESDAY" => Ok(Weekday::Wed),
            "THU" | "THURSDAY" => Ok(Weekday::Thu),
            "FRI" | "FRIDAY" => Ok(Weekday::Fri),
            "SAT" | "SATURDAY" => Ok(Weekday::Sat),
            _ => Err(ModelError::unknown("weekday", s)),
        }
    }
}

/// The two shapes a subject can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectKind {
    Theory,
    Lab,
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 2] = [SubjectKind::Theory, SubjectKind::Lab];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Theory => "Theory",
            SubjectKind::Lab => "Lab",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubjectKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "THEORY" => Ok(SubjectKind::Theory),
            "LAB" => Ok(SubjectKind::Lab),
            _ => Err(ModelError::unknown("subject type", s)),
        }
    }
}
