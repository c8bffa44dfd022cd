//! Faculty member records.

use serde::{Deserialize, Serialize};

use crate::enums::{Designation, Shift};
use crate::subject::Subject;

/// Weekly teaching hours assigned to a newly added faculty member.
pub const DEFAULT_WEEKLY_HOURS: u32 = 18;

/// A faculty member and the subjects they teach.
///
/// `designation` and `shift` hold whatever the user last wrote; use
/// [`Faculty::shift_value`] and [`Faculty::designation_value`] to interpret
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Short name, used by the generator for file names.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Full_Name", default)]
    pub full_name: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "Shift")]
    pub shift: String,
    #[serde(rename = "Weekly_Hours")]
    pub weekly_hours: u32,
    #[serde(rename = "Subjects", default)]
    pub subjects: Vec<Subject>,
}

impl Default for Faculty {
    fn default() -> Self {
        Self {
            name: String::new(),
            full_name: String::new(),
            designation: Designation::default().as_str().to_string(),
            shift: Shift::default().as_str().to_string(),
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            subjects: Vec::new(),
        }
    }
}

impl Faculty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed shift, or `None` when the stored string is not a known shift.
    pub fn shift_value(&self) -> Option<Shift> {
        self.shift.parse().ok()
    }

    pub fn designation_value(&self) -> Option<Designation> {
        self.designation.parse().ok()
    }

    pub fn subject(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    pub fn subject_mut(&mut self, index: usize) -> Option<&mut Subject> {
        self.subjects.get_mut(index)
    }
}
