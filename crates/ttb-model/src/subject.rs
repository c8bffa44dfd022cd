//! Subject records (theory courses and lab sessions).

use serde::{Deserialize, Serialize};

use crate::enums::{Semester, Shift, SubjectKind};
use crate::holidays::HolidaySet;

pub const DEFAULT_THEORY_CLASSES: u32 = 3;
pub const DEFAULT_NUM_LABS: u32 = 1;
/// Batch label used whenever a lab would otherwise have no batches.
pub const DEFAULT_BATCH: &str = "B1";
/// Upper bound for `num_holidays`: one per selectable weekday.
pub const MAX_HOLIDAYS: u32 = 6;

/// A subject taught by one faculty member to one division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Variant tag and variant-only fields, inlined under `Type`.
    #[serde(flatten)]
    pub details: SubjectDetails,
    #[serde(rename = "Semester")]
    pub semester: String,
    #[serde(rename = "Division", default)]
    pub division: String,
    #[serde(rename = "Div_Shift")]
    pub div_shift: String,
    #[serde(rename = "Subject", default)]
    pub subject: String,
    #[serde(rename = "Course_Code", default)]
    pub course_code: String,
    #[serde(rename = "Holidays", default)]
    pub holidays: HolidaySet,
    #[serde(rename = "Num_Holidays", default)]
    pub num_holidays: u32,
}

/// Fields that only exist on one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum SubjectDetails {
    Theory {
        /// Lectures per week.
        #[serde(rename = "Theory_Classes")]
        theory_classes: u32,
    },
    Lab {
        /// Two-hour lab blocks per week, per batch.
        #[serde(rename = "Num_Labs")]
        num_labs: u32,
        #[serde(rename = "Batches", default = "default_batches")]
        batches: Vec<String>,
        /// When set, the batches sit the lab together as one group.
        #[serde(rename = "Batches_Grouped", default)]
        batches_grouped: bool,
    },
}

pub fn default_batches() -> Vec<String> {
    vec![DEFAULT_BATCH.to_string()]
}

impl SubjectDetails {
    pub fn new(kind: SubjectKind) -> Self {
        match kind {
            SubjectKind::Theory => SubjectDetails::Theory {
                theory_classes: DEFAULT_THEORY_CLASSES,
            },
            SubjectKind::Lab => SubjectDetails::Lab {
                num_labs: DEFAULT_NUM_LABS,
                batches: default_batches(),
                batches_grouped: false,
            },
        }
    }

    pub fn kind(&self) -> SubjectKind {
        match self {
            SubjectDetails::Theory { .. } => SubjectKind::Theory,
            SubjectDetails::Lab { .. } => SubjectKind::Lab,
        }
    }
}

impl Subject {
    /// Creates a subject of the given kind with default field values.
    pub fn new(kind: SubjectKind) -> Self {
        Self {
            details: SubjectDetails::new(kind),
            semester: Semester::default().as_str().to_string(),
            division: String::new(),
            div_shift: Shift::default().as_str().to_string(),
            subject: String::new(),
            course_code: String::new(),
            holidays: HolidaySet::new(),
            num_holidays: 0,
        }
    }

    pub fn kind(&self) -> SubjectKind {
        self.details.kind()
    }

    pub fn semester_value(&self) -> Option<Semester> {
        self.semester.parse().ok()
    }

    pub fn div_shift_value(&self) -> Option<Shift> {
        self.div_shift.parse().ok()
    }

    /// True when more holidays are selected than the allowance permits.
    pub fn holidays_over_capacity(&self) -> bool {
        self.holidays.len() > self.num_holidays as usize
    }

    /// Batches as shown to the user: joined by "/" when grouped.
    ///
    /// Returns `None` for theory subjects.
    pub fn batches_label(&self) -> Option<String> {
        match &self.details {
            SubjectDetails::Theory { .. } => None,
            SubjectDetails::Lab {
                batches,
                batches_grouped,
                ..
            } => {
                let separator = if *batches_grouped { "/" } else { ", " };
                Some(batches.join(separator))
            }
        }
    }
}
