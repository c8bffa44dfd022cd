//! Record model for the timetable builder.
//!
//! A configuration is an ordered list of [`Faculty`] members, each owning an
//! ordered list of [`Subject`]s. The serde field names are the wire names the
//! generation service expects.

pub mod enums;
pub mod error;
pub mod faculty;
pub mod holidays;
pub mod subject;

pub use enums::{Designation, Semester, Shift, SubjectKind, Weekday};
pub use error::{ModelError, Result};
pub use faculty::{DEFAULT_WEEKLY_HOURS, Faculty};
pub use holidays::HolidaySet;
pub use subject::{
    DEFAULT_BATCH, DEFAULT_NUM_LABS, DEFAULT_THEORY_CLASSES, MAX_HOLIDAYS, Subject,
    SubjectDetails, default_batches,
};
