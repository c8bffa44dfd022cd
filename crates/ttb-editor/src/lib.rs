//! Editable faculty store for the timetable builder.
//!
//! The [`FacultyStore`] holds the faculty list. It is changed only through
//! the mutation API (`add_*`, `remove_*`, `update_*_field`,
//! `toggle_holiday`), checked as a whole by [`validate`], and displayed
//! through [`render`]. [`Editor`] ties these together: one message in, one
//! mutation, one full re-render.

pub mod coerce;
pub mod edit;
pub mod editor;
pub mod error;
pub mod field;
pub mod holiday;
pub mod message;
pub mod store;
pub mod summary;
pub mod validate;
pub mod view;

pub use editor::Editor;
pub use error::EditError;
pub use field::{FacultyField, FieldInput, SubjectField};
pub use holiday::HolidayToggle;
pub use message::Message;
pub use store::FacultyStore;
pub use summary::{FacultyWorkload, WorkloadRow, workload};
pub use validate::{ValidationError, validate};
pub use view::{
    Bindings, Control, ElementId, FacultyCard, Handler, HolidayCheckbox, SelectField,
    SubjectCard, VariantFields, View, render,
};
