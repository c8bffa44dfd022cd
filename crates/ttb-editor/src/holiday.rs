//! Holiday selection with the per-subject allowance enforced at edit time.

use tracing::{debug, warn};
use ttb_model::Weekday;

use crate::error::EditError;
use crate::store::FacultyStore;

/// What a successful [`FacultyStore::toggle_holiday`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayToggle {
    /// The day was added to the selection.
    Selected,
    /// The day was already selected; nothing changed.
    AlreadySelected,
    /// The day was removed from the selection.
    Deselected,
    /// The day was not selected; nothing changed.
    NotSelected,
}

impl FacultyStore {
    /// Selects or deselects a holiday for one subject.
    ///
    /// Selecting a new day when the selection already holds `Num_Holidays`
    /// days fails with [`EditError::HolidayCapacity`] carrying the limit, so
    /// the caller can report it and revert its checkbox. Deselecting always
    /// succeeds.
    pub fn toggle_holiday(
        &mut self,
        faculty: usize,
        subject: usize,
        day: Weekday,
        want_selected: bool,
    ) -> Result<HolidayToggle, EditError> {
        let record = self.subject_mut(faculty, subject)?;

        if !want_selected {
            let toggle = if record.holidays.remove(day) {
                HolidayToggle::Deselected
            } else {
                HolidayToggle::NotSelected
            };
            debug!(faculty, subject, %day, ?toggle, "holiday deselected");
            return Ok(toggle);
        }

        if record.holidays.contains(day) {
            return Ok(HolidayToggle::AlreadySelected);
        }

        let limit = record.num_holidays;
        if record.holidays.len() >= limit as usize {
            warn!(faculty, subject, %day, limit, "holiday selection over allowance");
            return Err(EditError::HolidayCapacity {
                faculty,
                subject,
                day,
                limit,
            });
        }

        record.holidays.insert(day);
        debug!(faculty, subject, %day, "holiday selected");
        Ok(HolidayToggle::Selected)
    }
}
