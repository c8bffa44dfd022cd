//! Ordered, duplicate-free set of holiday weekdays.

use serde::{Deserialize, Serialize};

use crate::enums::Weekday;

/// Weekdays selected as holidays for a subject's division.
///
/// Keeps the order in which days were selected. Duplicates are dropped on
/// insert and when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct HolidaySet {
    days: Vec<Weekday>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Appends `day` unless already present. Returns true when added.
    pub fn insert(&mut self, day: Weekday) -> bool {
        if self.contains(day) {
            return false;
        }
        self.days.push(day);
        true
    }

    /// Removes `day` if present. Returns true when removed.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let before = self.days.len();
        self.days.retain(|d| *d != day);
        self.days.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }

    pub fn as_slice(&self) -> &[Weekday] {
        &self.days
    }
}

impl FromIterator<Weekday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = HolidaySet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<Vec<Weekday>> for HolidaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<HolidaySet> for Vec<Weekday> {
    fn from(set: HolidaySet) -> Self {
        set.days
    }
}
