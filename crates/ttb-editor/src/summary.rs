//! Per-faculty teaching workload, derived from the store.

use ttb_model::{Faculty, SubjectDetails};

use crate::store::FacultyStore;

/// Sessions for one (semester, subject) pair of a faculty member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadRow {
    pub semester: String,
    pub subject: String,
    pub theory_sessions: u32,
    /// Lab blocks; ungrouped labs count once per batch.
    pub lab_blocks: u32,
}

impl WorkloadRow {
    pub fn total(&self) -> u32 {
        self.theory_sessions.saturating_add(self.lab_blocks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyWorkload {
    pub name: String,
    pub full_name: String,
    pub weekly_hours: u32,
    /// In order of first appearance among the faculty's subjects.
    pub rows: Vec<WorkloadRow>,
}

impl FacultyWorkload {
    pub fn total(&self) -> u32 {
        self.rows
            .iter()
            .fold(0u32, |sum, row| sum.saturating_add(row.total()))
    }
}

/// Workload for every faculty member, in store order.
pub fn workload(store: &FacultyStore) -> Vec<FacultyWorkload> {
    store.faculties().iter().map(faculty_workload).collect()
}

pub fn faculty_workload(faculty: &Faculty) -> FacultyWorkload {
    let mut rows: Vec<WorkloadRow> = Vec::new();

    for subject in &faculty.subjects {
        let position = rows
            .iter()
            .position(|row| row.semester == subject.semester && row.subject == subject.subject);
        let row = match position {
            Some(position) => &mut rows[position],
            None => {
                rows.push(WorkloadRow {
                    semester: subject.semester.clone(),
                    subject: subject.subject.clone(),
                    theory_sessions: 0,
                    lab_blocks: 0,
                });
                let last = rows.len() - 1;
                &mut rows[last]
            }
        };

        match &subject.details {
            SubjectDetails::Theory { theory_classes } => {
                row.theory_sessions = row.theory_sessions.saturating_add(*theory_classes);
            }
            SubjectDetails::Lab {
                num_labs,
                batches,
                batches_grouped,
            } => {
                let blocks = if *batches_grouped {
                    *num_labs
                } else {
                    let batch_count = u32::try_from(batches.len().max(1)).unwrap_or(u32::MAX);
                    num_labs.saturating_mul(batch_count)
                };
                row.lab_blocks = row.lab_blocks.saturating_add(blocks);
            }
        }
    }

    FacultyWorkload {
        name: faculty.name.clone(),
        full_name: faculty.full_name.clone(),
        weekly_hours: faculty.weekly_hours,
        rows,
    }
}
