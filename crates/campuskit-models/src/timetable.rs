//! Timetable domain entities.
//!
//! A class group owns a weekly grid of [`LectureSlot`] cells, one per
//! (day-of-week, time-slot) pair. Each cell walks a small state machine:
//! **Empty** → **SubjectAssigned** → **FullyAssigned**, with removal
//! returning any state to **Empty**.

use crate::ids::{ClassGroupId, FacultyId, LectureSlotId, SubjectId, TimeSlotId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Theory / practical / lab categorization of a subject occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LectureKind {
    Theory,
    Practical,
    Lab,
}

/// A fixed period of the teaching day. The slot list is created at setup and
/// shared by every class group's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    /// Start-end label, e.g. "09:00 - 09:50".
    pub label: String,
    pub duration_minutes: u16,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>, duration_minutes: u16) -> Self {
        Self {
            id: TimeSlotId::new(),
            label: label.into(),
            duration_minutes,
        }
    }
}

/// The default eight-period teaching day used when a college has not
/// configured its own slot list.
pub fn standard_day() -> Vec<TimeSlot> {
    [
        "08:00 - 08:50",
        "09:00 - 09:50",
        "10:00 - 10:50",
        "11:00 - 11:50",
        "12:00 - 12:50",
        "14:00 - 14:50",
        "15:00 - 15:50",
        "16:00 - 16:50",
    ]
    .into_iter()
    .map(|label| TimeSlot::new(label, 50))
    .collect()
}

/// Human-readable weekday name for a grid day index.
///
/// Grid days run Monday through Saturday (`day_of_week` in `0..6`).
pub fn day_name(day_of_week: u8) -> &'static str {
    match day_of_week {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        _ => "Unknown",
    }
}

/// A year/section cohort of students sharing one timetable grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: ClassGroupId,
    pub name: String,
    pub year: u8,
    pub section: String,
    pub headcount: u16,
}

/// A teachable subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub code: String,
    pub credit_weight: u8,
    pub kind: LectureKind,
}

/// A member of the teaching staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    pub id: FacultyId,
    pub name: String,
    pub department: String,
    /// Subjects this member is qualified to teach.
    pub teachable: HashSet<SubjectId>,
    pub is_department_head: bool,
}

impl FacultyMember {
    /// Plain set-membership qualification check, not a scored match.
    pub fn can_teach(&self, subject_id: SubjectId) -> bool {
        self.teachable.contains(&subject_id)
    }
}

/// Lifecycle state of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    Empty,
    SubjectAssigned,
    FullyAssigned,
}

/// One cell of a class group's weekly grid.
///
/// Exactly one `LectureSlot` exists per (class-group, day, time-slot) triple.
/// Cells are generated empty when a class group is selected and discarded
/// when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureSlot {
    pub id: LectureSlotId,
    pub class_group_id: ClassGroupId,
    /// Day of week in `0..6` (Monday through Saturday).
    pub day_of_week: u8,
    pub time_slot_id: TimeSlotId,
    pub subject_id: Option<SubjectId>,
    pub faculty_id: Option<FacultyId>,
    pub kind: Option<LectureKind>,
    pub room: Option<String>,
    pub notes: Option<String>,
    /// True only once both subject and faculty are set.
    pub is_assigned: bool,
}

impl LectureSlot {
    /// Create an empty cell for the given grid coordinates.
    pub fn empty(class_group_id: ClassGroupId, day_of_week: u8, time_slot_id: TimeSlotId) -> Self {
        Self {
            id: LectureSlotId::new(),
            class_group_id,
            day_of_week,
            time_slot_id,
            subject_id: None,
            faculty_id: None,
            kind: None,
            room: None,
            notes: None,
            is_assigned: false,
        }
    }

    pub fn state(&self) -> SlotState {
        match (self.subject_id, self.is_assigned) {
            (None, _) => SlotState::Empty,
            (Some(_), false) => SlotState::SubjectAssigned,
            (Some(_), true) => SlotState::FullyAssigned,
        }
    }

    /// Return the cell to the exact **Empty** state: subject, faculty, kind,
    /// room, and notes all cleared.
    pub fn clear(&mut self) {
        self.subject_id = None;
        self.faculty_id = None;
        self.kind = None;
        self.room = None;
        self.notes = None;
        self.is_assigned = false;
    }

    /// Whether two cells occupy the same (day-of-week, time-slot) pair.
    pub fn same_period(&self, other: &LectureSlot) -> bool {
        self.day_of_week == other.day_of_week && self.time_slot_id == other.time_slot_id
    }
}

/// Conflict category. Faculty double-booking is the only category currently
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Faculty,
}

/// A detected timetable conflict: category, human-readable message, and the
/// ids of the colliding cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictInfo {
    pub kind: ConflictKind,
    pub message: String,
    pub slots: [LectureSlotId; 2],
}

impl fmt::Display for ConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
