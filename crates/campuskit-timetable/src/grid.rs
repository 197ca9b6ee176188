//! Grid configuration and generation.

use campuskit_models::{ClassGroupId, LectureSlot, TimeSlot};
use serde::{Deserialize, Serialize};

/// Shape of the weekly grid and of the auto-assign sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Teaching days per week (Monday through Saturday).
    pub days_per_week: u8,
    /// Weekdays covered by auto-assignment.
    pub auto_assign_days: u8,
    /// Leading time slots covered by auto-assignment.
    pub auto_assign_periods: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            days_per_week: 6,
            auto_assign_days: 5,
            auto_assign_periods: 6,
        }
    }
}

/// Generate the all-empty grid for a class group: one cell per
/// (day, time-slot) pair, day-major so a full day renders contiguously.
pub fn generate_grid(
    class_group_id: ClassGroupId,
    time_slots: &[TimeSlot],
    config: &GridConfig,
) -> Vec<LectureSlot> {
    let mut grid = Vec::with_capacity(config.days_per_week as usize * time_slots.len());
    for day in 0..config.days_per_week {
        for time_slot in time_slots {
            grid.push(LectureSlot::empty(class_group_id, day, time_slot.id));
        }
    }
    grid
}
