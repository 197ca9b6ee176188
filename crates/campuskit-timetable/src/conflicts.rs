//! Retroactive conflict detection.
//!
//! A full pairwise rescan over the working grid plus the background slots,
//! recomputed after every mutating operation. O(n²) over a few hundred cells
//! is well inside budget, and the scan is a pure function of its inputs, so
//! two scans without an intervening mutation produce identical maps.

use crate::roster::Roster;
use campuskit_models::{ConflictInfo, ConflictKind, LectureSlot, LectureSlotId, day_name};
use std::collections::BTreeMap;
use tracing::debug;

/// Scan `grid` and `background` for violations of the faculty invariant:
/// no two assigned slots of the same faculty member may share a
/// (day-of-week, time-slot) pair.
///
/// The returned map keys both colliding slot ids, each carrying the same
/// [`ConflictInfo`].
pub fn detect_conflicts(
    grid: &[LectureSlot],
    background: &[LectureSlot],
    roster: &Roster,
) -> BTreeMap<LectureSlotId, Vec<ConflictInfo>> {
    let all: Vec<&LectureSlot> = grid.iter().chain(background.iter()).collect();
    let mut conflicts: BTreeMap<LectureSlotId, Vec<ConflictInfo>> = BTreeMap::new();

    for (i, a) in all.iter().enumerate() {
        for b in all.iter().skip(i + 1) {
            if !a.is_assigned || !b.is_assigned {
                continue;
            }
            if a.faculty_id != b.faculty_id || a.faculty_id.is_none() {
                continue;
            }
            if !a.same_period(b) {
                continue;
            }

            let faculty_name = a
                .faculty_id
                .and_then(|id| roster.faculty_member(id))
                .map(|f| f.name.clone())
                .unwrap_or_else(|| "A faculty member".to_string());
            let info = ConflictInfo {
                kind: ConflictKind::Faculty,
                message: format!(
                    "{} is double-booked on {} between {} and {}",
                    faculty_name,
                    day_name(a.day_of_week),
                    roster.class_name(a.class_group_id),
                    roster.class_name(b.class_group_id),
                ),
                slots: [a.id, b.id],
            };
            conflicts.entry(a.id).or_default().push(info.clone());
            conflicts.entry(b.id).or_default().push(info);
        }
    }

    debug!(
        scanned = all.len(),
        conflicting_slots = conflicts.len(),
        "conflict rescan complete"
    );
    conflicts
}
