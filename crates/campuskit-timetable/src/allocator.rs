//! The timetable allocator.
//!
//! Owns the working grid of the currently selected class group, a read-only
//! background collection of other class groups' saved slots, and the roster.
//! Every operation is a synchronous in-memory mutation; persistence and
//! notification are performed by the caller afterwards, using the returned
//! [`Notice`] and the [`GridStore`] collaborator.
//!
//! The faculty invariant is enforced both proactively (assignment attempts
//! that would double-book are rejected) and retroactively (the conflict map
//! is recomputed after every mutation).

use crate::conflicts::detect_conflicts;
use crate::error::TimetableError;
use crate::grid::{GridConfig, generate_grid};
use crate::roster::Roster;
use crate::store::GridStore;
use campuskit_core::Notice;
use campuskit_models::{
    ClassGroup, ClassGroupId, ConflictInfo, FacultyId, LectureSlot, LectureSlotId, SubjectId,
    TimeSlot, TimeSlotId, day_name,
};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// How `assign_subject` resolved the faculty side of the cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacultyResolution {
    /// Exactly one qualified member existed and was conflict-free; the slot
    /// is fully assigned.
    AutoAssigned(FacultyId),
    /// The caller must pick among these candidates with `assign_faculty`.
    Pending(Vec<FacultyId>),
    /// Nobody on the roster can teach this subject.
    NoneQualified,
}

/// Result of `assign_subject`: the resolution plus the notice to surface.
#[derive(Debug, Clone)]
pub struct AssignOutcome {
    pub resolution: FacultyResolution,
    pub notice: Notice,
}

/// Weekly-grid editor for one class group at a time.
pub struct Allocator {
    config: GridConfig,
    time_slots: Vec<TimeSlot>,
    roster: Roster,
    selected: Option<ClassGroup>,
    grid: Vec<LectureSlot>,
    background: Vec<LectureSlot>,
    conflicts: BTreeMap<LectureSlotId, Vec<ConflictInfo>>,
}

impl Allocator {
    pub fn new(roster: Roster, time_slots: Vec<TimeSlot>) -> Self {
        Self::with_config(roster, time_slots, GridConfig::default())
    }

    pub fn with_config(roster: Roster, time_slots: Vec<TimeSlot>, config: GridConfig) -> Self {
        Self {
            config,
            time_slots,
            roster,
            selected: None,
            grid: Vec::new(),
            background: Vec::new(),
            conflicts: BTreeMap::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn selected(&self) -> Option<&ClassGroup> {
        self.selected.as_ref()
    }

    pub fn grid(&self) -> &[LectureSlot] {
        &self.grid
    }

    pub fn slot(&self, slot_id: LectureSlotId) -> Option<&LectureSlot> {
        self.grid.iter().find(|s| s.id == slot_id)
    }

    pub fn slot_at(&self, day_of_week: u8, time_slot_id: TimeSlotId) -> Option<&LectureSlot> {
        self.grid
            .iter()
            .find(|s| s.day_of_week == day_of_week && s.time_slot_id == time_slot_id)
    }

    /// The conflict map as of the last mutation.
    pub fn conflicts(&self) -> &BTreeMap<LectureSlotId, Vec<ConflictInfo>> {
        &self.conflicts
    }

    /// Full rescan of the working grid plus the background slots.
    ///
    /// Pure: two calls without an intervening mutation return identical maps.
    pub fn detect_conflicts(&self) -> BTreeMap<LectureSlotId, Vec<ConflictInfo>> {
        detect_conflicts(&self.grid, &self.background, &self.roster)
    }

    /// Select a class group, generating its all-empty grid. The previous
    /// grid, if any, is discarded.
    #[instrument(skip(self))]
    pub fn select_class_group(
        &mut self,
        class_group_id: ClassGroupId,
    ) -> Result<Notice, TimetableError> {
        let group = self
            .roster
            .class_group(class_group_id)
            .cloned()
            .ok_or(TimetableError::UnknownClassGroup(class_group_id))?;

        self.grid = generate_grid(group.id, &self.time_slots, &self.config);
        self.selected = Some(group.clone());
        // The working grid is authoritative for the selection; background
        // slots saved for it earlier are stale and must not clash against it.
        self.background.retain(|s| s.class_group_id != group.id);
        self.rescan();
        info!(class_group = %group.name, cells = self.grid.len(), "grid generated");
        Ok(Notice::info(format!(
            "Generated {} empty slots for {}",
            self.grid.len(),
            group.name
        )))
    }

    /// Install other class groups' saved slots so clashes against them can
    /// be detected and named. Slots belonging to the selected class group
    /// are skipped; the working grid is authoritative for it.
    pub fn load_background(&mut self, slots: Vec<LectureSlot>) {
        let selected_id = self.selected.as_ref().map(|g| g.id);
        self.background = slots
            .into_iter()
            .filter(|s| Some(s.class_group_id) != selected_id)
            .collect();
        self.rescan();
    }

    /// Set a cell's subject, then resolve faculty: none qualified leaves the
    /// cell awaiting manual help, exactly one is auto-assigned (conflict
    /// permitting), several are returned as candidates for `assign_faculty`.
    #[instrument(skip(self))]
    pub fn assign_subject(
        &mut self,
        slot_id: LectureSlotId,
        subject_id: SubjectId,
    ) -> Result<AssignOutcome, TimetableError> {
        let idx = self.slot_index(slot_id)?;
        let subject = self
            .roster
            .subject(subject_id)
            .cloned()
            .ok_or(TimetableError::UnknownSubject(subject_id))?;

        let (day, time_slot) = {
            let slot = &mut self.grid[idx];
            slot.subject_id = Some(subject.id);
            slot.kind = Some(subject.kind);
            slot.faculty_id = None;
            slot.is_assigned = false;
            (slot.day_of_week, slot.time_slot_id)
        };

        let candidates: Vec<FacultyId> = self
            .roster
            .qualified_for(subject.id)
            .iter()
            .map(|f| f.id)
            .collect();

        let outcome = if candidates.is_empty() {
            warn!(subject = %subject.code, "no qualified faculty");
            AssignOutcome {
                resolution: FacultyResolution::NoneQualified,
                notice: Notice::warning(format!(
                    "No qualified faculty for {}. The slot is awaiting manual assignment",
                    subject.code
                )),
            }
        } else if candidates.len() == 1 {
            let only = candidates[0];
            let clash_class = self
                .clash_for(only, day, time_slot, slot_id)
                .map(|clash| self.roster.class_name(clash.class_group_id));
            match clash_class {
                None => {
                    let slot = &mut self.grid[idx];
                    slot.faculty_id = Some(only);
                    slot.is_assigned = true;
                    AssignOutcome {
                        resolution: FacultyResolution::AutoAssigned(only),
                        notice: Notice::success(format!(
                            "Assigned {} to {} on {}",
                            subject.code,
                            self.faculty_name(only),
                            self.period_label(day, time_slot)
                        )),
                    }
                }
                Some(class_name) => AssignOutcome {
                    resolution: FacultyResolution::Pending(candidates),
                    notice: Notice::warning(format!(
                        "{} already teaches {} at {}. The slot is awaiting manual assignment",
                        self.faculty_name(only),
                        class_name,
                        self.period_label(day, time_slot)
                    )),
                },
            }
        } else {
            AssignOutcome {
                notice: Notice::info(format!(
                    "{} faculty members can teach {}. Choose one to complete the slot",
                    candidates.len(),
                    subject.code
                )),
                resolution: FacultyResolution::Pending(candidates),
            }
        };

        self.rescan();
        Ok(outcome)
    }

    /// Explicitly pick the faculty member for a subject-assigned cell.
    ///
    /// Rejects unqualified candidates and candidates already assigned at the
    /// same (day, time-slot) anywhere in the working grid or background; the
    /// rejection names the clashing class.
    #[instrument(skip(self))]
    pub fn assign_faculty(
        &mut self,
        slot_id: LectureSlotId,
        faculty_id: FacultyId,
    ) -> Result<Notice, TimetableError> {
        let idx = self.slot_index(slot_id)?;
        let subject_id = self.grid[idx]
            .subject_id
            .ok_or(TimetableError::NoSubject(slot_id))?;
        let (day, time_slot) = (self.grid[idx].day_of_week, self.grid[idx].time_slot_id);

        let member = self
            .roster
            .faculty_member(faculty_id)
            .ok_or(TimetableError::UnknownFaculty(faculty_id))?;
        let faculty_name = member.name.clone();

        if !member.can_teach(subject_id) {
            return Err(TimetableError::NotQualified {
                faculty: faculty_name,
                subject: self.subject_label(subject_id),
            });
        }

        if let Some(clash) = self.clash_for(faculty_id, day, time_slot, slot_id) {
            return Err(TimetableError::FacultyClash {
                faculty: faculty_name,
                class_name: self.roster.class_name(clash.class_group_id),
                period: self.period_label(day, time_slot),
                clashing_slot: clash.id,
            });
        }

        let slot = &mut self.grid[idx];
        slot.faculty_id = Some(faculty_id);
        slot.is_assigned = true;
        self.rescan();
        info!(faculty = %faculty_name, "faculty assigned");
        Ok(Notice::success(format!(
            "Assigned {} to {} on {}",
            faculty_name,
            self.subject_label(subject_id),
            self.period_label(day, time_slot)
        )))
    }

    /// Clear a cell back to Empty: subject, faculty, kind, room, and notes
    /// all removed. Destructive; callers are expected to confirm with the
    /// user before invoking it.
    #[instrument(skip(self))]
    pub fn remove_assignment(&mut self, slot_id: LectureSlotId) -> Result<Notice, TimetableError> {
        let idx = self.slot_index(slot_id)?;
        self.grid[idx].clear();
        self.rescan();
        Ok(Notice::success("Assignment removed"))
    }

    /// Move a cell's subject/faculty/kind to another cell, emptying the
    /// source. Legal only while the destination has `is_assigned == false`.
    #[instrument(skip(self))]
    pub fn move_assignment(
        &mut self,
        from_slot_id: LectureSlotId,
        to_slot_id: LectureSlotId,
    ) -> Result<Notice, TimetableError> {
        if from_slot_id == to_slot_id {
            return Ok(Notice::info("Source and destination are the same slot"));
        }
        let from_idx = self.slot_index(from_slot_id)?;
        let to_idx = self.slot_index(to_slot_id)?;

        if self.grid[to_idx].is_assigned {
            return Err(TimetableError::DestinationOccupied(to_slot_id));
        }

        let (subject_id, faculty_id, kind, is_assigned) = {
            let from = &self.grid[from_idx];
            (from.subject_id, from.faculty_id, from.kind, from.is_assigned)
        };
        {
            let to = &mut self.grid[to_idx];
            to.subject_id = subject_id;
            to.faculty_id = faculty_id;
            to.kind = kind;
            to.is_assigned = is_assigned;
        }
        self.grid[from_idx].clear();
        self.rescan();
        Ok(Notice::success("Assignment moved"))
    }

    /// Set the room and notes fields that `remove_assignment` clears.
    #[instrument(skip(self, room, notes))]
    pub fn annotate(
        &mut self,
        slot_id: LectureSlotId,
        room: Option<String>,
        notes: Option<String>,
    ) -> Result<Notice, TimetableError> {
        let idx = self.slot_index(slot_id)?;
        let slot = &mut self.grid[idx];
        slot.room = room;
        slot.notes = notes;
        self.rescan();
        Ok(Notice::success("Slot details updated"))
    }

    /// Bulk-fill the grid: reset every cell to Empty, then rotate theory
    /// subjects across the first `auto_assign_days` weekdays and the first
    /// `auto_assign_periods` time slots, taking the first conflict-free
    /// qualified faculty member per cell.
    ///
    /// The rotation pointer advances every iteration whether or not the
    /// placement succeeded, so subjects with small qualified pools can be
    /// passed over more often than others. Unplaceable cells are silently
    /// left Empty; the conflict map (recomputed on return) and the returned
    /// notice surface the gaps.
    #[instrument(skip(self))]
    pub fn auto_assign(&mut self) -> Result<Notice, TimetableError> {
        let group = self.selected.clone().ok_or(TimetableError::NoSelection)?;
        self.grid = generate_grid(group.id, &self.time_slots, &self.config);

        let rotation: Vec<_> = self
            .roster
            .theory_subjects()
            .iter()
            .map(|s| (s.id, s.kind))
            .collect();
        if rotation.is_empty() {
            self.rescan();
            return Ok(Notice::warning(
                "No theory subjects in the roster. Nothing to auto-assign",
            ));
        }

        let days = self.config.auto_assign_days.min(self.config.days_per_week);
        let periods: Vec<TimeSlotId> = self
            .time_slots
            .iter()
            .take(self.config.auto_assign_periods)
            .map(|ts| ts.id)
            .collect();

        let mut pointer = 0usize;
        let mut placed = 0usize;
        let mut skipped = 0usize;
        for day in 0..days {
            for &time_slot in &periods {
                let (subject_id, kind) = rotation[pointer % rotation.len()];
                // The pointer advances even when placement fails below.
                pointer += 1;

                let candidate = self
                    .roster
                    .qualified_for(subject_id)
                    .iter()
                    .map(|f| f.id)
                    .find(|&f| {
                        self.clash_for(f, day, time_slot, LectureSlotId::nil())
                            .is_none()
                    });

                let Some(faculty_id) = candidate else {
                    skipped += 1;
                    continue;
                };
                if let Some(slot) = self
                    .grid
                    .iter_mut()
                    .find(|s| s.day_of_week == day && s.time_slot_id == time_slot)
                {
                    slot.subject_id = Some(subject_id);
                    slot.kind = Some(kind);
                    slot.faculty_id = Some(faculty_id);
                    slot.is_assigned = true;
                    placed += 1;
                }
            }
        }

        self.rescan();
        info!(placed, skipped, class_group = %group.name, "auto-assignment complete");
        Ok(Notice::success(format!(
            "Auto-assignment placed {} lectures for {}; {} cells left empty",
            placed, group.name, skipped
        )))
    }

    /// Hand the selected class group's full slot collection to the
    /// persistence collaborator.
    pub fn persist(&self, store: &mut dyn GridStore) -> Result<(), TimetableError> {
        let group = self.selected.as_ref().ok_or(TimetableError::NoSelection)?;
        store.save(group.id, &self.grid)?;
        Ok(())
    }

    fn slot_index(&self, slot_id: LectureSlotId) -> Result<usize, TimetableError> {
        self.grid
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or(TimetableError::UnknownSlot(slot_id))
    }

    /// First assigned slot (working grid or background) that would
    /// double-book `faculty_id` at the given period, excluding the slot
    /// being edited.
    fn clash_for(
        &self,
        faculty_id: FacultyId,
        day_of_week: u8,
        time_slot_id: TimeSlotId,
        exclude: LectureSlotId,
    ) -> Option<&LectureSlot> {
        self.grid
            .iter()
            .chain(self.background.iter())
            .find(|s| {
                s.id != exclude
                    && s.is_assigned
                    && s.faculty_id == Some(faculty_id)
                    && s.day_of_week == day_of_week
                    && s.time_slot_id == time_slot_id
            })
    }

    fn rescan(&mut self) {
        self.conflicts = detect_conflicts(&self.grid, &self.background, &self.roster);
    }

    fn period_label(&self, day_of_week: u8, time_slot_id: TimeSlotId) -> String {
        let label = self
            .time_slots
            .iter()
            .find(|ts| ts.id == time_slot_id)
            .map(|ts| ts.label.as_str())
            .unwrap_or("unknown period");
        format!("{} {}", day_name(day_of_week), label)
    }

    fn faculty_name(&self, faculty_id: FacultyId) -> String {
        self.roster
            .faculty_member(faculty_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| faculty_id.to_string())
    }

    fn subject_label(&self, subject_id: SubjectId) -> String {
        self.roster
            .subject(subject_id)
            .map(|s| s.code.clone())
            .unwrap_or_else(|| "this subject".to_string())
    }
}
