//! The persistence collaborator.
//!
//! The core hands the full slot collection for a class group to a
//! [`GridStore`] and learns only success or failure; whether that is a REST
//! call, a file write, or an in-memory map is the implementor's business.

use anyhow::Result;
use campuskit_models::{ClassGroupId, LectureSlot};
use std::collections::HashMap;

/// Accepts the full `LectureSlot` collection for a class group.
pub trait GridStore {
    fn save(&mut self, class_group_id: ClassGroupId, slots: &[LectureSlot]) -> Result<()>;
}

/// In-memory store, keyed by class group. Used by tests and demos.
#[derive(Debug, Default)]
pub struct MemoryGridStore {
    saved: HashMap<ClassGroupId, Vec<LectureSlot>>,
}

impl MemoryGridStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_for(&self, class_group_id: ClassGroupId) -> Option<&[LectureSlot]> {
        self.saved.get(&class_group_id).map(Vec::as_slice)
    }
}

impl GridStore for MemoryGridStore {
    fn save(&mut self, class_group_id: ClassGroupId, slots: &[LectureSlot]) -> Result<()> {
        self.saved.insert(class_group_id, slots.to_vec());
        Ok(())
    }
}
