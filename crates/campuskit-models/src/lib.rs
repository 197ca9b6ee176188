//! # Campuskit Models
//!
//! Domain models and DTOs for the campuskit core.
//!
//! This crate provides all data structures used by the access-control and
//! timetable rule-engines, including domain entities, validated setup DTOs,
//! and strongly-typed ids.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed UUID id newtypes
//! - [`roles`]: actor roles and role profiles
//! - [`timetable`]: grid entities (time slots, class groups, subjects,
//!   faculty, lecture slots, conflicts)
//! - [`dto`]: validated setup DTOs
//!
//! # Example
//!
//! ```ignore
//! use campuskit_models::{LectureSlot, Role, SlotState};
//!
//! let role = Role::parse("student");
//! let slot = LectureSlot::empty(class_group_id, 0, time_slot_id);
//! assert_eq!(slot.state(), SlotState::Empty);
//! ```

pub mod dto;
pub mod ids;
pub mod roles;
pub mod timetable;

// Re-export commonly used types at crate root for convenience
pub use ids::{ClassGroupId, FacultyId, LectureSlotId, SubjectId, TimeSlotId};

pub use roles::{Role, RoleProfile};

pub use timetable::{
    ClassGroup, ConflictInfo, ConflictKind, FacultyMember, LectureKind, LectureSlot, SlotState,
    Subject, TimeSlot, day_name, standard_day,
};

pub use dto::{NewClassGroup, NewFacultyMember, NewSubject};
