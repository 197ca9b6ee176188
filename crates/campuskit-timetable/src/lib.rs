//! # Campuskit Timetable
//!
//! Weekly timetable allocation for one class group at a time, with faculty
//! double-booking detection.
//!
//! The [`Allocator`] owns the working grid of the selected class group and a
//! read-only background of other class groups' saved slots. Assignments are
//! checked proactively (a clash rejects the operation, naming the clashing
//! class) and retroactively (a full conflict rescan runs after every
//! mutation). Everything is synchronous and in-memory; persistence goes
//! through the [`GridStore`] trait and user feedback through returned
//! [`Notice`](campuskit_core::Notice)s.
//!
//! # Example
//!
//! ```ignore
//! use campuskit_timetable::{Allocator, Roster};
//! use campuskit_models::standard_day;
//!
//! let mut allocator = Allocator::new(roster, standard_day());
//! allocator.select_class_group(class_id)?;
//! let outcome = allocator.assign_subject(slot_id, subject_id)?;
//! notifier.notify(outcome.notice);
//! ```

pub mod allocator;
pub mod conflicts;
pub mod error;
pub mod grid;
pub mod roster;
pub mod store;

pub use allocator::{Allocator, AssignOutcome, FacultyResolution};
pub use conflicts::detect_conflicts;
pub use error::TimetableError;
pub use grid::{GridConfig, generate_grid};
pub use roster::Roster;
pub use store::{GridStore, MemoryGridStore};
