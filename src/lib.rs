//! # Campuskit
//!
//! Core rule-engines of a college management system: role-based access
//! control and weekly timetable allocation.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`core`]: permission constants, notices, collaborator traits
//! - [`models`]: domain entities, ids, DTOs
//! - [`access`]: the access-control resolver (static role table, pure lookups)
//! - [`timetable`]: the timetable allocator and conflict detection
//!
//! Both engines are synchronous, in-memory rule evaluators. Callers own all
//! I/O: they persist through [`timetable::GridStore`] and display the
//! [`core::Notice`]s the operations return.

pub use campuskit_access as access;
pub use campuskit_core as core;
pub use campuskit_models as models;
pub use campuskit_timetable as timetable;
