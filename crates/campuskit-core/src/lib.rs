//! # Campuskit Core
//!
//! Core types and shared utilities for the campuskit workspace.
//!
//! This crate provides foundational pieces used by the access-control and
//! timetable crates:
//!
//! - [`permissions`]: centralized permission string constants
//! - [`notice`]: user-facing event messages with severity, plus the
//!   [`notice::Notifier`] collaborator trait
//!
//! # Example
//!
//! ```ignore
//! use campuskit_core::permissions;
//! use campuskit_core::notice::{Notice, Severity};
//!
//! if granted.contains(&permissions::TIMETABLE_EDIT) {
//!     // Show the timetable editor
//! }
//!
//! let notice = Notice::success("Assignment saved");
//! assert_eq!(notice.severity, Severity::Success);
//! ```

pub mod notice;
pub mod permissions;

// Re-export commonly used types at crate root
pub use notice::{MemoryNotifier, Notice, Notifier, Severity};
