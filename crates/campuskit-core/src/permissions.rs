//! Permission constants for campuskit.
//!
//! This module provides centralized permission string constants for use across
//! the codebase. Using these constants instead of string literals ensures
//! consistency and makes refactoring easier.
//!
//! # Example
//!
//! ```ignore
//! use campuskit_core::permissions;
//! use campuskit_access::resolver;
//!
//! if resolver::has_permission(role, permissions::USERS_MANAGE) {
//!     // Manage users
//! }
//! ```

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to create, update, and deactivate user accounts
pub const USERS_MANAGE: &str = "users:manage";
/// Permission to read user accounts
pub const USERS_READ: &str = "users:read";

// =============================================================================
// Courses / subjects permissions
// =============================================================================

/// Permission to create and edit subjects and course offerings
pub const COURSES_MANAGE: &str = "courses:manage";
/// Permission to read the course catalogue
pub const COURSES_READ: &str = "courses:read";

// =============================================================================
// Admissions permissions
// =============================================================================

/// Permission to review submitted admission applications
pub const ADMISSIONS_REVIEW: &str = "admissions:review";
/// Permission to manage the admission pipeline (forms, intakes, quotas)
pub const ADMISSIONS_MANAGE: &str = "admissions:manage";

// =============================================================================
// Fees permissions
// =============================================================================

/// Permission to record fee payments
pub const FEES_COLLECT: &str = "fees:collect";
/// Permission to read fee schedules and payment history
pub const FEES_READ: &str = "fees:read";

// =============================================================================
// Assets permissions
// =============================================================================

/// Permission to manage asset and inventory records
pub const ASSETS_MANAGE: &str = "assets:manage";
/// Permission to read asset and inventory records
pub const ASSETS_READ: &str = "assets:read";

// =============================================================================
// Library permissions
// =============================================================================

/// Permission to issue and return library items
pub const LIBRARY_CIRCULATE: &str = "library:circulate";
/// Permission to manage the library catalogue
pub const LIBRARY_MANAGE: &str = "library:manage";
/// Permission to browse the library catalogue
pub const LIBRARY_READ: &str = "library:read";

// =============================================================================
// Timetable permissions
// =============================================================================

/// Permission to edit class timetables
pub const TIMETABLE_EDIT: &str = "timetable:edit";
/// Permission to view class timetables
pub const TIMETABLE_READ: &str = "timetable:read";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports:view";
/// Permission to export reports
pub const REPORTS_EXPORT: &str = "reports:export";

// =============================================================================
// Settings permissions
// =============================================================================

/// Permission to read settings
pub const SETTINGS_READ: &str = "settings:read";
/// Permission to update settings
pub const SETTINGS_UPDATE: &str = "settings:update";
