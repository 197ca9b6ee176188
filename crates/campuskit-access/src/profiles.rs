//! The static role→permission table.
//!
//! One [`RoleProfile`] per role, compiled into the binary and never mutated.
//! Resolution over this table is a pure lookup; there is no cache to
//! invalidate and no current-actor singleton.

use campuskit_core::permissions as p;
use campuskit_models::{Role, RoleProfile};

/// Route every unauthenticated or denied actor falls back to.
pub const LOGIN_ROUTE: &str = "/login";

/// The role profile table. Declaration order matches [`Role::ALL`].
pub const PROFILES: &[RoleProfile] = &[
    RoleProfile {
        role: Role::Admin,
        permissions: &[
            p::USERS_MANAGE,
            p::USERS_READ,
            p::COURSES_MANAGE,
            p::COURSES_READ,
            p::ADMISSIONS_MANAGE,
            p::ADMISSIONS_REVIEW,
            p::FEES_READ,
            p::ASSETS_READ,
            p::LIBRARY_READ,
            p::TIMETABLE_EDIT,
            p::TIMETABLE_READ,
            p::REPORTS_VIEW,
            p::REPORTS_EXPORT,
            p::SETTINGS_READ,
            p::SETTINGS_UPDATE,
        ],
        route_prefixes: &["/admin", "/dashboard"],
        description: "Full administrative access across every application area",
    },
    RoleProfile {
        role: Role::Faculty,
        permissions: &[p::COURSES_READ, p::TIMETABLE_READ, p::REPORTS_VIEW],
        route_prefixes: &["/faculty", "/dashboard"],
        description: "Teaching staff: own timetable, course catalogue, reports",
    },
    RoleProfile {
        role: Role::DepartmentHead,
        permissions: &[
            p::COURSES_MANAGE,
            p::COURSES_READ,
            p::TIMETABLE_EDIT,
            p::TIMETABLE_READ,
            p::REPORTS_VIEW,
            p::REPORTS_EXPORT,
        ],
        route_prefixes: &["/department", "/faculty", "/dashboard"],
        description: "Faculty plus department administration and timetable editing",
    },
    RoleProfile {
        role: Role::AdmissionOfficer,
        permissions: &[p::ADMISSIONS_REVIEW, p::ADMISSIONS_MANAGE, p::REPORTS_VIEW],
        route_prefixes: &["/admissions", "/dashboard"],
        description: "Reviews and manages admission applications",
    },
    RoleProfile {
        role: Role::Student,
        permissions: &[
            p::COURSES_READ,
            p::TIMETABLE_READ,
            p::LIBRARY_READ,
            p::FEES_READ,
        ],
        route_prefixes: &["/dashboard"],
        description: "Enrolled student: own dashboard, timetable, fees, library",
    },
    RoleProfile {
        role: Role::Librarian,
        permissions: &[p::LIBRARY_CIRCULATE, p::LIBRARY_MANAGE, p::LIBRARY_READ],
        route_prefixes: &["/library", "/dashboard"],
        description: "Runs library circulation and catalogue",
    },
    RoleProfile {
        role: Role::AssetManager,
        permissions: &[p::ASSETS_MANAGE, p::ASSETS_READ, p::REPORTS_VIEW],
        route_prefixes: &["/assets", "/dashboard"],
        description: "Maintains asset and inventory records",
    },
    RoleProfile {
        role: Role::Accountant,
        permissions: &[
            p::FEES_COLLECT,
            p::FEES_READ,
            p::REPORTS_VIEW,
            p::REPORTS_EXPORT,
        ],
        route_prefixes: &["/accounts", "/dashboard"],
        description: "Records fee payments and produces financial reports",
    },
    RoleProfile {
        role: Role::Guest,
        permissions: &[],
        route_prefixes: &[LOGIN_ROUTE],
        description: "Unauthenticated or unrecognized actor; zero permissions",
    },
];

/// Look up the profile for a role. Every role has exactly one entry.
pub fn profile_for(role: Role) -> &'static RoleProfile {
    PROFILES
        .iter()
        .find(|profile| profile.role == role)
        .unwrap_or(&PROFILES[PROFILES.len() - 1])
}
