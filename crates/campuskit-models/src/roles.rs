//! Actor roles and role profiles.
//!
//! The role catalogue is closed: every authenticated actor maps to exactly one
//! [`Role`], and unrecognized role strings fail closed to [`Role::Guest`]
//! (zero permissions, login route only).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerated actor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Faculty,
    DepartmentHead,
    AdmissionOfficer,
    Student,
    Librarian,
    AssetManager,
    Accountant,
    Guest,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 9] = [
        Role::Admin,
        Role::Faculty,
        Role::DepartmentHead,
        Role::AdmissionOfficer,
        Role::Student,
        Role::Librarian,
        Role::AssetManager,
        Role::Accountant,
        Role::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Faculty => "faculty",
            Role::DepartmentHead => "department_head",
            Role::AdmissionOfficer => "admission_officer",
            Role::Student => "student",
            Role::Librarian => "librarian",
            Role::AssetManager => "asset_manager",
            Role::Accountant => "accountant",
            Role::Guest => "guest",
        }
    }

    /// Parse a role string, failing closed.
    ///
    /// Unknown strings resolve to [`Role::Guest`] so that a damaged or stale
    /// session token never grants anything.
    pub fn parse(role_str: &str) -> Role {
        match role_str {
            "admin" => Role::Admin,
            "faculty" => Role::Faculty,
            "department_head" => Role::DepartmentHead,
            "admission_officer" => Role::AdmissionOfficer,
            "student" => Role::Student,
            "librarian" => Role::Librarian,
            "asset_manager" => Role::AssetManager,
            "accountant" => Role::Accountant,
            _ => Role::Guest,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record binding a role to its permissions and reachable routes.
///
/// One profile exists per role, defined at process start and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub role: Role,
    /// Permission strings granted to this role (see `campuskit_core::permissions`).
    pub permissions: &'static [&'static str],
    /// Route prefixes this role may navigate under, most specific first.
    pub route_prefixes: &'static [&'static str],
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }

    #[test]
    fn test_parse_unknown_fails_closed_to_guest() {
        assert_eq!(Role::parse("superuser"), Role::Guest);
        assert_eq!(Role::parse(""), Role::Guest);
        assert_eq!(Role::parse("ADMIN"), Role::Guest);
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::DepartmentHead).unwrap();
        assert_eq!(json, r#""department_head""#);
        let back: Role = serde_json::from_str(r#""admission_officer""#).unwrap();
        assert_eq!(back, Role::AdmissionOfficer);
    }
}
