//! # Campuskit Access
//!
//! Role-based access control for the campuskit core.
//!
//! The resolver maps an authenticated actor's [`Role`] to a permission set
//! and a set of reachable route prefixes, and decides navigation attempts.
//! It is a pure function of the static table in [`profiles`]: the actor is
//! passed explicitly into every call, and unknown roles fail closed to the
//! zero-permission guest profile.
//!
//! # Example
//!
//! ```ignore
//! use campuskit_access::{resolver, RouteDecision};
//! use campuskit_models::Role;
//!
//! let role = Role::parse(&session.role);
//! match resolver::route_decision(Some(role), "/admin/users") {
//!     RouteDecision::Allow => render(),
//!     RouteDecision::RedirectTo(route) => redirect(route),
//! }
//! ```

pub mod profiles;
pub mod resolver;

pub use profiles::{LOGIN_ROUTE, PROFILES, profile_for};
pub use resolver::{
    RouteDecision, authorize_all, authorize_any, can_access_route, has_permission, home_route,
    resolve_permissions, route_decision,
};
