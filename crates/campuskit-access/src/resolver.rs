//! Pure access-control lookups.
//!
//! Every function here takes the actor's role explicitly and re-reads the
//! static table; there is no session state and nothing to invalidate. The
//! resolver is re-evaluated on every navigation attempt and on every
//! permission-gated render, which is cheap because each check is a couple of
//! slice scans.

use crate::profiles::{LOGIN_ROUTE, profile_for};
use campuskit_models::Role;
use tracing::warn;

/// Where a navigation attempt should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The actor may proceed to the requested route.
    Allow,
    /// The actor must be redirected to the contained route.
    RedirectTo(&'static str),
}

/// Resolve the permission set for a role. Fails closed: [`Role::Guest`]
/// (which unknown role strings parse to) holds the empty set.
pub fn resolve_permissions(role: Role) -> &'static [&'static str] {
    profile_for(role).permissions
}

/// Check a single permission.
pub fn has_permission(role: Role, permission: &str) -> bool {
    resolve_permissions(role).contains(&permission)
}

/// ANY-match: true iff the role holds at least one of `required`.
pub fn authorize_any(role: Role, required: &[&str]) -> bool {
    required.iter().any(|p| has_permission(role, p))
}

/// ALL-match: true iff the role holds every permission in `required`.
pub fn authorize_all(role: Role, required: &[&str]) -> bool {
    required.iter().all(|p| has_permission(role, p))
}

/// True iff `route` starts with one of the role's allowed prefixes.
pub fn can_access_route(role: Role, route: &str) -> bool {
    profile_for(role)
        .route_prefixes
        .iter()
        .any(|prefix| route.starts_with(prefix))
}

/// The actor's home: the first allowed prefix for the role, or the login
/// route when the role can reach nothing.
pub fn home_route(role: Role) -> &'static str {
    profile_for(role)
        .route_prefixes
        .first()
        .copied()
        .unwrap_or(LOGIN_ROUTE)
}

/// Decide a navigation attempt.
///
/// Unauthenticated actors are sent to login; authenticated but unauthorized
/// actors are sent to their own home route.
pub fn route_decision(actor: Option<Role>, route: &str) -> RouteDecision {
    let Some(role) = actor else {
        warn!(route, "unauthenticated navigation attempt");
        return RouteDecision::RedirectTo(LOGIN_ROUTE);
    };

    if can_access_route(role, route) {
        RouteDecision::Allow
    } else {
        warn!(%role, route, "navigation denied");
        RouteDecision::RedirectTo(home_route(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuskit_core::permissions;

    #[test]
    fn test_student_routes() {
        assert!(can_access_route(Role::Student, "/dashboard/profile"));
        assert!(!can_access_route(Role::Student, "/admin/users"));
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let role = Role::parse("registrar_general");
        assert_eq!(role, Role::Guest);
        assert!(resolve_permissions(role).is_empty());
        assert!(!can_access_route(role, "/dashboard"));
        assert!(!can_access_route(role, "/admin"));
        assert!(can_access_route(role, "/login"));
    }

    #[test]
    fn test_authorize_any_and_all() {
        let required = [permissions::LIBRARY_CIRCULATE, permissions::LIBRARY_MANAGE];
        assert!(authorize_any(Role::Librarian, &required));
        assert!(authorize_all(Role::Librarian, &required));

        let mixed = [permissions::LIBRARY_READ, permissions::USERS_MANAGE];
        assert!(authorize_any(Role::Librarian, &mixed));
        assert!(!authorize_all(Role::Librarian, &mixed));

        assert!(!authorize_any(Role::Guest, &mixed));
        // Vacuous truth on the empty requirement set
        assert!(authorize_all(Role::Guest, &[]));
    }

    #[test]
    fn test_route_decision_failure_semantics() {
        assert_eq!(
            route_decision(None, "/dashboard"),
            RouteDecision::RedirectTo("/login")
        );
        assert_eq!(
            route_decision(Some(Role::Student), "/admin/users"),
            RouteDecision::RedirectTo("/dashboard")
        );
        assert_eq!(
            route_decision(Some(Role::Student), "/dashboard/fees"),
            RouteDecision::Allow
        );
        assert_eq!(
            route_decision(Some(Role::Guest), "/assets"),
            RouteDecision::RedirectTo("/login")
        );
    }

    #[test]
    fn test_home_route_is_first_prefix() {
        assert_eq!(home_route(Role::Librarian), "/library");
        assert_eq!(home_route(Role::Guest), "/login");
    }
}
