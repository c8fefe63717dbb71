//! Role router / access guard
//!
//! One declarative table maps each role to its default dashboard and the
//! routes it may open. [`RouteTable::check`] is evaluated on every
//! navigation and holds no state of its own.

use crate::api::AuthApi;
use crate::session::Session;
use shared::models::Role;
use tracing::warn;

/// Entry point for unauthenticated users
pub const LOGIN_ROUTE: &str = "/login";

/// Generic entry point (itself redirects to login)
pub const ROOT_ROUTE: &str = "/";

/// Routes open without a session
pub const PUBLIC_ROUTES: &[&str] = &["/login", "/signup"];

/// Outcome of a navigation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Allowed routes and default dashboard of one role
#[derive(Debug, Clone, Copy)]
pub struct RoleRoutes {
    pub role: Role,
    pub default_route: &'static str,
    /// Route patterns; `:name` segments match any single segment
    pub routes: &'static [&'static str],
}

const STANDARD_ROUTES: [RoleRoutes; 4] = [
    RoleRoutes {
        role: Role::Operator,
        default_route: "/operator",
        routes: &[
            "/operator",
            "/operator/profile",
            "/operator/checklists",
            "/operator/submissions",
            "/operator/checklist/:chamberId",
            "/operator/report-issue/:chamberId",
        ],
    },
    RoleRoutes {
        role: Role::SiteManager,
        default_route: "/site-manager",
        routes: &["/site-manager", "/site-manager/profile"],
    },
    RoleRoutes {
        role: Role::Admin,
        default_route: "/admin",
        routes: &[
            "/admin",
            "/admin/profile",
            "/admin/customers",
            "/admin/chambers",
            "/admin/users",
            "/admin/issues",
        ],
    },
    RoleRoutes {
        role: Role::Engineer,
        default_route: "/engineer",
        routes: &["/engineer", "/engineer/profile", "/engineer/my-issues"],
    },
];

/// Role → routes table consulted by the guard
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RoleRoutes>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// The portal's route table
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ROUTES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[RoleRoutes] {
        &self.entries
    }

    /// Default dashboard of a role
    pub fn default_route(&self, role: Role) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.default_route)
    }

    /// Where a freshly logged-in user lands
    pub fn landing_route(&self, role_name: Option<&str>) -> &'static str {
        role_name
            .and_then(Role::parse)
            .and_then(|role| self.default_route(role))
            .unwrap_or(ROOT_ROUTE)
    }

    /// Roles allowed on `path`; `None` when no protected route matches
    pub fn allowed_roles(&self, path: &str) -> Option<Vec<Role>> {
        let path = normalize(path);
        let roles: Vec<Role> = self
            .entries
            .iter()
            .filter(|e| e.routes.iter().any(|pattern| matches_pattern(pattern, path)))
            .map(|e| e.role)
            .collect();
        (!roles.is_empty()).then_some(roles)
    }

    /// Decide a navigation for the given session role
    ///
    /// `role_name` is `None` when nobody is logged in. Unknown paths and
    /// `/` go to login. A role outside the allow-list goes to its own
    /// dashboard; an unrecognized role goes to `/`.
    pub fn check(&self, role_name: Option<&str>, path: &str) -> Access {
        let normalized = normalize(path);
        if PUBLIC_ROUTES.contains(&normalized) {
            return Access::Allow;
        }
        let Some(allowed) = self.allowed_roles(normalized) else {
            return Access::Redirect(LOGIN_ROUTE);
        };
        let Some(role_name) = role_name else {
            return Access::Redirect(LOGIN_ROUTE);
        };

        match Role::parse(role_name) {
            Some(role) if allowed.contains(&role) => Access::Allow,
            Some(role) => {
                warn!(role = %role, path = normalized, "access denied for role");
                Access::Redirect(self.default_route(role).unwrap_or(ROOT_ROUTE))
            }
            None => {
                warn!(role = role_name, path = normalized, "access denied for unrecognized role");
                Access::Redirect(ROOT_ROUTE)
            }
        }
    }

    /// [`check`](Self::check) against a live session
    pub fn check_session<A: AuthApi>(&self, session: &Session<A>, path: &str) -> Access {
        self.check(session.role_name(), path)
    }
}

/// Drop query/fragment and trailing slashes
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_ROUTE } else { trimmed }
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') && !s.is_empty() => {}
            (Some(p), Some(s)) if p == s => {}
            _ => return false,
        }
    }
}
