//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal role (closed set)
///
/// Serialized with the backend's display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Operator")]
    Operator,
    #[serde(rename = "Site Manager")]
    SiteManager,
    #[serde(rename = "Oxygens Admin")]
    Admin,
    #[serde(rename = "Engineer")]
    Engineer,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Operator,
        Role::SiteManager,
        Role::Admin,
        Role::Engineer,
    ];

    /// Backend display name
    pub const fn name(&self) -> &'static str {
        match self {
            Role::Operator => "Operator",
            Role::SiteManager => "Site Manager",
            Role::Admin => "Oxygens Admin",
            Role::Engineer => "Engineer",
        }
    }

    /// Parse a backend role name; `None` for anything outside the closed set
    pub fn parse(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.name() == name.trim())
    }

    /// Roles whose accounts belong to a customer
    pub fn requires_customer(&self) -> bool {
        matches!(self, Role::Operator | Role::SiteManager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a role name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Nested role association (`"Role": { "name": "Engineer" }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: String,
}
