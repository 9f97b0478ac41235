//! Actor roles.
//!
//! Roster is not an authentication system: the role arrives as a plain
//! client-supplied string on each privileged request and is threaded through
//! the call chain as an explicit parameter, never ambient state. This module
//! only gives that string a type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The actor role attached to a request.
///
/// Only [`Role::Admin`] may mutate user records. Anything that does not parse
/// as the privileged role is treated as [`Role::User`] (view-only), which is
/// also the default role assigned to newly created users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: create, edit, delete, toggle, bulk import, export.
    Admin,
    /// View-only access.
    User,
}

impl Role {
    /// Returns true for the privileged role.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// The wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    /// Case-insensitive; unrecognized strings fall back to [`Role::User`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("admin") {
            Ok(Role::Admin)
        } else {
            Ok(Role::User)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_case_insensitive() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" Admin ".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_user() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("superuser".parse::<Role>().unwrap(), Role::User);
        assert_eq!("".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }
}
