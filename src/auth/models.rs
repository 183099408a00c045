//! Authentication data models.

use super::errors::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access role stored with every credential record.
///
/// Admin is a strict superset of teacher capability: an admin passes the
/// teacher access check, but not the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
}

impl Role {
    /// Storage form of the role, matching the `users.role` CHECK constraint
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(AuthError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI theme preference, stored as a singleton settings row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Glass,
}

impl Theme {
    /// Storage form of the theme
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Glass => "glass",
        }
    }

    /// Parse a theme name, coercing anything outside the permitted set to
    /// [`Theme::Light`]. Coercion at the edge keeps the stored value inside
    /// the enumeration no matter what the presentation layer sends.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Theme::Dark,
            "glass" => Theme::Glass,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user held in memory for the lifetime of one login session.
///
/// Never persisted; constructed only by a successful credential check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    pub is_authenticated: bool,
}

impl User {
    /// Build the in-memory user for a verified login
    pub(crate) fn authenticated(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            is_authenticated: true,
        }
    }

    /// Check if this user can access admin features
    pub fn can_access_admin(&self) -> bool {
        self.is_authenticated && self.role == Role::Admin
    }

    /// Check if this user can access teacher features
    pub fn can_access_teacher(&self) -> bool {
        self.is_authenticated && matches!(self.role, Role::Teacher | Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        let err = "student".parse::<Role>().unwrap_err();
        assert!(matches!(err, AuthError::InvalidRole(v) if v == "student"));
    }

    #[test]
    fn test_theme_coerces_unknown_to_light() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("glass"), Theme::Glass);
        assert_eq!(Theme::from_name("neon"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
    }

    #[test]
    fn test_admin_is_superset_of_teacher() {
        let admin = User::authenticated("admin", Role::Admin);
        assert!(admin.can_access_admin());
        assert!(admin.can_access_teacher());

        let teacher = User::authenticated("teacher", Role::Teacher);
        assert!(!teacher.can_access_admin());
        assert!(teacher.can_access_teacher());
    }

    #[test]
    fn test_unauthenticated_user_has_no_access() {
        let mut user = User::authenticated("teacher", Role::Teacher);
        user.is_authenticated = false;
        assert!(!user.can_access_teacher());
        assert!(!user.can_access_admin());
    }
}
