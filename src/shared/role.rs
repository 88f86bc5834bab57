//! User Roles
//!
//! Every account carries exactly one role. Roles are compared by exact
//! match only: there is no hierarchy, so an `Admin` does not pass a
//! `Student`-only check and vice versa.
//!
//! # Wire format
//!
//! Roles serialize as upper-case strings (`"STUDENT"`, `"COACH"`, `"ADMIN"`),
//! both in JSON bodies, in session token claims and in the `users.role`
//! database column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Role claim carried by a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Coach,
    Admin,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 3] = [Role::Student, Role::Coach, Role::Admin];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Coach => "COACH",
            Role::Admin => "ADMIN",
        }
    }

    /// Dashboard section owned by this role
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Coach => "/coach/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(Role::Student),
            "COACH" => Ok(Role::Coach),
            "ADMIN" => Ok(Role::Admin),
            other => Err(SharedError::validation(
                "role",
                format!("Unknown role '{}'", other),
            )),
        }
    }
}

/// Used by `sqlx::FromRow` to read the `role` text column
impl TryFrom<String> for Role {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
