//! User entity and role definitions.
//!
//! [`UserRole`] is the closed role set used everywhere an access decision is
//! made. It is deliberately an enum rather than a free-form string: role
//! dispatch in the policy engine is an exhaustive `match`, so adding or
//! removing a role is a compile-time-checked change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of roles a principal can hold.
///
/// Serialized as a lower-case string on the wire (and inside tokens), which
/// keeps comparisons exact without re-normalizing per request. Any other
/// string fails deserialization and therefore never reaches an access
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Instructor,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Instructor => "instructor",
            UserRole::Student => "student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    /// Case-insensitive parse, so stored role strings are normalized at the
    /// boundary rather than compared loosely later.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "instructor" => Ok(UserRole::Instructor),
            "student" => Ok(UserRole::Student),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

/// A user account, as exposed through the API (no password hash).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}
