//! User domain model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role; governs who may create restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }

    /// Roles allowed to open new restaurants.
    pub fn can_create_restaurants(&self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Role::User),
            "Manager" => Ok(Role::Manager),
            "Admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub nationality: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub nationality: Option<String>,
    pub role: Role,
}
