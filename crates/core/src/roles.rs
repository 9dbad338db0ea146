//! Account roles.
//!
//! Ids and names match the rows seeded by `20250301000002_create_users.sql`.
//! The role travels inside access tokens, so request handling never needs
//! the `roles` table.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User management and statistics on top of everything else.
    Admin,
    #[default]
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    /// Primary key of the seeded `roles` row.
    pub fn id(self) -> DbId {
        match self {
            Role::Admin => 1,
            Role::User => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn from_id(id: DbId) -> Option<Role> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }

    /// Parse a role name in any case, ignoring surrounding whitespace.
    pub fn from_name(name: &str) -> Result<Role, CoreError> {
        let key = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.name() == key)
            .ok_or_else(|| {
                CoreError::Validation(format!("Invalid role '{key}'. Must be one of: admin, user"))
            })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
