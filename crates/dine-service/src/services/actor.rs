//! The authenticated caller a service acts on behalf of

use dine_core::{Role, Search, Snowflake};

/// Identity taken from a verified access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Snowflake,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Snowflake, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Owners read their own searches; admins read everyone's
    pub fn can_read(&self, search: &Search) -> bool {
        self.is_admin() || search.is_owned_by(self.id)
    }
}
