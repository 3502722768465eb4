//! User model -> entity

use dine_core::{DomainError, Snowflake, User};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: Snowflake::new(model.id),
            email: model.email,
            role: model
                .role
                .parse()
                .map_err(|e: DomainError| DomainError::DatabaseError(e.to_string()))?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
