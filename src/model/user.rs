//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::dto::auth::UserDto;

/// An account with a role determining which operations it may invoke.
///
/// The stored password hash never leaves the data layer; this model is what
/// the auth guard attaches to an execution context after identity resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is intentionally dropped here.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    /// Plain credential; hashed before it reaches the data layer.
    pub password: String,
    pub role: UserRole,
}
