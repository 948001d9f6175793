use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// # Arguments
    /// - `email`: Unique email address
    /// - `password`: Salted password hash (never the plain credential)
    /// - `role`: Role assigned to the account
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error, including unique constraint violations
    pub async fn create(
        &self,
        email: String,
        password: String,
        role: UserRole,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user with that email
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
