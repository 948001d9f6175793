//! Restaurant factory for creating test restaurant entities.
//!
//! This module provides factory methods for creating restaurant entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// Provides a builder pattern for creating restaurant entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&db, owner.id)
///     .name("Seoul Kitchen")
///     .promoted_until(Some(Utc::now() + chrono::Duration::days(7)))
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    cover_image: String,
    category_id: Option<i32>,
    owner_id: i32,
    is_promoted: bool,
    promoted_until: Option<DateTime<Utc>>,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"` where id is auto-incremented
    /// - address: `"1 Test Street"`
    /// - cover_image: a placeholder URL
    /// - category_id: `None`
    /// - is_promoted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the restaurant
    ///
    /// # Returns
    /// - `RestaurantFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Restaurant {}", id),
            address: "1 Test Street".to_string(),
            cover_image: "https://cdn.example.com/cover.png".to_string(),
            category_id: None,
            owner_id,
            is_promoted: false,
            promoted_until: None,
        }
    }

    /// Sets the restaurant name.
    ///
    /// # Arguments
    /// - `name` - Display name for the restaurant
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the restaurant's category.
    ///
    /// # Arguments
    /// - `category_id` - Optional category ID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the promotion state.
    ///
    /// # Arguments
    /// - `is_promoted` - Whether the restaurant is currently promoted
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_promoted(mut self, is_promoted: bool) -> Self {
        self.is_promoted = is_promoted;
        self
    }

    /// Sets the promotion expiry.
    ///
    /// # Arguments
    /// - `promoted_until` - Optional promotion expiry timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn promoted_until(mut self, promoted_until: Option<DateTime<Utc>>) -> Self {
        self.promoted_until = promoted_until;
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        let now = Utc::now();
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            cover_image: ActiveValue::Set(self.cover_image),
            category_id: ActiveValue::Set(self.category_id),
            owner_id: ActiveValue::Set(self.owner_id),
            is_promoted: ActiveValue::Set(self.is_promoted),
            promoted_until: ActiveValue::Set(self.promoted_until),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values for the specified owner.
///
/// Shorthand for `RestaurantFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the user owning the restaurant
///
/// # Returns
/// - `Ok(entity::restaurant::Model)` - Created restaurant entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_restaurant(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db, owner_id).build().await
}
