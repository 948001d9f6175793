//! Dish factory for creating test dish entities.
//!
//! This module provides factory methods for creating dish entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::dish::{DishOption, DishOptions};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// Provides a builder pattern for creating dish entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dish::DishFactory;
///
/// let dish = DishFactory::new(&db, restaurant.id)
///     .name("Bibimbap")
///     .price(12_000)
///     .options(vec![DishOption {
///         name: "spice".to_string(),
///         extra: None,
///         choices: Some(vec![/* ... */]),
///     }])
///     .build()
///     .await?;
/// ```
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i64,
    description: String,
    photo: Option<String>,
    restaurant_id: i32,
    options: Vec<DishOption>,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"` where id is auto-incremented
    /// - price: `5000`
    /// - description: `"Test dish description"`
    /// - photo: `None`
    /// - options: empty catalog
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - ID of the restaurant the dish belongs to
    ///
    /// # Returns
    /// - `DishFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dish {}", id),
            price: 5000,
            description: "Test dish description".to_string(),
            photo: None,
            restaurant_id,
            options: Vec::new(),
        }
    }

    /// Sets the dish name.
    ///
    /// # Arguments
    /// - `name` - Display name for the dish
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the dish price in minor currency units.
    ///
    /// # Arguments
    /// - `price` - Base price of the dish
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the dish's option catalog.
    ///
    /// # Arguments
    /// - `options` - Ordered sequence of dish options
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn options(mut self, options: Vec<DishOption>) -> Self {
        self.options = options;
        self
    }

    /// Builds and inserts the dish entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dish::Model)` - Created dish entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        let now = Utc::now();
        entity::dish::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            photo: ActiveValue::Set(self.photo),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            options: ActiveValue::Set(DishOptions(self.options)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values for the specified restaurant.
///
/// Shorthand for `DishFactory::new(db, restaurant_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `restaurant_id` - ID of the restaurant the dish belongs to
///
/// # Returns
/// - `Ok(entity::dish::Model)` - Created dish entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_dish(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db, restaurant_id).build().await
}
