//! Order factory for creating test order and order item entities.
//!
//! This module provides factory methods for creating order entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use entity::order::OrderStatus;
use entity::order_item::{OrderItemOption, OrderItemOptions};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Provides a builder pattern for creating order entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, client.id, restaurant.id)
///     .total(19_000)
///     .status(OrderStatus::Cooking)
///     .driver_id(Some(courier.id))
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: Option<i32>,
    driver_id: Option<i32>,
    restaurant_id: Option<i32>,
    total: i64,
    status: OrderStatus,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - driver_id: `None`
    /// - total: `5000`
    /// - status: `Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `customer_id` - ID of the ordering user
    /// - `restaurant_id` - ID of the restaurant the order targets
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, restaurant_id: i32) -> Self {
        Self {
            db,
            customer_id: Some(customer_id),
            driver_id: None,
            restaurant_id: Some(restaurant_id),
            total: 5000,
            status: OrderStatus::Pending,
        }
    }

    /// Sets the assigned courier.
    ///
    /// # Arguments
    /// - `driver_id` - Optional ID of the courier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn driver_id(mut self, driver_id: Option<i32>) -> Self {
        self.driver_id = driver_id;
        self
    }

    /// Sets the order total.
    ///
    /// # Arguments
    /// - `total` - Order total in minor currency units
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    /// Sets the order status.
    ///
    /// # Arguments
    /// - `status` - Lifecycle status
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            customer_id: ActiveValue::Set(self.customer_id),
            driver_id: ActiveValue::Set(self.driver_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            total: ActiveValue::Set(self.total),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the specified customer and restaurant.
///
/// Shorthand for `OrderFactory::new(db, customer_id, restaurant_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `customer_id` - ID of the ordering user
/// - `restaurant_id` - ID of the restaurant the order targets
///
/// # Returns
/// - `Ok(entity::order::Model)` - Created order entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
    restaurant_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_id, restaurant_id).build().await
}

/// Creates an order item snapshot for the given order and dish.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - ID of the owning order
/// - `dish_id` - ID of the referenced dish
/// - `options` - Selected-option snapshot stored with the item
///
/// # Returns
/// - `Ok(entity::order_item::Model)` - Created order item entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    dish_id: i32,
    options: Vec<OrderItemOption>,
) -> Result<entity::order_item::Model, DbErr> {
    let now = Utc::now();
    entity::order_item::ActiveModel {
        id: ActiveValue::NotSet,
        order_id: ActiveValue::Set(order_id),
        dish_id: ActiveValue::Set(Some(dish_id)),
        options: ActiveValue::Set(OrderItemOptions(options)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
