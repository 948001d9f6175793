//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates the dependency graph required to place an order.
///
/// This is a convenience method that creates:
/// 1. An owner user
/// 2. A client user
/// 3. A restaurant owned by the owner
/// 4. A dish on that restaurant's menu
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, client, restaurant, dish))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::restaurant::Model,
        entity::dish::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db, UserRole::Owner).await?;
    let client = crate::factory::user::create_user(db, UserRole::Client).await?;
    let restaurant = crate::factory::restaurant::create_restaurant(db, owner.id).await?;
    let dish = crate::factory::dish::create_dish(db, restaurant.id).await?;

    Ok((owner, client, restaurant, dish))
}

/// Creates an order together with its full dependency graph.
///
/// Builds on [`create_order_dependencies`] and additionally persists an
/// order placed by the client at the restaurant, with default total and
/// `Pending` status and no items.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, client, restaurant, dish, order))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::restaurant::Model,
        entity::dish::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let (owner, client, restaurant, dish) = create_order_dependencies(db).await?;
    let order = crate::factory::order::create_order(db, client.id, restaurant.id).await?;

    Ok((owner, client, restaurant, dish, order))
}
