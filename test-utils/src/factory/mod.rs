//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::user::create_user(&db, UserRole::Owner).await?;
//!     let restaurant = factory::restaurant::create_restaurant(&db, owner.id).await?;
//!
//!     // Create the full order dependency graph in one call
//!     let (owner, client, restaurant, dish) =
//!         factory::helpers::create_order_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::dish::DishFactory;
//!
//! let dish = DishFactory::new(&db, restaurant.id)
//!     .name("Bibimbap")
//!     .price(12_000)
//!     .options(vec![/* ... */])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with a given role
//! - `restaurant` - Create restaurant entities
//! - `dish` - Create dish entities with option catalogs
//! - `order` - Create order and order item entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod dish;
pub mod helpers;
pub mod order;
pub mod restaurant;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use dish::create_dish;
pub use order::{create_order, create_order_item};
pub use restaurant::create_restaurant;
pub use user::create_user;
