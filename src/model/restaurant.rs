//! Restaurant domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::restaurant::RestaurantDto;

/// A restaurant with its promotion state.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub cover_image: String,
    /// Weak category reference; cleared when the category is removed.
    pub category_id: Option<i32>,
    pub owner_id: i32,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Converts an entity model to a restaurant domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            cover_image: entity.cover_image,
            category_id: entity.category_id,
            owner_id: entity.owner_id,
            is_promoted: entity.is_promoted,
            promoted_until: entity.promoted_until,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the restaurant domain model to a DTO for API responses.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            address: self.address,
            cover_image: self.cover_image,
            category_id: self.category_id,
            owner_id: self.owner_id,
            is_promoted: self.is_promoted,
            promoted_until: self.promoted_until,
        }
    }
}

/// Parameters for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurantParams {
    pub name: String,
    pub address: String,
    pub cover_image: String,
    /// Category name; the category is created on first use.
    pub category: Option<String>,
}
