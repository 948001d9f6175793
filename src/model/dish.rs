//! Dish domain models and parameters.

use chrono::{DateTime, Utc};
use entity::dish::DishOption;

use crate::dto::restaurant::{DishDto, DishOptionDto};

/// A menu entry with its customization option catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    /// Base price in minor currency units.
    pub price: i64,
    pub description: String,
    pub photo: Option<String>,
    pub restaurant_id: i32,
    /// Ordered option catalog, resolved against selections at order time.
    pub options: Vec<DishOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dish {
    /// Converts an entity model to a dish domain model at the repository boundary.
    pub fn from_entity(entity: entity::dish::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            photo: entity.photo,
            restaurant_id: entity.restaurant_id,
            options: entity.options.0,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the dish domain model to a DTO for API responses.
    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            photo: self.photo,
            restaurant_id: self.restaurant_id,
            options: self.options.into_iter().map(DishOptionDto::from).collect(),
        }
    }
}

/// Parameters for adding a dish to a restaurant's menu.
#[derive(Debug, Clone)]
pub struct CreateDishParams {
    pub restaurant_id: i32,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub photo: Option<String>,
    pub options: Vec<DishOption>,
}
