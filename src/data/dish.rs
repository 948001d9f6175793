use chrono::Utc;
use entity::dish::DishOptions;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::dish::CreateDishParams;

pub struct DishRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new dish with its option catalog.
    ///
    /// # Arguments
    /// - `params`: Dish fields including the owning restaurant and options
    ///
    /// # Returns
    /// - `Ok(Model)`: The created dish
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateDishParams) -> Result<entity::dish::Model, DbErr> {
        let now = Utc::now();
        entity::dish::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            photo: ActiveValue::Set(params.photo),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            options: ActiveValue::Set(DishOptions(params.options)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds a dish by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The dish
    /// - `Ok(None)`: No dish with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::dish::Model>, DbErr> {
        entity::prelude::Dish::find_by_id(id).one(self.db).await
    }

    /// Gets all dishes on a restaurant's menu, in insertion order.
    ///
    /// # Returns
    /// - `Ok(dishes)`: The restaurant's dishes
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<entity::dish::Model>, DbErr> {
        entity::prelude::Dish::find()
            .filter(entity::dish::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::dish::Column::Id)
            .all(self.db)
            .await
    }
}
