//! Restaurant and menu management.

use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, dish::DishRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::{
        dish::{CreateDishParams, Dish},
        restaurant::{CreateRestaurantParams, Restaurant},
        user::User,
    },
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a restaurant owned by the caller.
    ///
    /// When a category name is supplied the category is resolved by slug and
    /// created on first use.
    ///
    /// # Arguments
    /// - `owner`: The resolved owner account
    /// - `params`: Restaurant fields
    ///
    /// # Returns
    /// - `Ok(Restaurant)`: The created restaurant
    /// - `Err(AppError)`: Database error
    pub async fn create_restaurant(
        &self,
        owner: &User,
        params: CreateRestaurantParams,
    ) -> Result<Restaurant, AppError> {
        let category_id = match params.category.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                Some(CategoryRepository::new(self.db).get_or_create(name).await?.id)
            }
            _ => None,
        };

        let restaurant = RestaurantRepository::new(self.db)
            .create(
                params.name,
                params.address,
                params.cover_image,
                category_id,
                owner.id,
            )
            .await?;

        tracing::info!(
            restaurant_id = restaurant.id,
            owner_id = owner.id,
            "restaurant created"
        );

        Ok(Restaurant::from_entity(restaurant))
    }

    /// Gets all restaurants owned by the caller.
    ///
    /// # Returns
    /// - `Ok(restaurants)`: The owner's restaurants, newest first
    /// - `Err(AppError)`: Database error
    pub async fn my_restaurants(&self, owner: &User) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = RestaurantRepository::new(self.db)
            .find_by_owner(owner.id)
            .await?;

        Ok(restaurants.into_iter().map(Restaurant::from_entity).collect())
    }

    /// Adds a dish to one of the caller's restaurants.
    ///
    /// # Arguments
    /// - `owner`: The resolved owner account
    /// - `params`: Dish fields including the target restaurant
    ///
    /// # Returns
    /// - `Ok(Dish)`: The created dish
    /// - `Err(AppError::NotFound)`: The restaurant does not exist
    /// - `Err(AppError::Forbidden)`: The caller does not own the restaurant
    /// - `Err(AppError::BadRequest)`: The price is below 1
    pub async fn create_dish(
        &self,
        owner: &User,
        params: CreateDishParams,
    ) -> Result<Dish, AppError> {
        let restaurant = RestaurantRepository::new(self.db)
            .find_by_id(params.restaurant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found.".to_string()))?;

        if restaurant.owner_id != owner.id {
            return Err(AppError::Forbidden(
                "You can't add a dish to a restaurant you don't own.".to_string(),
            ));
        }

        if params.price < 1 {
            return Err(AppError::BadRequest(
                "Dish price must be at least 1.".to_string(),
            ));
        }

        let dish = DishRepository::new(self.db).create(params).await?;

        tracing::info!(dish_id = dish.id, restaurant_id = restaurant.id, "dish created");

        Ok(Dish::from_entity(dish))
    }
}
