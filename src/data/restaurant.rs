use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new restaurant.
    ///
    /// # Arguments
    /// - `name`: Restaurant name
    /// - `address`: Street address
    /// - `cover_image`: Cover image URL
    /// - `category_id`: Optional category reference
    /// - `owner_id`: ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Model)`: The created restaurant
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        name: String,
        address: String,
        cover_image: String,
        category_id: Option<i32>,
        owner_id: i32,
    ) -> Result<entity::restaurant::Model, DbErr> {
        let now = Utc::now();
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            address: ActiveValue::Set(address),
            cover_image: ActiveValue::Set(cover_image),
            category_id: ActiveValue::Set(category_id),
            owner_id: ActiveValue::Set(owner_id),
            is_promoted: ActiveValue::Set(false),
            promoted_until: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds a restaurant by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The restaurant
    /// - `Ok(None)`: No restaurant with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find_by_id(id).one(self.db).await
    }

    /// Gets all restaurants belonging to an owner, newest first.
    ///
    /// # Returns
    /// - `Ok(restaurants)`: The owner's restaurants
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::restaurant::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Marks a restaurant as promoted until the given time.
    ///
    /// # Arguments
    /// - `id`: Restaurant ID
    /// - `until`: Promotion expiry timestamp
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated restaurant
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn promote(
        &self,
        id: i32,
        until: DateTime<Utc>,
    ) -> Result<entity::restaurant::Model, DbErr> {
        let restaurant = self
            .find_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Restaurant {} not found", id)))?;

        let mut active_model: entity::restaurant::ActiveModel = restaurant.into();
        active_model.is_promoted = ActiveValue::Set(true);
        active_model.promoted_until = ActiveValue::Set(Some(until));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Clears the promoted flag on all restaurants whose promotion has lapsed.
    ///
    /// Executed periodically by the promotion scheduler.
    ///
    /// # Arguments
    /// - `now`: Cutoff timestamp; promotions expiring before it are cleared
    ///
    /// # Returns
    /// - `Ok(count)`: Number of restaurants whose promotion was cleared
    /// - `Err(DbErr)`: Database error
    pub async fn clear_expired_promotions(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Restaurant::update_many()
            .col_expr(entity::restaurant::Column::IsPromoted, Expr::value(false))
            .col_expr(
                entity::restaurant::Column::PromotedUntil,
                Expr::value(None::<DateTime<Utc>>),
            )
            .col_expr(entity::restaurant::Column::UpdatedAt, Expr::value(now))
            .filter(entity::restaurant::Column::IsPromoted.eq(true))
            .filter(entity::restaurant::Column::PromotedUntil.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
