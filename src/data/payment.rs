use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment.
    ///
    /// # Arguments
    /// - `transaction_id`: Identifier reported by the payment processor
    /// - `user_id`: ID of the paying user
    /// - `restaurant_id`: ID of the paid-for restaurant
    ///
    /// # Returns
    /// - `Ok(Model)`: The created payment
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        transaction_id: String,
        user_id: i32,
        restaurant_id: i32,
    ) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            transaction_id: ActiveValue::Set(transaction_id),
            user_id: ActiveValue::Set(Some(user_id)),
            restaurant_id: ActiveValue::Set(restaurant_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets all payments made by a user, newest first.
    ///
    /// # Returns
    /// - `Ok(payments)`: The user's payments
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::UserId.eq(user_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
