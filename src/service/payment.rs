//! Payment recording and restaurant promotion.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{payment::PaymentRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::{
        payment::{CreatePaymentParams, Payment},
        user::User,
    },
};

/// How long a paid promotion lasts.
pub const PROMOTION_PERIOD_DAYS: i64 = 7;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment and promotes the paid-for restaurant.
    ///
    /// The restaurant must exist and belong to the caller. On success the
    /// restaurant is promoted until [`PROMOTION_PERIOD_DAYS`] from now; the
    /// promotion scheduler clears the flag once that time passes.
    ///
    /// # Arguments
    /// - `owner`: The resolved owner account
    /// - `params`: Transaction ID and target restaurant
    ///
    /// # Returns
    /// - `Ok(Payment)`: The recorded payment
    /// - `Err(AppError::NotFound)`: The restaurant does not exist
    /// - `Err(AppError::Forbidden)`: The caller does not own the restaurant
    pub async fn create_payment(
        &self,
        owner: &User,
        params: CreatePaymentParams,
    ) -> Result<Payment, AppError> {
        let restaurant_repo = RestaurantRepository::new(self.db);

        let restaurant = restaurant_repo
            .find_by_id(params.restaurant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found.".to_string()))?;

        if restaurant.owner_id != owner.id {
            return Err(AppError::Forbidden(
                "You are not allowed to do this.".to_string(),
            ));
        }

        let payment = PaymentRepository::new(self.db)
            .create(params.transaction_id, owner.id, restaurant.id)
            .await?;

        let until = Utc::now() + Duration::days(PROMOTION_PERIOD_DAYS);
        restaurant_repo.promote(restaurant.id, until).await?;

        tracing::info!(
            payment_id = payment.id,
            restaurant_id = restaurant.id,
            "payment recorded, restaurant promoted"
        );

        Ok(Payment::from_entity(payment))
    }

    /// Gets all payments recorded by the caller.
    ///
    /// # Returns
    /// - `Ok(payments)`: The owner's payments, newest first
    /// - `Err(AppError)`: Database error
    pub async fn get_payments(&self, owner: &User) -> Result<Vec<Payment>, AppError> {
        let payments = PaymentRepository::new(self.db).find_by_user(owner.id).await?;

        Ok(payments.into_iter().map(Payment::from_entity).collect())
    }
}
