//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::payment::PaymentDto;

/// A recorded payment made by a restaurant owner.
///
/// Recording a payment has one side effect in this system: it promotes the
/// paid-for restaurant for a fixed period.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub transaction_id: String,
    pub user_id: Option<i32>,
    pub restaurant_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Converts an entity model to a payment domain model at the repository boundary.
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            transaction_id: entity.transaction_id,
            user_id: entity.user_id,
            restaurant_id: entity.restaurant_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the payment domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            transaction_id: self.transaction_id,
            user_id: self.user_id,
            restaurant_id: self.restaurant_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub transaction_id: String,
    pub restaurant_id: i32,
}
