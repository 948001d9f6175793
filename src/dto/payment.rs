use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePaymentDto {
    /// Identifier reported by the external payment processor.
    pub transaction_id: String,
    pub restaurant_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub transaction_id: String,
    pub user_id: Option<i32>,
    pub restaurant_id: i32,
    pub created_at: DateTime<Utc>,
}
