use chrono::{DateTime, Utc};
use entity::order::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelectedOptionDto {
    /// Name of the dish option being selected.
    pub name: String,
    /// Chosen entry when the option carries named choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderItemDto {
    pub dish_id: i32,
    #[serde(default)]
    pub options: Vec<SelectedOptionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub restaurant_id: i32,
    pub items: Vec<CreateOrderItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EditOrderDto {
    /// One of `Pending`, `Cooking`, `Cooked`, `PickedUp`, `Delivered`.
    #[schema(value_type = String)]
    pub status: OrderStatus,
}

/// Query parameters for listing orders.
#[derive(Deserialize, Debug, Default)]
pub struct OrdersQuery {
    pub status: Option<OrderStatus>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemOptionDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
    /// Surcharge resolved against the dish catalog at order time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub dish_id: Option<i32>,
    pub options: Vec<OrderItemOptionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub driver_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    /// Total in minor currency units, fixed at creation time.
    pub total: i64,
    #[schema(value_type = String)]
    pub status: OrderStatus,
    /// Present only when the order was fetched with its item snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemDto>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
