//! Order domain models, parameters, and status ordering.

use chrono::{DateTime, Utc};
use entity::order::OrderStatus;
use entity::order_item::OrderItemOption;

use crate::dto::order::{OrderDto, OrderItemDto, OrderItemOptionDto};

/// A placed order tracked through its status progression.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    /// Null only after referential cleanup of the account.
    pub customer_id: Option<i32>,
    /// Assigned when a courier takes the order.
    pub driver_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    /// Fixed at creation; item snapshots are never re-priced.
    pub total: i64,
    pub status: OrderStatus,
    /// Item snapshot, present only when relations were explicitly requested.
    pub items: Option<Vec<OrderItem>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One ordered dish with the customer's selected options, frozen at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    /// Weak reference; null once the dish has been deleted.
    pub dish_id: Option<i32>,
    pub options: Vec<OrderItemOption>,
}

impl OrderItem {
    /// Converts an entity model to an order item domain model.
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            dish_id: entity.dish_id,
            options: entity.options.0,
        }
    }

    /// Converts the order item domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            dish_id: self.dish_id,
            options: self
                .options
                .into_iter()
                .map(|option| OrderItemOptionDto {
                    name: option.name,
                    choice: option.choice,
                    extra: option.extra,
                })
                .collect(),
        }
    }
}

impl Order {
    /// Converts an entity model to an order domain model without its items.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            driver_id: entity.driver_id,
            restaurant_id: entity.restaurant_id,
            total: entity.total,
            status: entity.status,
            items: None,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts an entity model plus its item rows to an order domain model.
    ///
    /// # Arguments
    /// - `entity` - The order entity model
    /// - `items` - The order's item snapshot rows
    pub fn from_entity_with_items(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Self {
        let mut order = Self::from_entity(entity);
        order.items = Some(items.into_iter().map(OrderItem::from_entity).collect());
        order
    }

    /// Converts the order domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            customer_id: self.customer_id,
            driver_id: self.driver_id,
            restaurant_id: self.restaurant_id,
            total: self.total,
            status: self.status,
            items: self
                .items
                .map(|items| items.into_iter().map(OrderItem::into_dto).collect()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The customer's selection of one dish option, by name and optional choice.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedOption {
    pub name: String,
    pub choice: Option<String>,
}

/// One requested order line: a dish and the selected options.
#[derive(Debug, Clone)]
pub struct OrderItemParams {
    pub dish_id: i32,
    pub options: Vec<SelectedOption>,
}

/// Parameters for placing an order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub restaurant_id: i32,
    pub items: Vec<OrderItemParams>,
}

/// Position of a status on the fixed forward path.
///
/// Used to enforce that edits only ever move an order forward:
/// Pending → Cooking → Cooked → PickedUp → Delivered.
pub fn status_rank(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Pending => 0,
        OrderStatus::Cooking => 1,
        OrderStatus::Cooked => 2,
        OrderStatus::PickedUp => 3,
        OrderStatus::Delivered => 4,
    }
}

/// Whether moving from `current` to `next` advances along the status path.
///
/// Skipping intermediate states is allowed; revisiting or moving backward is
/// not, which also makes `Delivered` terminal.
pub fn is_forward_transition(current: OrderStatus, next: OrderStatus) -> bool {
    status_rank(next) > status_rank(current)
}
