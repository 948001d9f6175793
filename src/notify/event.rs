//! Event payloads delivered over the notification bus.

use serde::Serialize;

use crate::dto::order::OrderDto;

/// An order event as delivered to live feed subscribers.
///
/// Events are serialized as-is into WebSocket text frames, so the shape here
/// is part of the feed wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderEvent {
    /// A customer placed a new order at a restaurant.
    ///
    /// Carries the restaurant owner's ID so owner-facing consumers can route
    /// the event without a lookup.
    PendingCreated { order: OrderDto, owner_id: i32 },

    /// An order became ready for pickup.
    Cooked { order: OrderDto },

    /// An order's status or courier assignment changed.
    StatusChanged { order: OrderDto },
}

impl OrderEvent {
    /// ID of the order this event concerns.
    pub fn order_id(&self) -> i32 {
        match self {
            Self::PendingCreated { order, .. } => order.id,
            Self::Cooked { order } => order.id,
            Self::StatusChanged { order } => order.id,
        }
    }

    /// Subscriber-side predicate: does this event concern the given order?
    ///
    /// All subscribers of a topic receive every publish internally; feeds that
    /// watch a single order apply this filter before surfacing the payload.
    pub fn concerns_order(&self, order_id: i32) -> bool {
        self.order_id() == order_id
    }
}
