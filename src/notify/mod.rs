//! Topic-keyed publish/subscribe bus for live order events.
//!
//! The bus decouples order mutations from their consumers: the order service
//! publishes events when an order is created or changes status, and WebSocket
//! feed handlers subscribe to the topics their clients care about. Delivery is
//! fire-and-forget — there is no persistence or replay, so a subscriber that
//! connects after a publish never sees it.
//!
//! The bus is an explicit service constructed once at startup and passed by
//! handle wherever it is needed; nothing reaches it through global state.

pub mod event;

use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;

pub use event::OrderEvent;

/// Number of in-flight events buffered per topic before slow subscribers
/// start losing the oldest ones.
const TOPIC_CAPACITY: usize = 64;

/// A named channel on which publishers and subscribers rendezvous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// New pending orders for one restaurant's owner dashboard.
    PendingOrders { restaurant_id: i32 },
    /// Orders that just became ready for pickup, consumed by courier feeds.
    CookedOrders,
    /// All order status changes; subscribers filter by order ID.
    OrderUpdates,
}

/// Topic-keyed broadcast bus for [`OrderEvent`]s.
///
/// Each topic is backed by a `tokio::sync::broadcast` channel created lazily on
/// first subscription. Publishing to a topic nobody subscribed to drops the
/// event, matching fire-and-forget semantics. Within one topic, every
/// subscriber observes events in publish order.
///
/// The channel table is the bus's only shared state; it is guarded by a
/// `Mutex` held just long enough to clone a sender handle. Channels whose
/// subscribers have all disconnected are swept out of the table on the next
/// publish or subscribe, so registrations never accumulate.
pub struct NotificationBus {
    channels: Mutex<HashMap<Topic, broadcast::Sender<OrderEvent>>>,
}

impl NotificationBus {
    /// Creates an empty bus with no topics registered.
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Delivers an event to all current subscribers of a topic.
    ///
    /// Returns the number of subscribers the event was handed to. Zero is not
    /// an error; it just means nobody was listening.
    ///
    /// # Arguments
    /// - `topic` - Topic to publish on
    /// - `event` - Event payload, cloned per subscriber
    pub fn publish(&self, topic: Topic, event: OrderEvent) -> usize {
        let mut channels = self.channels.lock().expect("notification bus lock poisoned");
        channels.retain(|_, sender| sender.receiver_count() > 0);

        match channels.get(&topic) {
            // send only fails when every receiver is already gone
            Some(sender) => sender.send(event).unwrap_or(0),
            None => 0,
        }
    }

    /// Opens a live subscription to a topic.
    ///
    /// The returned receiver yields events published from this moment onward,
    /// in publish order. Dropping the receiver is the unsubscribe: once the
    /// last receiver of a topic is gone, its channel is swept away.
    ///
    /// # Arguments
    /// - `topic` - Topic to subscribe to
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<OrderEvent> {
        let mut channels = self.channels.lock().expect("notification bus lock poisoned");
        channels.retain(|_, sender| sender.receiver_count() > 0);

        channels
            .entry(topic)
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0)
            .subscribe()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
