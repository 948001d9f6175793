//! WebSocket feeds bridging the notification bus to live clients.
//!
//! Each feed authenticates during the HTTP handshake (the bearer token rides
//! in the `token` query parameter, since browsers cannot set headers on
//! WebSocket requests), subscribes to its topic, and then forwards events as
//! JSON text frames until the client disconnects. Dropping the subscription
//! receiver on disconnect is the unsubscribe — nothing lingers in the bus.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    response::Response,
};
use entity::user::UserRole;
use tokio::sync::broadcast;

use crate::{
    data::{order::OrderRepository, restaurant::RestaurantRepository},
    error::AppError,
    middleware::auth::{AllowedRole, AuthGuard, Credential},
    notify::{OrderEvent, Topic},
    service::order::OrderService,
    state::AppState,
};

/// Live feed of new pending orders for one restaurant.
///
/// The caller must own the restaurant. Every order created at the restaurant
/// after the subscription is established produces exactly one event; orders
/// of other restaurants never appear here.
///
/// # Access Control
/// - `Owner` - Must own the restaurant
pub async fn restaurant_orders_feed(
    State(state): State<AppState>,
    credential: Credential,
    Path(restaurant_id): Path<i32>,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Owner)])
        .await?;

    let restaurant = RestaurantRepository::new(&state.db)
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found.".to_string()))?;

    if restaurant.owner_id != owner.id {
        return Err(AppError::Forbidden(
            "You can't watch a restaurant you don't own.".to_string(),
        ));
    }

    let receiver = state.bus.subscribe(Topic::PendingOrders { restaurant_id });

    Ok(ws.on_upgrade(move |socket| stream_events(socket, receiver, None)))
}

/// Live feed of orders that just became ready for pickup.
///
/// # Access Control
/// - `Delivery` - Courier-facing feed
pub async fn cooked_orders_feed(
    State(state): State<AppState>,
    credential: Credential,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Delivery)])
        .await?;

    let receiver = state.bus.subscribe(Topic::CookedOrders);

    Ok(ws.on_upgrade(move |socket| stream_events(socket, receiver, None)))
}

/// Live feed of status changes for one order.
///
/// The order-updates topic is shared by all orders; this subscription filters
/// it down to the watched order ID before anything reaches the client.
///
/// # Access Control
/// - `Any` - The order's customer, its courier, or the restaurant's owner
pub async fn order_updates_feed(
    State(state): State<AppState>,
    credential: Credential,
    Path(order_id): Path<i32>,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Any])
        .await?;

    let order = OrderRepository::new(&state.db)
        .find_by_id(order_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;

    if !OrderService::new(&state.db, &state.bus)
        .can_access_order(&user, &order)
        .await?
    {
        return Err(AppError::Forbidden("You can't see that order.".to_string()));
    }

    let receiver = state.bus.subscribe(Topic::OrderUpdates);

    Ok(ws.on_upgrade(move |socket| stream_events(socket, receiver, Some(order_id))))
}

/// Pumps bus events into a socket until either side goes away.
///
/// Events failing the optional order filter are skipped silently. A lagged
/// receiver drops the oldest events and keeps going; the publisher is never
/// blocked by a slow consumer.
async fn stream_events(
    mut socket: WebSocket,
    mut receiver: broadcast::Receiver<OrderEvent>,
    only_order: Option<i32>,
) {
    loop {
        tokio::select! {
            incoming = socket.recv() => {
                match incoming {
                    None | Some(Err(_)) | Some(Ok(Message::Close(_))) => break,
                    // Pings are answered by axum; other frames are ignored.
                    Some(Ok(_)) => {}
                }
            }
            event = receiver.recv() => {
                match event {
                    Ok(event) => {
                        if let Some(order_id) = only_order {
                            if !event.concerns_order(order_id) {
                                continue;
                            }
                        }

                        let payload = match serde_json::to_string(&event) {
                            Ok(payload) => payload,
                            Err(error) => {
                                tracing::error!(%error, "failed to serialize order event");
                                continue;
                            }
                        };

                        if socket.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "feed subscriber lagged, events dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }
}
