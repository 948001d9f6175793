use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user::UserRole;

use crate::{
    dto::{
        api::ErrorDto,
        order::{CreateOrderDto, EditOrderDto, OrderDto, OrdersQuery},
    },
    error::AppError,
    middleware::auth::{AllowedRole, AuthGuard, Credential},
    model::order::{CreateOrderParams, OrderItemParams, SelectedOption},
    service::order::OrderService,
    state::AppState,
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order at a restaurant.
///
/// Each requested dish must exist on the target restaurant's menu. Item
/// prices are resolved against the dish option catalogs once, at creation;
/// the order starts in `Pending` status and the restaurant's pending-order
/// feed is notified.
///
/// # Access Control
/// - `Client` - Only clients place orders
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `payload` - Target restaurant and requested items
///
/// # Returns
/// - `201 Created` - Successfully created order with its item snapshot
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller is not a client
/// - `404 Not Found` - Restaurant or dish not found
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = OrderDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller is not a client", body = ErrorDto),
        (status = 404, description = "Restaurant or dish not found", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    credential: Credential,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Client)])
        .await?;

    let params = CreateOrderParams {
        restaurant_id: payload.restaurant_id,
        items: payload
            .items
            .into_iter()
            .map(|item| OrderItemParams {
                dish_id: item.dish_id,
                options: item
                    .options
                    .into_iter()
                    .map(|option| SelectedOption {
                        name: option.name,
                        choice: option.choice,
                    })
                    .collect(),
            })
            .collect(),
    };

    let order = OrderService::new(&state.db, &state.bus)
        .create_order(&customer, params)
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List the caller's orders.
///
/// Role-scoped: clients see orders they placed, couriers see orders assigned
/// to them, and owners see orders across all restaurants they own. An empty
/// list is a normal result.
///
/// # Access Control
/// - `Any` - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `query` - Optional status filter
///
/// # Returns
/// - `200 OK` - Matching orders, newest first
/// - `401 Unauthorized` - No identity resolved
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Optional status filter (Pending, Cooking, Cooked, PickedUp, Delivered)")
    ),
    responses(
        (status = 200, description = "Matching orders", body = Vec<OrderDto>),
        (status = 401, description = "No identity resolved", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    credential: Credential,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Any])
        .await?;

    let orders = OrderService::new(&state.db, &state.bus)
        .get_orders(&user, query.status)
        .await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(|order| order.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Fetch one order with its item snapshot.
///
/// # Access Control
/// - `Any` - The order's customer, its courier, or the restaurant's owner
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `order_id` - Order to fetch
///
/// # Returns
/// - `200 OK` - The order including items
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller has no relationship with the order
/// - `404 Not Found` - Order not found
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order including items", body = OrderDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller has no relationship with the order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    credential: Credential,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Any])
        .await?;

    let order = OrderService::new(&state.db, &state.bus)
        .get_order(&user, order_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Move an order to a new status.
///
/// Owners may set `Cooking` or `Cooked`; couriers may set `PickedUp` or
/// `Delivered`. The status can only move forward along the lifecycle path,
/// so a `Delivered` order can never change again. Subscribers of the order's
/// update feed are notified; when the order becomes `Cooked` the courier feed
/// is notified as well.
///
/// # Access Control
/// - `Owner`, `Delivery` - Further restricted by the per-order access rule
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `order_id` - Order to edit
/// - `payload` - Target status
///
/// # Returns
/// - `200 OK` - The order with the new status
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Access, role guard, or status ordering denied
/// - `404 Not Found` - Order not found
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/status",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = EditOrderDto,
    responses(
        (status = 200, description = "The order with the new status", body = OrderDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Access, role guard, or status ordering denied", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn edit_order(
    State(state): State<AppState>,
    credential: Credential,
    Path(order_id): Path<i32>,
    Json(payload): Json<EditOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[
            AllowedRole::Only(UserRole::Delivery),
            AllowedRole::Only(UserRole::Owner),
        ])
        .await?;

    let order = OrderService::new(&state.db, &state.bus)
        .edit_order(&user, order_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Take an unclaimed order as its courier.
///
/// Assigns the calling courier to the order; two couriers racing for the
/// same order cannot both win. Subscribers of the order's update feed are
/// notified of the assignment.
///
/// # Access Control
/// - `Delivery` - Only couriers take orders
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `order_id` - Order to take
///
/// # Returns
/// - `200 OK` - The order with the courier assigned
/// - `400 Bad Request` - The order already has a courier
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller is not a courier
/// - `404 Not Found` - Order not found
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/take",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order with the courier assigned", body = OrderDto),
        (status = 400, description = "The order already has a courier", body = ErrorDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller is not a courier", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn take_order(
    State(state): State<AppState>,
    credential: Credential,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Delivery)])
        .await?;

    let order = OrderService::new(&state.db, &state.bus)
        .take_order(&driver, order_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
