use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user::UserRole;

use crate::{
    dto::{
        api::ErrorDto,
        restaurant::{CreateDishDto, CreateRestaurantDto, DishDto, RestaurantDto},
    },
    error::AppError,
    middleware::auth::{AllowedRole, AuthGuard, Credential},
    model::{dish::CreateDishParams, restaurant::CreateRestaurantParams},
    service::restaurant::RestaurantService,
    state::AppState,
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

/// Create a new restaurant.
///
/// Creates a restaurant owned by the caller. When a category name is given,
/// the category is resolved by slug and created on first use.
///
/// # Access Control
/// - `Owner` - Only owners can create restaurants
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `payload` - Restaurant fields
///
/// # Returns
/// - `201 Created` - Successfully created restaurant
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller is not an owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "Successfully created restaurant", body = RestaurantDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    credential: Credential,
    Json(payload): Json<CreateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Owner)])
        .await?;

    let params = CreateRestaurantParams {
        name: payload.name,
        address: payload.address,
        cover_image: payload.cover_image,
        category: payload.category,
    };

    let restaurant = RestaurantService::new(&state.db)
        .create_restaurant(&owner, params)
        .await?;

    Ok((StatusCode::CREATED, Json(restaurant.into_dto())))
}

/// List the caller's restaurants.
///
/// # Access Control
/// - `Owner` - Only owners have restaurants
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
///
/// # Returns
/// - `200 OK` - The caller's restaurants, newest first
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller is not an owner
#[utoipa::path(
    get,
    path = "/api/restaurants/mine",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "The caller's restaurants", body = Vec<RestaurantDto>),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller is not an owner", body = ErrorDto)
    ),
)]
pub async fn my_restaurants(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Owner)])
        .await?;

    let restaurants = RestaurantService::new(&state.db).my_restaurants(&owner).await?;

    let dtos: Vec<RestaurantDto> = restaurants
        .into_iter()
        .map(|restaurant| restaurant.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a dish to a restaurant's menu.
///
/// The caller must own the target restaurant. The dish's option catalog is
/// stored as-is and resolved against selections at order time.
///
/// # Access Control
/// - `Owner` - Only the restaurant's owner can add dishes
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `restaurant_id` - Restaurant to add the dish to
/// - `payload` - Dish fields including the option catalog
///
/// # Returns
/// - `201 Created` - Successfully created dish
/// - `400 Bad Request` - Price below 1
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller does not own the restaurant
/// - `404 Not Found` - Restaurant not found
#[utoipa::path(
    post,
    path = "/api/restaurants/{restaurant_id}/dishes",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Successfully created dish", body = DishDto),
        (status = 400, description = "Price below 1", body = ErrorDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller does not own the restaurant", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto)
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    credential: Credential,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<CreateDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Owner)])
        .await?;

    let params = CreateDishParams {
        restaurant_id,
        name: payload.name,
        price: payload.price,
        description: payload.description,
        photo: payload.photo,
        options: payload.options.into_iter().map(Into::into).collect(),
    };

    let dish = RestaurantService::new(&state.db)
        .create_dish(&owner, params)
        .await?;

    Ok((StatusCode::CREATED, Json(dish.into_dto())))
}
