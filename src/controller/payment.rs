use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::user::UserRole;

use crate::{
    dto::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto},
    },
    error::AppError,
    middleware::auth::{AllowedRole, AuthGuard, Credential},
    model::payment::CreatePaymentParams,
    service::payment::PaymentService,
    state::AppState,
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record a payment for one of the caller's restaurants.
///
/// The restaurant must belong to the caller. Recording the payment promotes
/// the restaurant for a fixed period; the promotion scheduler clears the flag
/// after it lapses.
///
/// # Access Control
/// - `Owner` - Only owners record payments
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
/// - `payload` - Transaction ID and target restaurant
///
/// # Returns
/// - `201 Created` - Successfully recorded payment
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller does not own the restaurant
/// - `404 Not Found` - Restaurant not found
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Successfully recorded payment", body = PaymentDto),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller does not own the restaurant", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    credential: Credential,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Owner)])
        .await?;

    let params = CreatePaymentParams {
        transaction_id: payload.transaction_id,
        restaurant_id: payload.restaurant_id,
    };

    let payment = PaymentService::new(&state.db)
        .create_payment(&owner, params)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// List the caller's payments.
///
/// # Access Control
/// - `Owner` - Only owners record payments
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
///
/// # Returns
/// - `200 OK` - The caller's payments, newest first
/// - `401 Unauthorized` - No identity resolved
/// - `403 Forbidden` - Caller is not an owner
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "The caller's payments", body = Vec<PaymentDto>),
        (status = 401, description = "No identity resolved", body = ErrorDto),
        (status = 403, description = "Caller is not an owner", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Only(UserRole::Owner)])
        .await?;

    let payments = PaymentService::new(&state.db).get_payments(&owner).await?;

    let dtos: Vec<PaymentDto> = payments
        .into_iter()
        .map(|payment| payment.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
