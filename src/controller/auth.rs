use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto, UserDto},
    },
    error::AppError,
    middleware::auth::{AllowedRole, AuthGuard, Credential},
    model::user::RegisterParams,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an account with the given email, password, and role. The email
/// must not be in use yet.
///
/// # Access Control
/// - None - Registration is open
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email, password, and role for the new account
///
/// # Returns
/// - `201 Created` - Successfully created account
/// - `400 Bad Request` - Email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully created account", body = UserDto),
        (status = 400, description = "Email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams {
        email: payload.email,
        password: payload.password,
        role: payload.role,
    };

    let user = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in and receive a bearer token.
///
/// Verifies the credentials and issues a signed token to present in the
/// `Authorization: Bearer` header on subsequent requests.
///
/// # Access Control
/// - None - Login is open
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Signed bearer token
/// - `400 Bad Request` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed bearer token", body = TokenDto),
        (status = 400, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, _user) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Get the authenticated account.
///
/// # Access Control
/// - `Any` - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credential` - Bearer credential from the request
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - No identity resolved
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The caller's account", body = UserDto),
        (status = 401, description = "No identity resolved", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, credential.0.as_deref())
        .require(&[AllowedRole::Any])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
