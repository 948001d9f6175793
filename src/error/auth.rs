use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No identity could be resolved for a role-restricted operation.
    ///
    /// Covers a missing credential, a malformed/expired/tampered token, and a
    /// verified token whose subject no longer exists. The cases are deliberately
    /// not distinguishable to the caller.
    #[error("Authentication required")]
    NotAuthenticated,

    /// The resolved user's role is not in the operation's allowed set.
    ///
    /// # Fields
    /// - ID of the user whose access was denied
    /// - Internal description of the denied operation, logged but not returned
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes with generic
/// client-facing messages:
/// - `NotAuthenticated` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!(user_id, %reason, "access denied");
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You are not allowed to do this.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
