//! Bearer credential extraction and the per-operation access control gate.
//!
//! Operations declare their allowed roles explicitly at the call site by
//! passing a slice of [`AllowedRole`] to [`AuthGuard::require`]; there is no
//! hidden registry. Operations without a role restriction call
//! [`AuthGuard::resolve`] instead, which attempts identity resolution but
//! never blocks on its absence.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use std::convert::Infallible;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// The opaque bearer credential accompanying a request, if any.
///
/// Read from the `Authorization: Bearer` header, falling back to a `token`
/// query parameter for WebSocket handshakes where browsers cannot set
/// headers. Extraction never fails; a missing credential is `None`.
pub struct Credential(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for Credential {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
        {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Ok(Self(Some(token.trim().to_string())));
            }
        }

        let token = parts.uri.query().and_then(|query| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("token="))
                .map(str::to_string)
        });

        Ok(Self(token))
    }
}

/// One entry of an operation's allowed-role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedRole {
    /// Any resolved user passes, regardless of concrete role.
    Any,
    /// Only users with exactly this role pass.
    Only(UserRole),
}

/// Per-request access control gate.
///
/// Constructed by each controller from the shared state and the request's
/// credential. On success the resolved user is returned so the operation body
/// never resolves identity a second time.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    credential: Option<&'a str>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        credential: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            tokens,
            credential,
        }
    }

    /// Attempts to resolve the caller's identity.
    ///
    /// A missing credential, an invalid or expired token, and a verified token
    /// whose subject no longer exists all resolve to `None`; the cases are not
    /// distinguishable to callers.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Identity resolved
    /// - `Ok(None)` - No identity could be resolved
    /// - `Err(AppError)` - Database error during the subject lookup
    pub async fn resolve(&self) -> Result<Option<User>, AppError> {
        let Some(token) = self.credential else {
            return Ok(None);
        };

        let Some(user_id) = self.tokens.verify(token) else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(User::from_entity(user)))
    }

    /// Enforces an operation's declared role restriction.
    ///
    /// Denies when no credential is present, when no identity resolves, and
    /// when the resolved role is not in the allowed set. An [`AllowedRole::Any`]
    /// entry admits every resolved user regardless of concrete role.
    ///
    /// # Arguments
    /// - `allowed` - The operation's allowed-role set
    ///
    /// # Returns
    /// - `Ok(user)` - Access granted; the resolved user for downstream use
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - No identity resolved
    /// - `Err(AppError::AuthErr(AccessDenied))` - Role not in the allowed set
    pub async fn require(&self, allowed: &[AllowedRole]) -> Result<User, AppError> {
        if self.credential.is_none() {
            return Err(AuthError::NotAuthenticated.into());
        }

        let Some(user) = self.resolve().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        if allowed.contains(&AllowedRole::Any) {
            return Ok(user);
        }

        if allowed.contains(&AllowedRole::Only(user.role)) {
            return Ok(user);
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("role {:?} is not allowed to call this operation", user.role),
        )
        .into())
    }
}
