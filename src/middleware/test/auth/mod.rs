use crate::error::{auth::AuthError, AppError};
use crate::middleware::auth::{AllowedRole, AuthGuard};
use crate::service::token::TokenService;
use entity::prelude::User;
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod require;
mod resolve;

fn tokens() -> TokenService {
    TokenService::new("test-secret", 1)
}
