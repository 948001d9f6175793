use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    /// One of `Client`, `Owner`, `Delivery`.
    #[schema(value_type = String)]
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TokenDto {
    /// Bearer credential to present in the `Authorization` header.
    pub token: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    #[schema(value_type = String)]
    pub role: UserRole,
}
