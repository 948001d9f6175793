use crate::data::user::UserRepository;
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_email;
