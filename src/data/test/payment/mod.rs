use crate::data::payment::PaymentRepository;
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
