use crate::data::order::OrderRepository;
use entity::order::OrderStatus;
use entity::order_item::{OrderItemOption, OrderItemOptions};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_driver;
mod create_with_items;
mod find_for_user;
mod update_status;
