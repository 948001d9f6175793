use crate::error::AppError;
use crate::model::order::{CreateOrderParams, OrderItemParams, SelectedOption};
use crate::model::user::User;
use crate::notify::{NotificationBus, OrderEvent, Topic};
use crate::service::order::OrderService;
use entity::order::OrderStatus;
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod access;
mod create;
mod take;

fn single_item_params(restaurant_id: i32, dish_id: i32) -> CreateOrderParams {
    CreateOrderParams {
        restaurant_id,
        items: vec![OrderItemParams {
            dish_id,
            options: Vec::new(),
        }],
    }
}

fn select(name: &str, choice: Option<&str>) -> SelectedOption {
    SelectedOption {
        name: name.to_string(),
        choice: choice.map(str::to_string),
    }
}
