//! SeaORM entity definitions for the orderboard database schema.

pub mod prelude;

pub mod category;
pub mod dish;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod restaurant;
pub mod user;
