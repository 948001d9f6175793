//! Domain models and operation parameter types.
//!
//! Domain models are the in-process representation of the application's data,
//! converted from SeaORM entity models at the repository/service boundary and
//! into DTOs at the controller boundary. Parameter types describe the inputs
//! of individual operations.

pub mod dish;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod user;
