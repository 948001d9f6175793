//! Business logic layer.
//!
//! Services orchestrate repositories, pricing, and the notification bus. They
//! convert entity models to domain models, enforce per-resource access rules,
//! and map failures into `AppError` values; controllers above them only shape
//! DTOs, and repositories below them only touch the database.

pub mod auth;
pub mod order;
pub mod payment;
pub mod pricing;
pub mod restaurant;
pub mod token;

#[cfg(test)]
mod test;
