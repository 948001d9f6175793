//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work with SeaORM entity models and raw `DbErr`
//! values; conversion to domain models and application errors happens in the service layer.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod category;
pub mod dish;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod user;

#[cfg(test)]
mod test;
