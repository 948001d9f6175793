//! Wire types for the HTTP API.
//!
//! DTOs are the serialization boundary of the application: controllers convert
//! incoming DTOs into parameter models and outgoing domain models into DTOs.
//! All types derive `ToSchema` so they appear in the generated OpenAPI document.

pub mod api;
pub mod auth;
pub mod order;
pub mod payment;
pub mod restaurant;
