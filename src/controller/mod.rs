//! HTTP request handlers.
//!
//! Controllers are thin: they run the auth guard with the operation's allowed
//! roles, convert DTOs to parameter models, call the service layer, and shape
//! the response. The `feed` module holds the WebSocket handlers that bridge
//! the notification bus to live clients.

pub mod auth;
pub mod feed;
pub mod order;
pub mod payment;
pub mod restaurant;
