//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Notification bus for live order events
//! - Token service for issuing and verifying bearer credentials

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{notify::NotificationBus, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or pooled types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<NotificationBus>` is a reference-counted pointer; the bus is
///   constructed exactly once at startup and never looked up globally
/// - `TokenService` shares its signing secret behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Publish/subscribe bus delivering order events to live feeds.
    pub bus: Arc<NotificationBus>,

    /// Service for issuing and verifying bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `bus` - Notification bus for order events
    /// - `tokens` - Token service for bearer credentials
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, bus: Arc<NotificationBus>, tokens: TokenService) -> Self {
        Self { db, bus, tokens }
    }
}
