//! Food-delivery backend: accounts with roles, restaurant and menu
//! management, order placement and lifecycle, payment recording, and
//! near-real-time order-status notification.
//!
//! # Architecture
//!
//! The backend follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations on SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **DTO Layer** (`dto/`) - Wire types for the HTTP API and OpenAPI schemas
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Credential extraction and the role-based auth guard
//! - **Notify** (`notify/`) - Topic-keyed publish/subscribe bus for live order events
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, notification bus, token service)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs for automated tasks (promotion expiry)
//!
//! # Request Flow
//!
//! A typical mutation flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the appropriate controller
//! 2. **Middleware** extracts the bearer credential and the auth guard resolves the
//!    caller's identity against the operation's allowed roles
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** executes business logic, orchestrates data operations, and
//!    publishes order events to the notification bus
//! 5. **Data** queries the database and returns entity models
//! 6. **Controller** converts the domain result to a DTO and returns the response
//!
//! Subscribers (owner dashboards, courier and customer live views) receive the
//! published events over WebSocket feeds that tap the notification bus.

pub mod config;
pub mod controller;
pub mod data;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod model;
pub mod notify;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
