//! Axum-based HTTP server for translate-relay.
//!
//! This module sets up the HTTP server, configures routes and middleware,
//! and hands `/translate` requests to the translation pipeline.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (translate, languages, health, metrics).
//! - `middleware`: Request ID tracking and CORS.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthCheck, HealthResponse, HealthStatus};
pub use routes::{create_router, AppState};
