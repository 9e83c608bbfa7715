//! # HTTP Server Module
//!
//! Axum server for the shopfront JSON API.
//!
//! # Endpoints
//!
//! - `GET  /health` - Health check (pings the database)
//! - `GET  /api/users`, `POST /api/users`
//! - `GET  /api/orders`, `POST /api/orders`
//! - `POST /api/applicants`

pub mod api_routes;
pub mod observability_routes;
pub mod server;

pub use api_routes::ApiState;
pub use server::{build_router, HttpServer};
