//! shopfront - users, orders and applicants JSON API backed by MySQL
//!
//! Each endpoint checks that its required fields are present, runs one
//! parameterized statement through the pooled [`store::Store`] and answers
//! with JSON. `shopfront setup` applies the bundled `schema.sql` once.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod setup;
pub mod store;
