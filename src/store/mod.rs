//! # Store
//!
//! Persistence seam between the HTTP handlers and the database.
//!
//! Handlers only ever see `Arc<dyn Store>`. Each method issues exactly one
//! statement; there are no multi-statement transactions.
//!
//! - [`MySqlStore`] - pooled MySQL backend used by `shopfront serve`
//! - [`MemoryStore`] - process-local substitute with a simulated outage switch

mod memory;
mod models;
mod mysql;

pub use memory::MemoryStore;
pub use models::{Applicant, NewApplicant, NewOrder, NewUser, Order, User};
pub use mysql::{server_connect_options, MySqlStore};

use async_trait::async_trait;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error reported by the database driver (connect, query, constraint)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend cannot serve requests
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage operations backing the JSON API
#[async_trait]
pub trait Store: Send + Sync {
    /// Single round-trip liveness check
    async fn ping(&self) -> StoreResult<()>;

    /// All users, in storage order
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Insert a user and return its generated id
    async fn insert_user(&self, user: &NewUser) -> StoreResult<u64>;

    /// All orders, newest first
    async fn list_orders(&self) -> StoreResult<Vec<Order>>;

    /// Insert an order and return its generated id
    async fn insert_order(&self, order: &NewOrder) -> StoreResult<u64>;

    /// Insert an applicant and return its generated id
    async fn insert_applicant(&self, applicant: &NewApplicant) -> StoreResult<u64>;
}
