//! Observability for shopfront
//!
//! Structured JSON logs through `tracing`. Each line carries a typed
//! [`Event`] name in its `event` field.
//!
//! # Usage
//!
//! ```ignore
//! use shopfront::observability::{self, Event};
//!
//! observability::init();
//! tracing::info!(event = %Event::Serving, addr = "0.0.0.0:3307", "listening");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{env_filter, init};
