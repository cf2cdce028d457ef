//! Scout HTTP API
//!
//! Serves the search phrase interpreter and the filter rehydration endpoint.

pub mod handlers;
pub mod models;
pub mod server;

pub use server::{router, start, ServerConfig};
