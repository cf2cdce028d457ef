//! Command implementations.

pub mod batch;
pub mod interpret;
