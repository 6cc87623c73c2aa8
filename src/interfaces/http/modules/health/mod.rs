//! Liveness and store health

pub mod handlers;

pub use handlers::*;
