//! Service catalogue endpoints

pub mod dto;
pub mod handlers;

pub use dto::ServiceResponse;
pub use handlers::*;
