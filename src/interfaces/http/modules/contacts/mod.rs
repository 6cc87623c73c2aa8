//! Contact form endpoints

pub mod dto;
pub mod handlers;

pub use dto::ContactResponse;
pub use handlers::*;
