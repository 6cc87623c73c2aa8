//! Service aggregate
//!
//! A bookable clinic offering (consultation, exam, imaging...) and its
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{default_catalogue, NewService, Service};
pub use repository::ServiceRepository;
