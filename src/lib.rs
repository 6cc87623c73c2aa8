//! # Clinic Site
//!
//! REST backend of a clinic website: the service catalogue, appointment
//! booking and the contact form inbox.
//!
//! ## Architecture
//!
//! - **domain**: entities, status lifecycles and repository traits
//! - **application**: request payloads and the use-case services
//! - **infrastructure**: SeaORM persistence and the in-memory store
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: errors, validation helpers, graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiState};
