//! HTTP REST API interfaces
//!
//! - `common`: error responses and the JSON body extractor
//! - `modules`: handlers and response DTOs per resource, plus health,
//!   metrics and request-id plumbing
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, ApiState};
