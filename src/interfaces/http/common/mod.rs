//! Shared HTTP plumbing: error responses and the JSON body extractor

pub mod error;
pub mod json;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use json::JsonBody;
