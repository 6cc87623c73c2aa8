//! Mapping of domain errors onto HTTP responses
//!
//! | Error                      | Status |
//! |----------------------------|--------|
//! | `DomainError::NotFound`    | 404    |
//! | `DomainError::Validation`  | 422    |
//! | `DomainError::Storage`     | 500    |
//! | rejected request body      | 400 (or the rejection's own status) |

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::DomainError;

pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "The given data was invalid.")]
    pub message: String,
    /// Field name → messages; present on 422 only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("The {} field is invalid.", field))
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        Self {
            message: VALIDATION_MESSAGE.to_string(),
            errors: Some(fields),
        }
    }
}

/// Handler error
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// The request body could not be read as JSON at all
    Rejected { status: StatusCode, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Domain(DomainError::Validation(errors)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorBody::validation(&errors))
            }
            Self::Domain(err @ DomainError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, ErrorBody::message(err.to_string()))
            }
            Self::Domain(DomainError::Storage(detail)) => {
                error!("Storage failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Server Error"),
                )
            }
            Self::Rejected { status, message } => (status, ErrorBody::message(message)),
        };
        (status, Json(body)).into_response()
    }
}
