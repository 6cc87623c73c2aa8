//! Service response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Service;

/// Clinic service as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: i32,
    #[schema(example = "Cardiologia")]
    pub name: String,
    pub description: String,
    #[schema(example = "heart")]
    pub icon: Option<String>,
    /// Two decimals, as a string
    #[schema(example = "200.00")]
    pub price: Option<String>,
    /// Minutes
    #[schema(example = 90)]
    pub duration: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            price: s.formatted_price(),
            id: s.id,
            name: s.name,
            description: s.description,
            icon: s.icon,
            duration: s.duration,
            active: s.active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
