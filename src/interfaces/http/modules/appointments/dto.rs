//! Appointment response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Appointment;
use crate::interfaces::http::modules::services::ServiceResponse;

/// Appointment with its service attached
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: i32,
    /// `YYYY-MM-DD`
    #[schema(value_type = String, example = "2030-01-15")]
    pub appointment_date: NaiveDate,
    /// `HH:MM`
    #[schema(example = "14:30")]
    pub appointment_time: String,
    pub message: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
    /// `null` when the service has been deleted since booking
    pub service: Option<ServiceResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            appointment_time: a.time_label(),
            status: a.status.to_string(),
            id: a.id,
            name: a.name,
            email: a.email,
            phone: a.phone,
            service_id: a.service_id,
            appointment_date: a.appointment_date,
            message: a.message,
            service: a.service.map(Into::into),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
