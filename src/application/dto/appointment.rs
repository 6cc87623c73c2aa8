//! Appointment request payloads

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::Payload;
use crate::shared::types::{deserialize_nullable_text, deserialize_text};

const FIELDS: &[(&str, &str)] = &[
    ("name", "The name field must be a string."),
    ("email", "The email field must be a string."),
    ("phone", "The phone field must be a string."),
    ("service_id", "The service id field must be an integer."),
    ("appointment_date", "The appointment date field must be a valid date."),
    ("appointment_time", "The appointment time field must match the format H:i."),
    ("message", "The message field must be a string."),
    ("status", "The selected status is invalid."),
];

/// Booking form submission. Any `status` key in the body is ignored.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAppointmentRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    #[schema(example = "Maria Silva")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address."),
        length(max = 255, message = "The email field must not be greater than 255 characters.")
    )]
    #[schema(example = "maria@example.com")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The phone field is required."),
        length(min = 1, max = 20, message = "The phone field must be between 1 and 20 characters.")
    )]
    #[schema(example = "(11) 99999-0000")]
    pub phone: Option<String>,

    #[validate(required(message = "The service id field is required."))]
    #[schema(example = 2)]
    pub service_id: Option<i32>,

    /// `YYYY-MM-DD`, strictly after today
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(required(message = "The appointment date field is required."))]
    #[schema(example = "2030-01-15")]
    pub appointment_date: Option<String>,

    /// 24-hour `HH:MM`
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(required(message = "The appointment time field is required."))]
    #[schema(example = "14:30")]
    pub appointment_time: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(max = 1000, message = "The message field must not be greater than 1000 characters."))]
    pub message: Option<String>,

    /// Fields whose JSON value had the wrong type
    #[serde(skip)]
    #[schema(ignore)]
    pub mistyped: ValidationErrors,
}

impl Payload for CreateAppointmentRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = FIELDS;

    fn mistyped_mut(&mut self) -> &mut ValidationErrors {
        &mut self.mistyped
    }
}

/// Partial update by staff. Every key is optional; `message` may be
/// cleared with `null` or a blank string.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAppointmentRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        email(message = "The email field must be a valid email address."),
        length(max = 255, message = "The email field must not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(min = 1, max = 20, message = "The phone field must be between 1 and 20 characters."))]
    pub phone: Option<String>,

    pub service_id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub appointment_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub appointment_time: Option<String>,

    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    #[schema(value_type = Option<String>)]
    pub message: Option<Option<String>>,

    /// One of `pending`, `confirmed`, `cancelled`, `completed`
    #[serde(default, deserialize_with = "deserialize_text")]
    #[schema(example = "confirmed")]
    pub status: Option<String>,

    #[serde(skip)]
    #[schema(ignore)]
    pub mistyped: ValidationErrors,
}

impl Payload for UpdateAppointmentRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = FIELDS;

    fn mistyped_mut(&mut self) -> &mut ValidationErrors {
        &mut self.mistyped
    }
}
