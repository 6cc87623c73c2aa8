//! Contact request payloads

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::Payload;
use crate::shared::types::deserialize_text;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateContactRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address."),
        length(max = 255, message = "The email field must not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(max = 20, message = "The phone field must not be greater than 20 characters."))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The subject field is required."),
        length(min = 1, max = 255, message = "The subject field must be between 1 and 255 characters.")
    )]
    pub subject: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The message field is required."),
        length(min = 1, max = 2000, message = "The message field must be between 1 and 2000 characters.")
    )]
    pub message: Option<String>,

    /// Fields whose JSON value had the wrong type
    #[serde(skip)]
    #[schema(ignore)]
    pub mistyped: ValidationErrors,
}

impl Payload for CreateContactRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "The name field must be a string."),
        ("email", "The email field must be a string."),
        ("phone", "The phone field must be a string."),
        ("subject", "The subject field must be a string."),
        ("message", "The message field must be a string."),
    ];

    fn mistyped_mut(&mut self) -> &mut ValidationErrors {
        &mut self.mistyped
    }
}

/// Only the status of a contact can change after submission; any other
/// key in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateContactRequest {
    /// One of `new`, `read`, `replied`
    #[serde(default, deserialize_with = "deserialize_text")]
    #[schema(example = "read")]
    pub status: Option<String>,

    #[serde(skip)]
    #[schema(ignore)]
    pub mistyped: ValidationErrors,
}

impl Payload for UpdateContactRequest {
    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("status", "The selected status is invalid.")];

    fn mistyped_mut(&mut self) -> &mut ValidationErrors {
        &mut self.mistyped
    }
}
