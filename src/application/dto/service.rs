//! Service request payloads

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::Payload;
use crate::shared::types::{deserialize_nullable, deserialize_nullable_text, deserialize_text};

const FIELDS: &[(&str, &str)] = &[
    ("name", "The name field must be a string."),
    ("description", "The description field must be a string."),
    ("icon", "The icon field must be a string."),
    ("price", "The price field must be a number."),
    ("duration", "The duration field must be an integer."),
    ("active", "The active field must be true or false."),
];

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    #[schema(example = "Cardiologia")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(
        required(message = "The description field is required."),
        length(min = 1, message = "The description field is required.")
    )]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(max = 255, message = "The icon field must not be greater than 255 characters."))]
    #[schema(example = "heart")]
    pub icon: Option<String>,

    #[schema(value_type = Option<f64>, example = 200.0)]
    pub price: Option<Decimal>,

    #[validate(range(min = 1, message = "The duration field must be at least 1."))]
    #[schema(example = 90)]
    pub duration: Option<i32>,

    pub active: Option<bool>,

    /// Fields whose JSON value had the wrong type
    #[serde(skip)]
    #[schema(ignore)]
    pub mistyped: ValidationErrors,
}

impl Payload for CreateServiceRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = FIELDS;

    fn mistyped_mut(&mut self) -> &mut ValidationErrors {
        &mut self.mistyped
    }
}

/// Partial update. Absent keys keep the stored value; `icon`, `price` and
/// `duration` may be cleared with an explicit `null`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    #[validate(length(min = 1, message = "The description field must not be empty."))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    #[schema(value_type = Option<String>)]
    pub icon: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub duration: Option<Option<i32>>,

    pub active: Option<bool>,

    #[serde(skip)]
    #[schema(ignore)]
    pub mistyped: ValidationErrors,
}

impl Payload for UpdateServiceRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = FIELDS;

    fn mistyped_mut(&mut self) -> &mut ValidationErrors {
        &mut self.mistyped
    }
}
