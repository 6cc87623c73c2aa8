//! Request payloads accepted by the application services
//!
//! Static field rules are declared with `validator` attributes; rules that
//! need the clock or the store are applied by the services themselves.
//! Text fields are trimmed on deserialization and blank text counts as
//! absent.

pub mod appointment;
pub mod contact;
pub mod service;

use serde::de::DeserializeOwned;
use validator::ValidationErrors;

pub use appointment::{CreateAppointmentRequest, UpdateAppointmentRequest};
pub use contact::{CreateContactRequest, UpdateContactRequest};
pub use service::{CreateServiceRequest, UpdateServiceRequest};

/// A payload the HTTP layer decodes one field at a time.
///
/// A value of the wrong JSON type is left out of the payload and reported
/// under its own field in [`Payload::mistyped_mut`], so the services can
/// return it together with every other failed rule.
pub trait Payload: DeserializeOwned {
    /// Accepted keys, each with the message for a wrongly typed value.
    const FIELDS: &'static [(&'static str, &'static str)];

    fn mistyped_mut(&mut self) -> &mut ValidationErrors;
}
