//! Appointment booking endpoints

pub mod dto;
pub mod handlers;

pub use dto::AppointmentResponse;
pub use handlers::*;
