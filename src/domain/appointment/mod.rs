//! Appointment aggregate
//!
//! Contains the Appointment entity, its status lifecycle, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Appointment, AppointmentStatus, NewAppointment};
pub use repository::AppointmentRepository;
