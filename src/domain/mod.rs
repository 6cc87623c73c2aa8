//! Domain layer
//!
//! Aggregates (service, appointment, contact), their lifecycle rules and
//! the repository interfaces the infrastructure layer implements.

pub mod appointment;
pub mod contact;
pub mod repositories;
pub mod service;

pub use appointment::{Appointment, AppointmentRepository, AppointmentStatus, NewAppointment};
pub use contact::{Contact, ContactRepository, ContactStatus, NewContact};
pub use repositories::{DomainResult, RepositoryProvider};
pub use service::{NewService, Service, ServiceRepository};

pub use crate::shared::errors::DomainError;
