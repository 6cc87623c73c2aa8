pub mod dto;
pub mod services;

// Re-export key types for convenience
pub use services::{AppointmentService, ContactService, ServiceCatalog};
