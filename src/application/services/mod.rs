//! Application services

mod appointments;
mod catalog;
mod contacts;

pub use appointments::AppointmentService;
pub use catalog::ServiceCatalog;
pub use contacts::ContactService;
