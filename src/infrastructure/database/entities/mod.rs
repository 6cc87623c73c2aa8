//! Database entities module

pub mod appointment;
pub mod contact;
pub mod service;

pub use appointment::Entity as Appointment;
pub use contact::Entity as Contact;
pub use service::Entity as Service;
