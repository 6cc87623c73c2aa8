//! Contact aggregate
//!
//! Messages sent through the public contact form and their triage status.

pub mod model;
pub mod repository;

pub use model::{Contact, ContactStatus, NewContact};
pub use repository::ContactRepository;
