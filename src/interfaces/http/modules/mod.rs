pub mod appointments;
pub mod contacts;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod services;
