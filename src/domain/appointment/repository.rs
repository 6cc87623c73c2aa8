//! Appointment repository interface

use async_trait::async_trait;

use super::model::{Appointment, NewAppointment};
use crate::domain::DomainResult;

/// Every read attaches the related service (`Appointment::service`).
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Appointment>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Appointment>>;

    /// Insert with status `pending` and return the stored row with its service
    async fn save(&self, appointment: NewAppointment) -> DomainResult<Appointment>;

    /// Overwrite booking fields and status; refreshes `updated_at`
    async fn update(&self, appointment: Appointment) -> DomainResult<Appointment>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
