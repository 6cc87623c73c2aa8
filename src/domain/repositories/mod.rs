//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use async_trait::async_trait;

use super::appointment::AppointmentRepository;
use super::contact::ContactRepository;
use super::service::ServiceRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let services = repos.services().find_active().await?;
///     let booking = repos.appointments().find_by_id(7).await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn services(&self) -> &dyn ServiceRepository;
    fn appointments(&self) -> &dyn AppointmentRepository;
    fn contacts(&self) -> &dyn ContactRepository;

    /// Round-trip to the backing store (health checks).
    async fn ping(&self) -> DomainResult<()>;
}
