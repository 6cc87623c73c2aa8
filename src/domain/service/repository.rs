//! Service repository interface

use async_trait::async_trait;

use super::model::{NewService, Service};
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Active services in storage order (ascending id)
    async fn find_active(&self) -> DomainResult<Vec<Service>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Service>>;

    /// Whether a row with this id exists (active or not)
    async fn exists(&self, id: i32) -> DomainResult<bool>;

    async fn count(&self) -> DomainResult<u64>;

    async fn save(&self, service: NewService) -> DomainResult<Service>;

    /// Overwrite every mutable column; refreshes `updated_at`
    async fn update(&self, service: Service) -> DomainResult<Service>;

    /// Hard delete. Appointments pointing at the row are left untouched.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
