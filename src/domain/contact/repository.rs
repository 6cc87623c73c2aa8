//! Contact repository interface

use async_trait::async_trait;

use super::model::{Contact, NewContact};
use crate::domain::DomainResult;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Newest first (created_at desc, then id desc)
    async fn find_all(&self) -> DomainResult<Vec<Contact>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contact>>;

    async fn save(&self, contact: NewContact) -> DomainResult<Contact>;

    async fn update(&self, contact: Contact) -> DomainResult<Contact>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
