//! Contact inbox

use std::sync::Arc;

use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::application::dto::{CreateContactRequest, UpdateContactRequest};
use crate::domain::{Contact, ContactStatus, DomainError, DomainResult, NewContact, RepositoryProvider};
use crate::shared::validations::{collect, field_error};

pub struct ContactService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ContactService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Newest first
    pub async fn list(&self) -> DomainResult<Vec<Contact>> {
        self.repos.contacts().find_all().await
    }

    pub async fn create(&self, req: CreateContactRequest) -> DomainResult<Contact> {
        let errors = collect(req.validate(), &req.mistyped);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let (Some(name), Some(email), Some(subject), Some(message)) =
            (req.name, req.email, req.subject, req.message)
        else {
            return Err(DomainError::Validation(ValidationErrors::new()));
        };

        let contact = self
            .repos
            .contacts()
            .save(NewContact {
                name,
                email,
                phone: req.phone.filter(|p| !p.trim().is_empty()),
                subject,
                message,
            })
            .await?;

        metrics::counter!("contacts_received_total").increment(1);
        info!(contact_id = contact.id, "Contact message received: {}", contact.subject);
        Ok(contact)
    }

    pub async fn read(&self, id: i32) -> DomainResult<Contact> {
        self.repos
            .contacts()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Contact", id))
    }

    /// Only the status changes; an empty body leaves the record as is.
    pub async fn update(&self, id: i32, req: UpdateContactRequest) -> DomainResult<Contact> {
        let mut contact = self.read(id).await?;

        if !req.mistyped.is_empty() {
            return Err(req.mistyped.into());
        }
        let Some(raw) = req.status else {
            return Ok(contact);
        };
        let next = ContactStatus::parse(&raw).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add("status", field_error("in", "The selected status is invalid."));
            DomainError::Validation(errors)
        })?;

        let from = contact.status;
        if !contact.transition_to(next) {
            let mut errors = ValidationErrors::new();
            errors.add(
                "status",
                field_error(
                    "transition",
                    format!("A contact cannot move from {} to {}.", from, next),
                ),
            );
            return Err(errors.into());
        }

        let updated = self.repos.contacts().update(contact).await?;
        info!(contact_id = id, "Contact status {} -> {}", from, next);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.contacts().delete(id).await?;
        info!(contact_id = id, "Contact deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn inbox() -> ContactService {
        ContactService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn message(subject: &str) -> CreateContactRequest {
        CreateContactRequest {
            name: Some("João Souza".into()),
            email: Some("joao@example.com".into()),
            phone: None,
            subject: Some(subject.into()),
            message: Some("Gostaria de saber os horários.".into()),
            ..Default::default()
        }
    }

    fn status(raw: &str) -> UpdateContactRequest {
        UpdateContactRequest {
            status: Some(raw.into()),
            ..Default::default()
        }
    }

    fn fields(err: &DomainError) -> Vec<String> {
        let mut names: Vec<String> = err
            .validation_errors()
            .expect("validation error")
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn submission_starts_as_new() {
        let inbox = inbox();
        let contact = inbox.create(message("Horários")).await.unwrap();
        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.phone, None);
        assert_eq!(inbox.read(contact.id).await.unwrap(), contact);
    }

    #[tokio::test]
    async fn blank_phone_is_stored_as_none() {
        let inbox = inbox();
        let mut req = message("Horários");
        req.phone = Some(String::new());
        assert_eq!(inbox.create(req).await.unwrap().phone, None);
    }

    #[tokio::test]
    async fn invalid_submission_is_rejected() {
        let inbox = inbox();
        let req = CreateContactRequest {
            name: None,
            email: Some("joao".into()),
            phone: Some("1".repeat(21)),
            subject: None,
            message: Some("x".repeat(2001)),
            ..Default::default()
        };
        let err = inbox.create(req).await.unwrap_err();
        assert_eq!(fields(&err), vec!["email", "message", "name", "phone", "subject"]);
        assert!(inbox.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let inbox = inbox();
        let first = inbox.create(message("Primeira")).await.unwrap();
        let second = inbox.create(message("Segunda")).await.unwrap();

        let ids: Vec<i32> = inbox.list().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn status_update_and_rejection() {
        let inbox = inbox();
        let contact = inbox.create(message("Horários")).await.unwrap();

        let replied = inbox
            .update(contact.id, status("replied"))
            .await
            .unwrap();
        assert_eq!(replied.status, ContactStatus::Replied);
        assert_eq!(replied.message, contact.message);

        let reopened = inbox
            .update(contact.id, status("new"))
            .await
            .unwrap();
        assert_eq!(reopened.status, ContactStatus::New);

        let err = inbox
            .update(contact.id, status("archived"))
            .await
            .unwrap_err();
        assert_eq!(fields(&err), vec!["status"]);
    }

    #[tokio::test]
    async fn empty_update_keeps_record() {
        let inbox = inbox();
        let contact = inbox.create(message("Horários")).await.unwrap();
        let same = inbox
            .update(contact.id, UpdateContactRequest::default())
            .await
            .unwrap();
        assert_eq!(same, contact);
    }

    #[tokio::test]
    async fn missing_contact_is_not_found() {
        let inbox = inbox();
        assert!(inbox.read(3).await.unwrap_err().is_not_found());
        assert!(inbox
            .update(3, status("read"))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(inbox.delete(3).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_contact() {
        let inbox = inbox();
        let contact = inbox.create(message("Horários")).await.unwrap();
        inbox.delete(contact.id).await.unwrap();
        assert!(inbox.list().await.unwrap().is_empty());
    }
}
