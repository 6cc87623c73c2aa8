//! Service catalogue operations

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::application::dto::{CreateServiceRequest, UpdateServiceRequest};
use crate::domain::service::default_catalogue;
use crate::domain::{DomainError, DomainResult, NewService, RepositoryProvider, Service};
use crate::shared::types::merge_nullable;
use crate::shared::validations::{self, collect, record};

/// CRUD over clinic services
pub struct ServiceCatalog {
    repos: Arc<dyn RepositoryProvider>,
}

impl ServiceCatalog {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Active services only, in storage order
    pub async fn list(&self) -> DomainResult<Vec<Service>> {
        self.repos.services().find_active().await
    }

    pub async fn create(&self, req: CreateServiceRequest) -> DomainResult<Service> {
        let mut errors = collect(req.validate(), &req.mistyped);
        let price = req
            .price
            .and_then(|p| record(&mut errors, "price", validations::price(p)));

        if !errors.is_empty() {
            return Err(errors.into());
        }
        let (Some(name), Some(description)) = (req.name, req.description) else {
            return Err(errors.into());
        };

        let saved = self
            .repos
            .services()
            .save(NewService {
                name,
                description,
                icon: req.icon,
                price,
                duration: req.duration,
                active: req.active.unwrap_or(true),
            })
            .await?;

        info!(service_id = saved.id, "Service created: {}", saved.name);
        Ok(saved)
    }

    pub async fn read(&self, id: i32) -> DomainResult<Service> {
        self.repos
            .services()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", id))
    }

    /// Merge the present fields of `req` into the stored service.
    pub async fn update(&self, id: i32, req: UpdateServiceRequest) -> DomainResult<Service> {
        let mut service = self.read(id).await?;

        let mut errors = collect(req.validate(), &req.mistyped);
        if let Some(Some(icon)) = &req.icon {
            record(
                &mut errors,
                "icon",
                validations::max_chars(
                    icon,
                    255,
                    "The icon field must not be greater than 255 characters.",
                ),
            );
        }
        let price = match req.price {
            Some(Some(p)) => record(&mut errors, "price", validations::price(p)).map(Some),
            other => other,
        };
        let duration = match req.duration {
            Some(Some(d)) => record(&mut errors, "duration", validations::duration(d)).map(Some),
            other => other,
        };

        if !errors.is_empty() {
            return Err(errors.into());
        }

        if let Some(name) = req.name {
            service.name = name;
        }
        if let Some(description) = req.description {
            service.description = description;
        }
        if let Some(active) = req.active {
            service.active = active;
        }
        service.icon = merge_nullable(req.icon, service.icon);
        service.price = merge_nullable(price, service.price);
        service.duration = merge_nullable(duration, service.duration);

        let updated = self.repos.services().update(service).await?;
        info!(service_id = updated.id, "Service updated");
        Ok(updated)
    }

    /// Hard delete; bookings that reference the service keep a dangling id.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.services().delete(id).await?;
        info!(service_id = id, "Service deleted");
        Ok(())
    }

    /// Install the default catalogue when no service exists yet.
    /// Returns how many services were inserted.
    pub async fn seed_defaults(&self) -> DomainResult<usize> {
        if self.repos.services().count().await? > 0 {
            return Ok(0);
        }

        let catalogue = default_catalogue();
        let total = catalogue.len();
        for service in catalogue {
            self.repos.services().save(service).await?;
        }
        info!("Seeded {} default services", total);
        Ok(total)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use rust_decimal::Decimal;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn cardiology() -> CreateServiceRequest {
        CreateServiceRequest {
            name: Some("Cardiologia".into()),
            description: Some("Consulta com eletrocardiograma".into()),
            icon: Some("heart".into()),
            price: Some(Decimal::new(200, 0)),
            duration: Some(90),
            active: Some(true),
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
    async fn create_then_read_roundtrip() {
        let catalog = catalog();
        let created = catalog.create(cardiology()).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.formatted_price().as_deref(), Some("200.00"));

        let read = catalog.read(created.id).await.unwrap();
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn create_defaults_to_active() {
        let catalog = catalog();
        let mut req = cardiology();
        req.active = None;
        assert!(catalog.create(req).await.unwrap().active);
    }

    #[tokio::test]
    async fn create_reports_every_invalid_field() {
        let catalog = catalog();
        let req = CreateServiceRequest {
            name: None,
            description: Some(String::new()),
            icon: Some("x".repeat(256)),
            price: Some(Decimal::new(-1, 0)),
            duration: Some(0),
            active: None,
            ..Default::default()
        };
        let err = catalog.create(req).await.unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["description", "duration", "icon", "name", "price"]
        );
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_hides_inactive_services() {
        let catalog = catalog();
        let visible = catalog.create(cardiology()).await.unwrap();
        let mut hidden = cardiology();
        hidden.name = Some("Arquivado".into());
        hidden.active = Some(false);
        catalog.create(hidden).await.unwrap();

        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, visible.id);
    }

    #[tokio::test]
    async fn update_merges_present_fields_only() {
        let catalog = catalog();
        let created = catalog.create(cardiology()).await.unwrap();

        let updated = catalog
            .update(
                created.id,
                UpdateServiceRequest {
                    duration: Some(Some(45)),
                    icon: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.duration, Some(45));
        assert_eq!(updated.icon, None);
        assert_eq!(updated.name, "Cardiologia");
        assert_eq!(updated.price, created.price);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_validates_present_fields() {
        let catalog = catalog();
        let created = catalog.create(cardiology()).await.unwrap();

        let err = catalog
            .update(
                created.id,
                UpdateServiceRequest {
                    price: Some(Some(Decimal::new(-5, 0))),
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(fields(&err), vec!["name", "price"]);

        let unchanged = catalog.read(created.id).await.unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn missing_service_is_not_found() {
        let catalog = catalog();
        assert!(catalog.read(99).await.unwrap_err().is_not_found());
        assert!(catalog
            .update(99, UpdateServiceRequest::default())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(catalog.delete(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_service() {
        let catalog = catalog();
        let created = catalog.create(cardiology()).await.unwrap();
        catalog.delete(created.id).await.unwrap();
        assert!(catalog.read(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn seed_runs_once() {
        let catalog = catalog();
        assert_eq!(catalog.seed_defaults().await.unwrap(), 6);
        assert_eq!(catalog.seed_defaults().await.unwrap(), 0);
        assert_eq!(catalog.list().await.unwrap().len(), 6);
    }
}
