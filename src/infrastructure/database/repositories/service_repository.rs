//! SeaORM implementation of ServiceRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{DomainError, DomainResult, NewService, Service, ServiceRepository};
use crate::infrastructure::database::entities::service;

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn entity_to_domain(m: service::Model) -> Service {
    Service {
        id: m.id,
        name: m.name,
        description: m.description,
        icon: m.icon,
        // SQLite hands decimals back through f64
        price: m.price.map(|p| p.round_dp(2)),
        duration: m.duration,
        active: m.active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeaOrmServiceRepository ─────────────────────────────────────

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn find_active(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::Active.eq(true))
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Service>> {
        let model = service::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn exists(&self, id: i32) -> DomainResult<bool> {
        let count = service::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(service::Entity::find().count(&self.db).await?)
    }

    async fn save(&self, s: NewService) -> DomainResult<Service> {
        let now = Utc::now();
        let model = service::ActiveModel {
            name: Set(s.name),
            description: Set(s.description),
            icon: Set(s.icon),
            price: Set(s.price.map(|p| p.round_dp(2))),
            duration: Set(s.duration),
            active: Set(s.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        Ok(entity_to_domain(result))
    }

    async fn update(&self, s: Service) -> DomainResult<Service> {
        let existing = service::Entity::find_by_id(s.id).one(&self.db).await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("Service", s.id));
        };

        let model = service::ActiveModel {
            id: Set(s.id),
            name: Set(s.name),
            description: Set(s.description),
            icon: Set(s.icon),
            price: Set(s.price.map(|p| p.round_dp(2))),
            duration: Set(s.duration),
            active: Set(s.active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let result = model.update(&self.db).await?;
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = service::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Service", id));
        }
        Ok(())
    }
}
