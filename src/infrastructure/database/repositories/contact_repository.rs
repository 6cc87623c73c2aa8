//! SeaORM implementation of ContactRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{
    Contact, ContactRepository, ContactStatus, DomainError, DomainResult, NewContact,
};
use crate::infrastructure::database::entities::contact;

fn status_to_domain(s: contact::ContactStatus) -> ContactStatus {
    match s {
        contact::ContactStatus::New => ContactStatus::New,
        contact::ContactStatus::Read => ContactStatus::Read,
        contact::ContactStatus::Replied => ContactStatus::Replied,
    }
}

fn status_to_entity(s: ContactStatus) -> contact::ContactStatus {
    match s {
        ContactStatus::New => contact::ContactStatus::New,
        ContactStatus::Read => contact::ContactStatus::Read,
        ContactStatus::Replied => contact::ContactStatus::Replied,
    }
}

fn entity_to_domain(m: contact::Model) -> Contact {
    Contact {
        id: m.id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        subject: m.subject,
        message: m.message,
        status: status_to_domain(m.status),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub struct SeaOrmContactRepository {
    db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn find_all(&self) -> DomainResult<Vec<Contact>> {
        let models = contact::Entity::find()
            .order_by_desc(contact::Column::CreatedAt)
            .order_by_desc(contact::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contact>> {
        let model = contact::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(&self, c: NewContact) -> DomainResult<Contact> {
        let now = Utc::now();
        let model = contact::ActiveModel {
            name: Set(c.name),
            email: Set(c.email),
            phone: Set(c.phone),
            subject: Set(c.subject),
            message: Set(c.message),
            status: Set(contact::ContactStatus::New),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        Ok(entity_to_domain(result))
    }

    async fn update(&self, c: Contact) -> DomainResult<Contact> {
        let existing = contact::Entity::find_by_id(c.id).one(&self.db).await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("Contact", c.id));
        };

        let model = contact::ActiveModel {
            id: Set(c.id),
            name: Set(c.name),
            email: Set(c.email),
            phone: Set(c.phone),
            subject: Set(c.subject),
            message: Set(c.message),
            status: Set(status_to_entity(c.status)),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let result = model.update(&self.db).await?;
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = contact::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Contact", id));
        }
        Ok(())
    }
}
