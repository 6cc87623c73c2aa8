//! SeaORM implementation of AppointmentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use super::service_repository;
use crate::domain::{
    Appointment, AppointmentRepository, AppointmentStatus, DomainError, DomainResult,
    NewAppointment,
};
use crate::infrastructure::database::entities::{appointment, service};

// ── Conversion helpers ──────────────────────────────────────────

fn status_to_domain(s: appointment::AppointmentStatus) -> AppointmentStatus {
    match s {
        appointment::AppointmentStatus::Pending => AppointmentStatus::Pending,
        appointment::AppointmentStatus::Confirmed => AppointmentStatus::Confirmed,
        appointment::AppointmentStatus::Cancelled => AppointmentStatus::Cancelled,
        appointment::AppointmentStatus::Completed => AppointmentStatus::Completed,
    }
}

fn status_to_entity(s: AppointmentStatus) -> appointment::AppointmentStatus {
    match s {
        AppointmentStatus::Pending => appointment::AppointmentStatus::Pending,
        AppointmentStatus::Confirmed => appointment::AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled => appointment::AppointmentStatus::Cancelled,
        AppointmentStatus::Completed => appointment::AppointmentStatus::Completed,
    }
}

fn entity_to_domain(m: appointment::Model, s: Option<service::Model>) -> Appointment {
    Appointment {
        id: m.id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        service_id: m.service_id,
        appointment_date: m.appointment_date,
        appointment_time: m.appointment_time,
        message: m.message,
        status: status_to_domain(m.status),
        service: s.map(service_repository::entity_to_domain),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeaOrmAppointmentRepository ─────────────────────────────────

pub struct SeaOrmAppointmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, id: i32) -> DomainResult<Option<Appointment>> {
        let row = appointment::Entity::find_by_id(id)
            .find_also_related(service::Entity)
            .one(&self.db)
            .await?;
        Ok(row.map(|(a, s)| entity_to_domain(a, s)))
    }
}

#[async_trait]
impl AppointmentRepository for SeaOrmAppointmentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Appointment>> {
        let rows = appointment::Entity::find()
            .find_also_related(service::Entity)
            .order_by_asc(appointment::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(a, s)| entity_to_domain(a, s))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Appointment>> {
        self.load(id).await
    }

    async fn save(&self, a: NewAppointment) -> DomainResult<Appointment> {
        let now = Utc::now();
        let model = appointment::ActiveModel {
            name: Set(a.name),
            email: Set(a.email),
            phone: Set(a.phone),
            service_id: Set(a.service_id),
            appointment_date: Set(a.appointment_date),
            appointment_time: Set(a.appointment_time),
            message: Set(a.message),
            status: Set(appointment::AppointmentStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let txn = self.db.begin().await?;
        let inserted = model.insert(&txn).await?;
        let related = service::Entity::find_by_id(inserted.service_id)
            .one(&txn)
            .await?;
        txn.commit().await?;
        Ok(entity_to_domain(inserted, related))
    }

    async fn update(&self, a: Appointment) -> DomainResult<Appointment> {
        let txn = self.db.begin().await?;
        let existing = appointment::Entity::find_by_id(a.id).one(&txn).await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("Appointment", a.id));
        };

        let model = appointment::ActiveModel {
            id: Set(a.id),
            name: Set(a.name),
            email: Set(a.email),
            phone: Set(a.phone),
            service_id: Set(a.service_id),
            appointment_date: Set(a.appointment_date),
            appointment_time: Set(a.appointment_time),
            message: Set(a.message),
            status: Set(status_to_entity(a.status)),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let updated = model.update(&txn).await?;
        let related = service::Entity::find_by_id(updated.service_id)
            .one(&txn)
            .await?;
        txn.commit().await?;
        Ok(entity_to_domain(updated, related))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = appointment::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Appointment", id));
        }
        Ok(())
    }
}
