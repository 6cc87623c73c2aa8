//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{AppointmentRepository, ContactRepository, DomainResult, ServiceRepository};

use super::appointment_repository::SeaOrmAppointmentRepository;
use super::contact_repository::SeaOrmContactRepository;
use super::service_repository::SeaOrmServiceRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let services = repos.services().find_active().await?;
/// let booking = repos.appointments().find_by_id(7).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    services: SeaOrmServiceRepository,
    appointments: SeaOrmAppointmentRepository,
    contacts: SeaOrmContactRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            services: SeaOrmServiceRepository::new(db.clone()),
            appointments: SeaOrmAppointmentRepository::new(db.clone()),
            contacts: SeaOrmContactRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn appointments(&self) -> &dyn AppointmentRepository {
        &self.appointments
    }

    fn contacts(&self) -> &dyn ContactRepository {
        &self.contacts
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentStatus, ContactStatus, NewAppointment, NewContact, NewService};
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use crate::infrastructure::database::migrator::{Migrator, MigratorTrait};
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    async fn provider() -> SeaOrmRepositoryProvider {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmRepositoryProvider::new(db)
    }

    fn booking(service_id: i32) -> NewAppointment {
        NewAppointment {
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            phone: "11999990000".into(),
            service_id,
            appointment_date: NaiveDate::from_ymd_opt(2030, 3, 4).unwrap(),
            appointment_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            message: None,
        }
    }

    #[tokio::test]
    async fn ping_succeeds() {
        provider().await.ping().await.unwrap();
    }

    #[tokio::test]
    async fn service_price_keeps_two_decimals() {
        let repos = provider().await;
        let saved = repos
            .services()
            .save(NewService::new("Pediatria", "Atendimento infantil").with_price(Decimal::new(18050, 2)))
            .await
            .unwrap();

        let read = repos.services().find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(read.formatted_price().as_deref(), Some("180.50"));
        assert!(repos.services().exists(saved.id).await.unwrap());
        assert!(!repos.services().exists(saved.id + 1).await.unwrap());
        assert_eq!(repos.services().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_active_filters_and_orders_by_id() {
        let repos = provider().await;
        let a = repos.services().save(NewService::new("A", "a")).await.unwrap();
        repos.services().save(NewService::new("B", "b").inactive()).await.unwrap();
        let c = repos.services().save(NewService::new("C", "c")).await.unwrap();

        let ids: Vec<i32> = repos
            .services()
            .find_active()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[tokio::test]
    async fn appointment_roundtrip_attaches_service() {
        let repos = provider().await;
        let service = repos
            .services()
            .save(NewService::new("Cardiologia", "Coração"))
            .await
            .unwrap();

        let saved = repos.appointments().save(booking(service.id)).await.unwrap();
        assert_eq!(saved.status, AppointmentStatus::Pending);
        assert_eq!(saved.service.as_ref().map(|s| s.id), Some(service.id));

        let mut loaded = repos.appointments().find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.time_label(), "14:30");
        assert_eq!(loaded.appointment_date, saved.appointment_date);

        loaded.status = AppointmentStatus::Confirmed;
        loaded.message = Some("Trazer exames".into());
        let updated = repos.appointments().update(loaded).await.unwrap();
        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(updated.message.as_deref(), Some("Trazer exames"));
        assert_eq!(updated.created_at, saved.created_at);
    }

    #[tokio::test]
    async fn deleting_service_keeps_appointment() {
        let repos = provider().await;
        let service = repos
            .services()
            .save(NewService::new("Cardiologia", "Coração"))
            .await
            .unwrap();
        let saved = repos.appointments().save(booking(service.id)).await.unwrap();

        repos.services().delete(service.id).await.unwrap();

        let all = repos.appointments().find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, saved.id);
        assert_eq!(all[0].service_id, service.id);
        assert!(all[0].service.is_none());
    }

    #[tokio::test]
    async fn contacts_newest_first_and_status_persisted() {
        let repos = provider().await;
        let mut ids = Vec::new();
        for subject in ["Um", "Dois", "Três"] {
            let c = repos
                .contacts()
                .save(NewContact {
                    name: "Ana".into(),
                    email: "ana@example.com".into(),
                    phone: None,
                    subject: subject.into(),
                    message: "Olá".into(),
                })
                .await
                .unwrap();
            assert_eq!(c.status, ContactStatus::New);
            ids.push(c.id);
        }
        ids.reverse();

        let listed: Vec<i32> = repos
            .contacts()
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(listed, ids);

        let mut first = repos.contacts().find_by_id(ids[2]).await.unwrap().unwrap();
        first.status = ContactStatus::Replied;
        repos.contacts().update(first).await.unwrap();
        let reread = repos.contacts().find_by_id(ids[2]).await.unwrap().unwrap();
        assert_eq!(reread.status, ContactStatus::Replied);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let repos = provider().await;
        assert!(repos.services().delete(5).await.unwrap_err().is_not_found());
        assert!(repos.appointments().delete(5).await.unwrap_err().is_not_found());
        assert!(repos.contacts().delete(5).await.unwrap_err().is_not_found());
        assert!(repos.appointments().find_by_id(5).await.unwrap().is_none());
    }
}
