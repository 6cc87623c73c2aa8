//! In-memory repositories for development and testing

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    Appointment, AppointmentRepository, AppointmentStatus, Contact, ContactRepository,
    ContactStatus, DomainError, DomainResult, NewAppointment, NewContact, NewService,
    RepositoryProvider, Service, ServiceRepository,
};

type ServiceTable = Arc<DashMap<i32, Service>>;

/// Process-local store. Ids start at 1 and are never reused.
pub struct InMemoryRepositoryProvider {
    services: InMemoryServiceRepository,
    appointments: InMemoryAppointmentRepository,
    contacts: InMemoryContactRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let services: ServiceTable = Arc::new(DashMap::new());
        Self {
            services: InMemoryServiceRepository {
                rows: services.clone(),
                counter: AtomicI32::new(1),
            },
            appointments: InMemoryAppointmentRepository {
                rows: DashMap::new(),
                services,
                counter: AtomicI32::new(1),
            },
            contacts: InMemoryContactRepository {
                rows: DashMap::new(),
                counter: AtomicI32::new(1),
            },
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
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
        Ok(())
    }
}

// ── Services ───────────────────────────────────────────────────

struct InMemoryServiceRepository {
    rows: ServiceTable,
    counter: AtomicI32,
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn find_active(&self) -> DomainResult<Vec<Service>> {
        let mut services: Vec<Service> = self
            .rows
            .iter()
            .filter(|s| s.active)
            .map(|s| s.clone())
            .collect();
        services.sort_by_key(|s| s.id);
        Ok(services)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Service>> {
        Ok(self.rows.get(&id).map(|s| s.clone()))
    }

    async fn exists(&self, id: i32) -> DomainResult<bool> {
        Ok(self.rows.contains_key(&id))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.len() as u64)
    }

    async fn save(&self, service: NewService) -> DomainResult<Service> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let stored = Service {
            id,
            name: service.name,
            description: service.description,
            icon: service.icon,
            price: service.price.map(|p| p.round_dp(2)),
            duration: service.duration,
            active: service.active,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, mut service: Service) -> DomainResult<Service> {
        let mut row = self
            .rows
            .get_mut(&service.id)
            .ok_or_else(|| DomainError::not_found("Service", service.id))?;
        service.price = service.price.map(|p| p.round_dp(2));
        service.created_at = row.created_at;
        service.updated_at = Utc::now();
        *row = service.clone();
        Ok(service)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Service", id))?;
        Ok(())
    }
}

// ── Appointments ───────────────────────────────────────────────

struct InMemoryAppointmentRepository {
    /// Stored without the related service; it is attached on read.
    rows: DashMap<i32, Appointment>,
    services: ServiceTable,
    counter: AtomicI32,
}

impl InMemoryAppointmentRepository {
    fn with_service(&self, mut appointment: Appointment) -> Appointment {
        appointment.service = self
            .services
            .get(&appointment.service_id)
            .map(|s| s.clone());
        appointment
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Appointment>> {
        let mut appointments: Vec<Appointment> = self
            .rows
            .iter()
            .map(|a| self.with_service(a.clone()))
            .collect();
        appointments.sort_by_key(|a| a.id);
        Ok(appointments)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Appointment>> {
        let row = self.rows.get(&id).map(|a| a.clone());
        Ok(row.map(|a| self.with_service(a)))
    }

    async fn save(&self, appointment: NewAppointment) -> DomainResult<Appointment> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let stored = Appointment {
            id,
            name: appointment.name,
            email: appointment.email,
            phone: appointment.phone,
            service_id: appointment.service_id,
            appointment_date: appointment.appointment_date,
            appointment_time: appointment.appointment_time,
            message: appointment.message,
            status: AppointmentStatus::Pending,
            service: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, stored.clone());
        Ok(self.with_service(stored))
    }

    async fn update(&self, mut appointment: Appointment) -> DomainResult<Appointment> {
        {
            let mut row = self
                .rows
                .get_mut(&appointment.id)
                .ok_or_else(|| DomainError::not_found("Appointment", appointment.id))?;
            appointment.service = None;
            appointment.created_at = row.created_at;
            appointment.updated_at = Utc::now();
            *row = appointment.clone();
        }
        Ok(self.with_service(appointment))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Appointment", id))?;
        Ok(())
    }
}

// ── Contacts ───────────────────────────────────────────────────

struct InMemoryContactRepository {
    rows: DashMap<i32, Contact>,
    counter: AtomicI32,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> DomainResult<Vec<Contact>> {
        let mut contacts: Vec<Contact> = self.rows.iter().map(|c| c.clone()).collect();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contact>> {
        Ok(self.rows.get(&id).map(|c| c.clone()))
    }

    async fn save(&self, contact: NewContact) -> DomainResult<Contact> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let stored = Contact {
            id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            subject: contact.subject,
            message: contact.message,
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, mut contact: Contact) -> DomainResult<Contact> {
        let mut row = self
            .rows
            .get_mut(&contact.id)
            .ok_or_else(|| DomainError::not_found("Contact", contact.id))?;
        contact.created_at = row.created_at;
        contact.updated_at = Utc::now();
        *row = contact.clone();
        Ok(contact)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Contact", id))?;
        Ok(())
    }
}
