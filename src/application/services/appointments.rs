//! Appointment booking and management

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::application::dto::{CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::domain::{
    Appointment, AppointmentStatus, DomainError, DomainResult, NewAppointment, RepositoryProvider,
};
use crate::shared::types::merge_nullable;
use crate::shared::validations::{self, collect, field_error, record};

/// Booking intake and staff-side appointment management.
///
/// Dates are checked against the server clock (UTC) at request time.
/// Nothing prevents two bookings of the same service, date and time.
pub struct AppointmentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AppointmentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Appointment>> {
        self.repos.appointments().find_all().await
    }

    pub async fn create(&self, req: CreateAppointmentRequest) -> DomainResult<Appointment> {
        self.create_as_of(req, Utc::now().date_naive()).await
    }

    /// Book with `today` as the reference day for the date rule.
    pub async fn create_as_of(
        &self,
        req: CreateAppointmentRequest,
        today: NaiveDate,
    ) -> DomainResult<Appointment> {
        let mut errors = collect(req.validate(), &req.mistyped);

        let date = req.appointment_date.as_deref().and_then(|raw| {
            record(
                &mut errors,
                "appointment_date",
                validations::booking_date(raw, today),
            )
        });
        let time = req.appointment_time.as_deref().and_then(|raw| {
            record(&mut errors, "appointment_time", validations::booking_time(raw))
        });
        if let Some(service_id) = req.service_id {
            self.check_service_exists(service_id, &mut errors).await?;
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }
        let (Some(name), Some(email), Some(phone), Some(service_id), Some(date), Some(time)) =
            (req.name, req.email, req.phone, req.service_id, date, time)
        else {
            return Err(errors.into());
        };

        let booked = self
            .repos
            .appointments()
            .save(NewAppointment {
                name,
                email,
                phone,
                service_id,
                appointment_date: date,
                appointment_time: time,
                message: req.message.filter(|m| !m.trim().is_empty()),
            })
            .await?;

        metrics::counter!("appointments_booked_total").increment(1);
        info!(
            appointment_id = booked.id,
            service_id = booked.service_id,
            "Appointment booked for {} at {}",
            booked.appointment_date,
            booked.time_label()
        );
        Ok(booked)
    }

    pub async fn read(&self, id: i32) -> DomainResult<Appointment> {
        self.repos
            .appointments()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Appointment", id))
    }

    pub async fn update(
        &self,
        id: i32,
        req: UpdateAppointmentRequest,
    ) -> DomainResult<Appointment> {
        self.update_as_of(id, req, Utc::now().date_naive()).await
    }

    /// Partial update; only present fields are validated and merged.
    pub async fn update_as_of(
        &self,
        id: i32,
        req: UpdateAppointmentRequest,
        today: NaiveDate,
    ) -> DomainResult<Appointment> {
        let mut appointment = self.read(id).await?;

        let mut errors = collect(req.validate(), &req.mistyped);

        let date = req.appointment_date.as_deref().and_then(|raw| {
            record(
                &mut errors,
                "appointment_date",
                validations::booking_date(raw, today),
            )
        });
        let time = req.appointment_time.as_deref().and_then(|raw| {
            record(&mut errors, "appointment_time", validations::booking_time(raw))
        });
        if let Some(Some(message)) = &req.message {
            record(
                &mut errors,
                "message",
                validations::max_chars(
                    message,
                    1000,
                    "The message field must not be greater than 1000 characters.",
                ),
            );
        }
        if let Some(service_id) = req.service_id {
            self.check_service_exists(service_id, &mut errors).await?;
        }
        let status = req.status.as_deref().and_then(|raw| {
            let parsed = AppointmentStatus::parse(raw);
            if parsed.is_none() {
                errors.add(
                    "status",
                    field_error("in", "The selected status is invalid."),
                );
            }
            parsed
        });

        if !errors.is_empty() {
            return Err(errors.into());
        }

        if let Some(name) = req.name {
            appointment.name = name;
        }
        if let Some(email) = req.email {
            appointment.email = email;
        }
        if let Some(phone) = req.phone {
            appointment.phone = phone;
        }
        if let Some(service_id) = req.service_id {
            appointment.service_id = service_id;
        }
        if let Some(date) = date {
            appointment.appointment_date = date;
        }
        if let Some(time) = time {
            appointment.appointment_time = time;
        }
        let message = req
            .message
            .map(|m| m.filter(|text| !text.trim().is_empty()));
        appointment.message = merge_nullable(message, appointment.message);

        if let Some(next) = status {
            let from = appointment.status;
            if !appointment.transition_to(next) {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "status",
                    field_error(
                        "transition",
                        format!("An appointment cannot move from {} to {}.", from, next),
                    ),
                );
                return Err(errors.into());
            }
            if from != next {
                info!(appointment_id = id, "Appointment status {} -> {}", from, next);
            }
        }

        self.repos.appointments().update(appointment).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.appointments().delete(id).await?;
        info!(appointment_id = id, "Appointment deleted");
        Ok(())
    }

    async fn check_service_exists(
        &self,
        service_id: i32,
        errors: &mut ValidationErrors,
    ) -> DomainResult<()> {
        if !self.repos.services().exists(service_id).await? {
            errors.add(
                "service_id",
                field_error("exists", "The selected service id is invalid."),
            );
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewService;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use chrono::{Duration, NaiveTime};

    struct Fixture {
        repos: Arc<InMemoryRepositoryProvider>,
        appointments: AppointmentService,
        service_id: i32,
    }

    async fn fixture() -> Fixture {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = repos
            .services()
            .save(NewService::new("Consulta Geral", "Consulta completa"))
            .await
            .unwrap();
        Fixture {
            appointments: AppointmentService::new(repos.clone()),
            repos,
            service_id: service.id,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 10).unwrap()
    }

    fn booking(service_id: i32) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            name: Some("Maria Silva".into()),
            email: Some("maria@example.com".into()),
            phone: Some("11999990000".into()),
            service_id: Some(service_id),
            appointment_date: Some("2030-06-11".into()),
            appointment_time: Some("14:30".into()),
            message: Some("Primeira consulta".into()),
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
    async fn booking_starts_pending_with_service_attached() {
        let f = fixture().await;
        let booked = f
            .appointments
            .create_as_of(booking(f.service_id), today())
            .await
            .unwrap();

        assert_eq!(booked.status, AppointmentStatus::Pending);
        assert_eq!(booked.appointment_date, today() + Duration::days(1));
        assert_eq!(booked.time_label(), "14:30");
        assert_eq!(
            booked.service.as_ref().map(|s| s.name.as_str()),
            Some("Consulta Geral")
        );

        let read = f.appointments.read(booked.id).await.unwrap();
        assert_eq!(read, booked);
    }

    #[tokio::test]
    async fn date_on_or_before_today_is_rejected_and_nothing_persisted() {
        let f = fixture().await;
        for raw in ["2030-06-10", "2030-06-09", "2020-01-01"] {
            let mut req = booking(f.service_id);
            req.appointment_date = Some(raw.into());
            let err = f.appointments.create_as_of(req, today()).await.unwrap_err();
            assert_eq!(fields(&err), vec!["appointment_date"], "date {raw}");
        }
        assert!(f.appointments.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_uses_the_real_clock() {
        let f = fixture().await;
        let yesterday = (Utc::now().date_naive() - Duration::days(1)).to_string();
        let mut req = booking(f.service_id);
        req.appointment_date = Some(yesterday);
        let err = f.appointments.create(req).await.unwrap_err();
        assert_eq!(fields(&err), vec!["appointment_date"]);

        let tomorrow = (Utc::now().date_naive() + Duration::days(2)).to_string();
        let mut req = booking(f.service_id);
        req.appointment_date = Some(tomorrow);
        assert!(f.appointments.create(req).await.is_ok());
    }

    #[tokio::test]
    async fn malformed_time_is_rejected() {
        let f = fixture().await;
        for raw in ["24:00", "7:30", "07:61", "07h30"] {
            let mut req = booking(f.service_id);
            req.appointment_time = Some(raw.into());
            let err = f.appointments.create_as_of(req, today()).await.unwrap_err();
            assert_eq!(fields(&err), vec!["appointment_time"], "time {raw}");
        }
    }

    #[tokio::test]
    async fn unknown_service_is_rejected() {
        let f = fixture().await;
        let err = f
            .appointments
            .create_as_of(booking(f.service_id + 100), today())
            .await
            .unwrap_err();
        assert_eq!(fields(&err), vec!["service_id"]);
    }

    #[tokio::test]
    async fn every_violation_is_reported_together() {
        let f = fixture().await;
        let req = CreateAppointmentRequest {
            name: None,
            email: Some("not-an-email".into()),
            phone: None,
            service_id: Some(999),
            appointment_date: Some("2000-01-01".into()),
            appointment_time: Some("25:00".into()),
            message: Some("x".repeat(1001)),
            ..Default::default()
        };
        let err = f.appointments.create_as_of(req, today()).await.unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "appointment_date",
                "appointment_time",
                "email",
                "message",
                "name",
                "phone",
                "service_id"
            ]
        );
    }

    #[tokio::test]
    async fn missing_required_fields_are_reported() {
        let f = fixture().await;
        let err = f
            .appointments
            .create_as_of(CreateAppointmentRequest::default(), today())
            .await
            .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "appointment_date",
                "appointment_time",
                "email",
                "name",
                "phone",
                "service_id"
            ]
        );
    }

    #[tokio::test]
    async fn blank_message_is_stored_as_none() {
        let f = fixture().await;
        let mut req = booking(f.service_id);
        req.message = Some("   ".into());
        let booked = f.appointments.create_as_of(req, today()).await.unwrap();
        assert_eq!(booked.message, None);
    }

    #[tokio::test]
    async fn status_can_move_between_any_states() {
        let f = fixture().await;
        let booked = f
            .appointments
            .create_as_of(booking(f.service_id), today())
            .await
            .unwrap();

        for next in ["completed", "pending", "cancelled", "confirmed", "cancelled", "completed"] {
            let updated = f
                .appointments
                .update_as_of(
                    booked.id,
                    UpdateAppointmentRequest {
                        status: Some(next.into()),
                        ..Default::default()
                    },
                    today(),
                )
                .await
                .unwrap();
            assert_eq!(updated.status.as_str(), next);
        }
    }

    #[tokio::test]
    async fn status_outside_the_set_is_rejected() {
        let f = fixture().await;
        let booked = f
            .appointments
            .create_as_of(booking(f.service_id), today())
            .await
            .unwrap();

        let err = f
            .appointments
            .update_as_of(
                booked.id,
                UpdateAppointmentRequest {
                    status: Some("no-show".into()),
                    ..Default::default()
                },
                today(),
            )
            .await
            .unwrap_err();
        assert_eq!(fields(&err), vec!["status"]);
        assert_eq!(
            f.appointments.read(booked.id).await.unwrap().status,
            AppointmentStatus::Pending
        );
    }

    #[tokio::test]
    async fn update_merges_and_validates_present_fields() {
        let f = fixture().await;
        let booked = f
            .appointments
            .create_as_of(booking(f.service_id), today())
            .await
            .unwrap();

        let updated = f
            .appointments
            .update_as_of(
                booked.id,
                UpdateAppointmentRequest {
                    appointment_time: Some("08:00".into()),
                    message: Some(None),
                    ..Default::default()
                },
                today(),
            )
            .await
            .unwrap();
        assert_eq!(
            updated.appointment_time,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(updated.message, None);
        assert_eq!(updated.name, booked.name);
        assert_eq!(updated.appointment_date, booked.appointment_date);

        let err = f
            .appointments
            .update_as_of(
                booked.id,
                UpdateAppointmentRequest {
                    appointment_date: Some("2030-06-01".into()),
                    service_id: Some(404),
                    ..Default::default()
                },
                today(),
            )
            .await
            .unwrap_err();
        assert_eq!(fields(&err), vec!["appointment_date", "service_id"]);
    }

    #[tokio::test]
    async fn blank_message_on_update_clears_it() {
        let f = fixture().await;
        let booked = f
            .appointments
            .create_as_of(booking(f.service_id), today())
            .await
            .unwrap();
        assert!(booked.message.is_some());

        let updated = f
            .appointments
            .update_as_of(
                booked.id,
                UpdateAppointmentRequest {
                    message: Some(Some("   ".into())),
                    ..Default::default()
                },
                today(),
            )
            .await
            .unwrap();
        assert_eq!(updated.message, None);
    }

    #[tokio::test]
    async fn mistyped_field_is_reported_with_the_rest() {
        let f = fixture().await;
        let mut req = CreateAppointmentRequest {
            appointment_date: Some("2000-01-01".into()),
            appointment_time: Some("99:99".into()),
            ..booking(f.service_id)
        };
        req.service_id = None;
        req.mistyped.add(
            "service_id",
            field_error("type", "The service id field must be an integer."),
        );

        let err = f.appointments.create_as_of(req, today()).await.unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["appointment_date", "appointment_time", "service_id"]
        );
        let service_errors = err.validation_errors().unwrap().field_errors()["service_id"].clone();
        assert_eq!(service_errors.len(), 1);
        assert_eq!(service_errors[0].code, "type");
    }

    #[tokio::test]
    async fn deleted_service_leaves_dangling_reference() {
        let f = fixture().await;
        let booked = f
            .appointments
            .create_as_of(booking(f.service_id), today())
            .await
            .unwrap();

        f.repos.services().delete(f.service_id).await.unwrap();

        let read = f.appointments.read(booked.id).await.unwrap();
        assert_eq!(read.service_id, f.service_id);
        assert!(read.service.is_none());
    }

    #[tokio::test]
    async fn missing_appointment_is_not_found() {
        let f = fixture().await;
        assert!(f.appointments.read(7).await.unwrap_err().is_not_found());
        assert!(f.appointments.delete(7).await.unwrap_err().is_not_found());
        assert!(f
            .appointments
            .update_as_of(7, UpdateAppointmentRequest::default(), today())
            .await
            .unwrap_err()
            .is_not_found());
    }
}
