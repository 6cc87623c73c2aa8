//! Appointment domain entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::Service;

/// Appointment status
///
/// Staff move appointments freely between states; there is no workflow
/// ordering between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppointmentStatus {
    /// Booked through the public form, awaiting confirmation
    #[default]
    Pending,
    /// Confirmed by clinic staff
    Confirmed,
    /// Cancelled by the patient or the clinic
    Cancelled,
    /// The visit took place
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Strict parse; unknown values are rejected rather than defaulted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Every status is reachable from every other one.
    pub fn can_transition_to(&self, _next: AppointmentStatus) -> bool {
        true
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booked appointment
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    /// Related service, attached on every read. `None` when the service
    /// row has been deleted since booking.
    pub service: Option<Service>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Move to `next` if the lifecycle allows it. Returns `false` otherwise
    /// and leaves the status untouched.
    pub fn transition_to(&mut self, next: AppointmentStatus) -> bool {
        if !self.status.can_transition_to(next) {
            return false;
        }
        self.status = next;
        true
    }

    /// `HH:MM` as submitted by the booking form.
    pub fn time_label(&self) -> String {
        self.appointment_time.format("%H:%M").to_string()
    }
}

/// Validated booking ready to be inserted. Status always starts as pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub message: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────
