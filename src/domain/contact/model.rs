//! Contact domain entity

use chrono::{DateTime, Utc};

/// Triage status of a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [Self::New, Self::Read, Self::Replied];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "replied" => Some(Self::Replied),
            _ => None,
        }
    }

    /// Staff may set any status at any time, including back to `new`.
    pub fn can_transition_to(&self, _next: ContactStatus) -> bool {
        true
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message received through the contact form
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn transition_to(&mut self, next: ContactStatus) -> bool {
        if !self.status.can_transition_to(next) {
            return false;
        }
        self.status = next;
        true
    }
}

/// Validated submission; status always starts as `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip_and_rejects_unknown() {
        for status in ContactStatus::ALL {
            assert_eq!(ContactStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ContactStatus::parse("archived"), None);
    }

    #[test]
    fn any_status_can_follow_any_other() {
        let mut contact = Contact {
            id: 1,
            name: "João".into(),
            email: "joao@example.com".into(),
            phone: None,
            subject: "Horários".into(),
            message: "Vocês abrem aos sábados?".into(),
            status: ContactStatus::Replied,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(contact.transition_to(ContactStatus::New));
        assert_eq!(contact.status, ContactStatus::New);
        assert!(contact.transition_to(ContactStatus::Read));
        assert_eq!(contact.status.to_string(), "read");
    }
}
