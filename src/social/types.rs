//! Core types for social features.
//!
//! Defines fitness events, contacts, and the errors shared by the social module.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A community fitness event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessEvent {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
}

impl FitnessEvent {
    pub fn new(id: u32, name: &str, date: NaiveDate, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            date,
            location: location.to_string(),
        }
    }

    /// Plain-text body used when sharing the event.
    pub fn share_message(&self) -> String {
        format!(
            "{}\nDate: {}\nLocation: {}",
            self.name,
            self.date.format("%Y-%m-%d"),
            self.location
        )
    }
}

/// Confirmation issued when the user attends an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: u32,
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Message shown once the ticket is issued.
    pub const CONFIRMATION: &'static str = "Ticket is sent to your mail.";
}

/// An address-book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_numbers: Vec::new(),
        }
    }

    pub fn with_phone(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(number.into());
        self
    }
}

/// Outcome of sharing something with a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareReceipt {
    pub contact_id: String,
    pub message: String,
    pub confirmation: String,
}

/// Social feature errors.
#[derive(Debug, thiserror::Error)]
pub enum SocialError {
    #[error("Unknown event: {0}")]
    UnknownEvent(u32),

    #[error("Unknown contact: {0}")]
    UnknownContact(String),

    #[error("Contacts permission denied")]
    PermissionDenied,
}
