//! Fitness event catalogue.
//!
//! Browsing, attending and sharing community events.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::types::{FitnessEvent, SocialError, Ticket};

/// Catalogue of upcoming fitness events.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<FitnessEvent>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

impl EventCatalog {
    /// Create a catalogue from an explicit event list.
    pub fn new(events: Vec<FitnessEvent>) -> Self {
        Self { events }
    }

    /// The events shipped with the app.
    pub fn built_in() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        Self::new(vec![
            FitnessEvent::new(1, "Yoga for Beginners", date(2024, 12, 25), "Central Park"),
            FitnessEvent::new(2, "HIIT Challenge", date(2024, 12, 28), "Downtown Gym"),
            FitnessEvent::new(3, "Cycling Marathon", date(2024, 12, 30), "Mountain Trails"),
        ])
    }

    /// All events in catalogue order.
    pub fn all(&self) -> &[FitnessEvent] {
        &self.events
    }

    /// Look up an event by id.
    pub fn get(&self, id: u32) -> Result<&FitnessEvent, SocialError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(SocialError::UnknownEvent(id))
    }

    /// Events on or after `today`, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&FitnessEvent> {
        let mut upcoming: Vec<_> = self.events.iter().filter(|e| e.date >= today).collect();
        upcoming.sort_by_key(|e| e.date);
        upcoming
    }

    /// Register attendance and issue a ticket.
    pub fn attend(&self, id: u32) -> Result<Ticket, SocialError> {
        let event = self.get(id)?;

        let ticket = Ticket {
            id: Uuid::new_v4(),
            event_id: event.id,
            issued_at: Utc::now(),
        };

        tracing::info!("Issued ticket {} for '{}'", ticket.id, event.name);
        Ok(ticket)
    }
}
