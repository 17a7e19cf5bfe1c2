//! Contact selection and sharing.

use super::types::{Contact, FitnessEvent, ShareReceipt, SocialError};
use crate::workouts::WorkoutRecord;

/// Contacts available for sharing.
///
/// The address book itself is a platform service; this holds the entries it
/// returned once access was granted.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    granted: bool,
}

impl ContactBook {
    /// Book filled from a granted address-book query.
    pub fn granted(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            granted: true,
        }
    }

    /// Book for a user who declined access.
    pub fn denied() -> Self {
        Self::default()
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// All contacts, in address-book order.
    pub fn contacts(&self) -> Result<&[Contact], SocialError> {
        if !self.granted {
            return Err(SocialError::PermissionDenied);
        }
        Ok(&self.contacts)
    }

    /// Find a contact by name, ignoring case.
    pub fn find(&self, name: &str) -> Result<&Contact, SocialError> {
        self.contacts()?
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SocialError::UnknownContact(name.to_string()))
    }

    /// Share an event with the named contact.
    pub fn share_event(
        &self,
        name: &str,
        event: &FitnessEvent,
    ) -> Result<ShareReceipt, SocialError> {
        let contact = self.find(name)?;
        tracing::info!("Sharing event {} with contact {}", event.id, contact.id);

        Ok(ShareReceipt {
            contact_id: contact.id.clone(),
            message: event.share_message(),
            confirmation: format!("Event shared with {}", contact.name),
        })
    }

    /// Share a workout with the named contact.
    pub fn share_workout(
        &self,
        name: &str,
        record: &WorkoutRecord,
    ) -> Result<ShareReceipt, SocialError> {
        let contact = self.find(name)?;
        tracing::info!("Sharing workout with contact {}", contact.id);

        Ok(ShareReceipt {
            contact_id: contact.id.clone(),
            message: record.share_message(),
            confirmation: format!("Workout shared with {}", contact.name),
        })
    }
}
