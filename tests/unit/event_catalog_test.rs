//! Unit tests for fitness events and sharing.

use chrono::NaiveDate;
use muscle_hustle::social::{Contact, ContactBook, EventCatalog, SocialError};

#[test]
fn test_upcoming_before_season() {
    let catalog = EventCatalog::built_in();
    let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();

    let upcoming = catalog.upcoming(today);
    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[0].name, "Yoga for Beginners");
}

#[test]
fn test_upcoming_includes_today() {
    let catalog = EventCatalog::built_in();
    let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();

    let names: Vec<_> = catalog.upcoming(today).iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["HIIT Challenge", "Cycling Marathon"]);
}

#[test]
fn test_event_share_message() {
    let catalog = EventCatalog::built_in();
    let event = catalog.get(3).unwrap();

    assert_eq!(
        event.share_message(),
        "Cycling Marathon\nDate: 2024-12-30\nLocation: Mountain Trails"
    );
}

#[test]
fn test_share_with_unknown_contact() {
    let catalog = EventCatalog::built_in();
    let book = ContactBook::granted(vec![Contact::new("1", "Jordan")]);

    let err = book.share_event("Riley", catalog.get(1).unwrap()).unwrap_err();
    assert!(matches!(err, SocialError::UnknownContact(name) if name == "Riley"));
}

#[test]
fn test_tickets_are_unique() {
    let catalog = EventCatalog::built_in();
    let first = catalog.attend(2).unwrap();
    let second = catalog.attend(2).unwrap();
    assert_ne!(first.id, second.id);
}
