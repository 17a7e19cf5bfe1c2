//! Social features module
//!
//! Provides the fitness event catalogue, contact sharing, and the location label.

pub mod contacts;
pub mod events;
pub mod location;
pub mod types;

// Re-export commonly used types
pub use contacts::ContactBook;
pub use events::EventCatalog;
pub use location::{Address, LocationStatus};
pub use types::*;
