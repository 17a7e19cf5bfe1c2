//! Command dispatch for the workout tracker CLI.
//!
//! Each subcommand plays the part of one app screen: it loads what it needs
//! from storage, performs at most one mutation and prints the refreshed view.

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use muscle_hustle::social::{Contact, ContactBook, EventCatalog, Ticket};
use muscle_hustle::storage::config::{self, AppConfig, StorageBackend};
use muscle_hustle::storage::KeyValueStore;
use muscle_hustle::workouts::{
    parse_count, AchievementTracker, ProgressSummary, WorkoutRecord, WorkoutStore,
};

/// Storage key for the contacts visible to the share flow.
const CONTACTS_KEY: &str = "contacts";

#[derive(Parser)]
#[command(
    name = "muscle-hustle",
    version,
    about = "Track workouts, progress and fitness events"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend override (file, sqlite, memory)
    #[arg(long, global = true)]
    pub backend: Option<StorageBackend>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List logged workouts
    List,
    /// Log a new workout
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_count)]
        reps: u32,
        #[arg(long, value_parser = parse_count)]
        sets: u32,
    },
    /// Show one workout
    Show { index: usize },
    /// Edit a workout; omitted fields keep their current values
    Edit {
        index: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_count)]
        reps: Option<u32>,
        #[arg(long, value_parser = parse_count)]
        sets: Option<u32>,
    },
    /// Delete a workout
    Delete { index: usize },
    /// Mark a workout as finished and earn a point
    Finish { index: usize },
    /// Print the share text for a workout
    Share { index: usize },
    /// Show progress totals
    Progress,
    /// List fitness events
    Events {
        /// Only events from today onwards
        #[arg(long)]
        upcoming: bool,
    },
    /// Attend a fitness event
    Attend { event_id: u32 },
    /// Share a fitness event with a contact
    ShareEvent {
        event_id: u32,
        #[arg(long)]
        contact: String,
    },
    /// List contacts available for sharing
    Contacts,
    /// Add a contact for sharing
    ContactAdd {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Print the effective configuration
    Config,
}

/// Run one command against the configured storage.
pub async fn execute(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let storage = config
        .open_store()
        .await
        .with_context(|| format!("opening {} storage", config.storage.backend))?;
    let store = WorkoutStore::with_key(storage.clone(), config.storage.workouts_key.clone());

    match command {
        Command::List => {
            print_list(&store.load().await?);
        }
        Command::Add { name, reps, sets } => {
            let list = store.add(WorkoutRecord::new(name, reps, sets)).await?;
            print_list(&list);
        }
        Command::Show { index } => {
            let record = store.get(index).await?;
            println!("{}", record.share_message());
        }
        Command::Edit {
            index,
            name,
            reps,
            sets,
        } => {
            let current = store.get(index).await?;
            let edited = WorkoutRecord {
                workout_name: name.unwrap_or(current.workout_name),
                reps: reps.unwrap_or(current.reps),
                sets: sets.unwrap_or(current.sets),
            };
            let list = store.update_at(index, edited).await?;
            print_list(&list);
        }
        Command::Delete { index } => {
            let list = store.remove_at(index).await?;
            print_list(&list);
        }
        Command::Finish { index } => {
            let mut events = store.subscribe();
            let mut tracker = AchievementTracker::new();

            let list = store.finish_at(index).await?;
            while let Ok(event) = events.try_recv() {
                tracing::debug!("Workout {} at {}", event.kind(), event.index());
                if tracker.apply(&event) {
                    println!("+1 Point!");
                }
            }
            println!("Total Points Earned: {}", tracker.points());
            print_list(&list);
        }
        Command::Share { index } => {
            println!("{}", store.get(index).await?.share_message());
        }
        Command::Progress => {
            let summary = ProgressSummary::from_records(&store.load().await?);
            println!("Workouts: {}", summary.workouts);
            println!("Total reps: {}", summary.total_reps);
            println!("Total sets: {}", summary.total_sets);
            println!("Total volume: {}", summary.total_volume);
        }
        Command::Events { upcoming } => {
            let catalog = EventCatalog::built_in();
            let events: Vec<_> = if upcoming {
                catalog.upcoming(Local::now().date_naive())
            } else {
                catalog.all().iter().collect()
            };

            if events.is_empty() {
                println!("No upcoming fitness events");
            }
            for event in events {
                println!(
                    "[{}] {} - {} @ {}",
                    event.id,
                    event.name,
                    event.date.format("%Y-%m-%d"),
                    event.location
                );
            }
        }
        Command::Attend { event_id } => {
            let ticket = EventCatalog::built_in().attend(event_id)?;
            println!("Ticket Sent: {}", Ticket::CONFIRMATION);
            println!("Ticket id: {}", ticket.id);
        }
        Command::ShareEvent { event_id, contact } => {
            let catalog = EventCatalog::built_in();
            let event = catalog.get(event_id)?;
            let book = ContactBook::granted(load_contacts(storage.as_ref()).await?);

            let receipt = book.share_event(&contact, event)?;
            println!("{}", receipt.message);
            println!("{}", receipt.confirmation);
        }
        Command::Contacts => {
            let contacts = load_contacts(storage.as_ref()).await?;
            if contacts.is_empty() {
                println!("No contacts found.");
            }
            for contact in contacts {
                println!("{} {}", contact.name, contact.phone_numbers.join(", "));
            }
        }
        Command::ContactAdd { name, phone } => {
            let mut contacts = load_contacts(storage.as_ref()).await?;
            let mut contact = Contact::new(format!("contact-{}", contacts.len() + 1), name);
            if let Some(phone) = phone {
                contact = contact.with_phone(phone);
            }
            contacts.push(contact);
            save_contacts(storage.as_ref(), &contacts).await?;
            println!("{} contacts", contacts.len());
        }
        Command::Config => {
            println!("# {}", config::config_path_in(&config.data_dir).display());
            print!("{}", toml::to_string_pretty(config)?);
        }
    }

    Ok(())
}

fn print_list(list: &[WorkoutRecord]) {
    if list.is_empty() {
        println!("No added progress");
        return;
    }
    for (index, record) in list.iter().enumerate() {
        println!("{index}: {record}");
    }
}

async fn load_contacts(storage: &dyn KeyValueStore) -> anyhow::Result<Vec<Contact>> {
    match storage.get(CONTACTS_KEY).await? {
        Some(raw) => serde_json::from_str(&raw).context("parsing stored contacts"),
        None => Ok(Vec::new()),
    }
}

async fn save_contacts(storage: &dyn KeyValueStore, contacts: &[Contact]) -> anyhow::Result<()> {
    storage
        .set(CONTACTS_KEY, &serde_json::to_string(contacts)?)
        .await?;
    Ok(())
}
