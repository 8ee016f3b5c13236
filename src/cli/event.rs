//! `bakecal add` / `bakecal delete` subcommands

use clap::Args;

use crate::services::EventStore;
use crate::types::{EventType, NewEvent, Result};

use super::print::event_line;

/// Add an event to the calendar
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Event title
    #[arg(long)]
    pub title: String,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Time of day (HH:MM)
    #[arg(long)]
    pub time: String,

    /// Event type: order, catering, training, holiday or reminder
    #[arg(long = "type", value_name = "TYPE")]
    pub event_type: EventType,

    /// Optional notes
    #[arg(long)]
    pub description: Option<String>,
}

impl AddArgs {
    pub fn into_new_event(self) -> NewEvent {
        NewEvent {
            title: self.title,
            date: self.date,
            time: self.time,
            event_type: self.event_type,
            description: self.description,
        }
    }

    pub fn run(self, store: &EventStore) -> Result<()> {
        let event = store.add(self.into_new_event())?;
        println!("Added {} {}", event.date, event_line(&event));
        Ok(())
    }
}

/// Delete an event by id
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Event ID (shown in parentheses by `month`, `week`, `day` and `upcoming`)
    #[arg(value_name = "ID")]
    pub id: String,
}

impl DeleteArgs {
    pub fn run(self, store: &EventStore) -> Result<()> {
        let removed = store.delete(&self.id)?;
        println!("Deleted {} {}", removed.date, event_line(&removed));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BakecalError;
    use tempfile::TempDir;

    fn make_store() -> (TempDir, EventStore) {
        let tmp = TempDir::new().unwrap();
        let store = EventStore::new(tmp.path().join("events.json"));
        (tmp, store)
    }

    fn add_args(date: &str) -> AddArgs {
        AddArgs {
            title: "Rye loaves".to_string(),
            date: date.to_string(),
            time: "07:00".to_string(),
            event_type: EventType::Order,
            description: None,
        }
    }

    #[test]
    fn test_add_persists() {
        let (_tmp, store) = make_store();
        add_args("2025-06-15").run(&store).unwrap();
        let events = store.load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Rye loaves");
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let (_tmp, store) = make_store();
        let result = add_args("06/15/2025").run(&store);
        assert!(matches!(result, Err(BakecalError::Validation(_))));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes() {
        let (_tmp, store) = make_store();
        add_args("2025-06-15").run(&store).unwrap();
        let id = store.load().unwrap()[0].id.clone();

        DeleteArgs { id }.run(&store).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown() {
        let (_tmp, store) = make_store();
        let result = DeleteArgs {
            id: "missing".to_string(),
        }
        .run(&store);
        assert!(matches!(result, Err(BakecalError::NotFound(_))));
    }
}
