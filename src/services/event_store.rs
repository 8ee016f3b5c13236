//! Events file service
//!
//! Owns the persistent event collection in `~/.bakecal/events.json`.
//! The grid builder never touches this; callers load a snapshot and pass it in.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::BaseDirs;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::sample::sample_events;
use crate::types::{parse_iso_date, parse_time, BakecalError, Event, NewEvent, Result};

/// Current on-disk format version
const FILE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct EventsFile {
    version: u32,
    updated_at: i64,
    events: Vec<Event>,
}

/// Service for loading and mutating the events file
pub struct EventStore {
    path: PathBuf,
}

/// Held advisory lock on the sidecar file; released on drop
struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

impl EventStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default events file location (`~/.bakecal/events.json`)
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| BakecalError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(".bakecal").join("events.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar lock file. The events file itself is replaced by rename on
    /// every save, so locks are taken on this stable inode instead.
    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    fn lock(&self, exclusive: bool) -> Result<StoreLock> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path())?;

        let locked = if exclusive {
            file.lock_exclusive()
        } else {
            file.lock_shared()
        };
        locked.map_err(|e| BakecalError::Store(format!("Failed to acquire lock: {}", e)))?;
        Ok(StoreLock { file })
    }

    /// Load all events. A missing file is an empty calendar.
    /// Holds a shared lock while reading.
    pub fn load(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "events file missing, starting empty");
            return Ok(Vec::new());
        }

        let _lock = self.lock(false)?;
        self.read_events()
    }

    fn read_events(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut content = String::new();
        File::open(&self.path)?.read_to_string(&mut content)?;

        let parsed: EventsFile = serde_json::from_str(&content).map_err(|e| {
            BakecalError::Store(format!(
                "Corrupted events file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if parsed.version != FILE_VERSION {
            return Err(BakecalError::Store(format!(
                "Unsupported events file version {} (expected {})",
                parsed.version, FILE_VERSION
            )));
        }

        // Grid matching and upcoming ordering compare date/time strings
        for event in &parsed.events {
            check_canonical(event)?;
        }

        debug!(count = parsed.events.len(), "loaded events");
        Ok(parsed.events)
    }

    /// Replace the whole collection. Holds the exclusive lock for the write.
    pub fn save(&self, events: &[Event]) -> Result<()> {
        let _lock = self.lock(true)?;
        self.write_events(events)
    }

    /// Atomic write: per-writer temp file in the same directory, then rename.
    fn write_events(&self, events: &[Event]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let document = EventsFile {
            version: FILE_VERSION,
            updated_at: chrono::Utc::now().timestamp(),
            events: events.to_vec(),
        };

        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| BakecalError::Store(format!("Serialization failed: {}", e)))?;

        let mut temp = NamedTempFile::new_in(&parent)
            .map_err(|e| BakecalError::Store(format!("Failed to create temp file: {}", e)))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| BakecalError::Store(format!("Failed to write temp file: {}", e)))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| BakecalError::Store(format!("Failed to sync temp file: {}", e)))?;
        temp.persist(&self.path)
            .map_err(|e| BakecalError::Store(format!("Failed to replace events file: {}", e)))?;

        debug!(count = events.len(), path = %self.path.display(), "saved events");
        Ok(())
    }

    /// Validate and append a new event. Nothing is written when validation fails.
    pub fn add(&self, input: NewEvent) -> Result<Event> {
        let event = input.validate()?;

        let _lock = self.lock(true)?;
        let mut events = self.read_events()?;
        events.push(event.clone());
        self.write_events(&events)?;

        info!(id = %event.id, date = %event.date, "added event");
        Ok(event)
    }

    /// Remove the event with `id`, returning it
    pub fn delete(&self, id: &str) -> Result<Event> {
        let _lock = self.lock(true)?;
        let mut events = self.read_events()?;
        let idx = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BakecalError::NotFound(id.to_string()))?;
        let removed = events.remove(idx);
        self.write_events(&events)?;

        info!(id = %removed.id, "deleted event");
        Ok(removed)
    }

    /// Replace the collection with the sample bakery events around `today`
    pub fn seed(&self, today: NaiveDate) -> Result<Vec<Event>> {
        let events = sample_events(today);
        self.save(&events)?;
        info!(count = events.len(), "seeded sample events");
        Ok(events)
    }
}

fn check_canonical(event: &Event) -> Result<()> {
    parse_iso_date(&event.date)
        .and_then(|_| parse_time(&event.time))
        .map(|_| ())
        .map_err(|e| BakecalError::Store(format!("event '{}': {}", event.id, e)))
}
