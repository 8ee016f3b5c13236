//! Calendar services: grid building, navigation, persistence and configuration

pub mod calendar;
pub mod config;
pub mod event_store;
pub mod logging;
pub mod navigation;
pub mod sample;

pub use calendar::{events_for_date, format_iso, upcoming_events, CalendarGridBuilder};
pub use config::{Config, ThemeSetting};
pub use event_store::EventStore;
pub use navigation::{view_title, CalendarCursor};
