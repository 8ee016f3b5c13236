//! Calendar event types

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BakecalError, Result};

/// Canonical ISO date format (`yyyy-mm-dd`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical time-of-day format (`HH:mm`)
pub const TIME_FORMAT: &str = "%H:%M";

/// Kind of calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Order,
    Catering,
    Training,
    Holiday,
    Reminder,
}

impl EventType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Catering => "Catering",
            Self::Training => "Training",
            Self::Holiday => "Holiday",
            Self::Reminder => "Reminder",
        }
    }

    /// All event types in display order
    pub fn all() -> &'static [EventType] {
        &[
            EventType::Order,
            EventType::Catering,
            EventType::Training,
            EventType::Holiday,
            EventType::Reminder,
        ]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventType {
    type Err = BakecalError;

    fn from_str(s: &str) -> Result<Self> {
        EventType::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                BakecalError::Validation(format!(
                    "unknown event type '{}' (expected order, catering, training, holiday or reminder)",
                    s
                ))
            })
    }
}

/// A calendar entry. `date` and `time` are kept in canonical string form so
/// that lexicographic comparison matches chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO date (`yyyy-mm-dd`)
    pub date: String,
    /// Time of day (`HH:mm`)
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    pub fn is_holiday(&self) -> bool {
        self.event_type == EventType::Holiday
    }

    /// Parsed calendar date, if the stored string is well-formed
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, ISO_DATE_FORMAT).ok()
    }
}

/// Unvalidated add-event form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewEvent {
    /// Validate the form and turn it into an [`Event`] with a fresh id.
    /// Rejects anything whose date or time is not in canonical form.
    pub fn validate(self) -> Result<Event> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BakecalError::Validation("title is required".into()));
        }

        let date = parse_iso_date(&self.date)?;
        let time = parse_time(&self.time)?;

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date: date.format(ISO_DATE_FORMAT).to_string(),
            time: time.format(TIME_FORMAT).to_string(),
            event_type: self.event_type,
            description,
        })
    }
}

/// Parse a canonical `yyyy-mm-dd` date. Non-padded forms such as `2025-6-1`
/// are rejected because they would break string ordering.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
        .map_err(|e| BakecalError::Validation(format!("date '{}' is not yyyy-mm-dd: {}", s, e)))?;
    if date.format(ISO_DATE_FORMAT).to_string() != s {
        return Err(BakecalError::Validation(format!(
            "date '{}' is not in canonical yyyy-mm-dd form",
            s
        )));
    }
    Ok(date)
}

/// Parse a canonical `HH:mm` time of day
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let time = NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|e| BakecalError::Validation(format!("time '{}' is not HH:mm: {}", s, e)))?;
    if time.format(TIME_FORMAT).to_string() != s {
        return Err(BakecalError::Validation(format!(
            "time '{}' is not in canonical HH:mm form",
            s
        )));
    }
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(date: &str, time: &str) -> NewEvent {
        NewEvent {
            title: "Wedding cake pickup".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            event_type: EventType::Order,
            description: None,
        }
    }

    #[test]
    fn test_event_type_from_str() {
        assert_eq!("order".parse::<EventType>().unwrap(), EventType::Order);
        assert_eq!("Holiday".parse::<EventType>().unwrap(), EventType::Holiday);
        assert_eq!(" CATERING ".parse::<EventType>().unwrap(), EventType::Catering);
        assert!("meeting".parse::<EventType>().is_err());
    }

    #[test]
    fn test_event_json_shape() {
        let event = Event {
            id: "e1".to_string(),
            title: "Staff training".to_string(),
            date: "2025-06-03".to_string(),
            time: "14:00".to_string(),
            event_type: EventType::Training,
            description: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "training");
        assert_eq!(json["date"], "2025-06-03");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_event_deserialize_without_description() {
        let json = r#"{"id":"h1","title":"Closed","date":"2025-12-25","time":"00:00","type":"holiday"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.is_holiday());
        assert_eq!(event.description, None);
        assert_eq!(event.naive_date(), NaiveDate::from_ymd_opt(2025, 12, 25));
    }

    #[test]
    fn test_validate_accepts_canonical_input() {
        let mut input = form("2025-06-15", "09:30");
        input.title = "  Wedding cake pickup  ".to_string();
        input.description = Some("   ".to_string());

        let event = input.validate().unwrap();
        assert_eq!(event.title, "Wedding cake pickup");
        assert_eq!(event.date, "2025-06-15");
        assert_eq!(event.time, "09:30");
        assert_eq!(event.description, None);
        assert!(!event.id.is_empty());
    }

    #[test]
    fn test_validate_assigns_distinct_ids() {
        let a = form("2025-06-15", "09:30").validate().unwrap();
        let b = form("2025-06-15", "09:30").validate().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut input = form("2025-06-15", "09:30");
        input.title = "   ".to_string();
        assert!(matches!(input.validate(), Err(BakecalError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_malformed_dates() {
        for bad in ["2025-02-30", "2025-6-1", "15/06/2025", "", "2025-13-01"] {
            let result = form(bad, "09:00").validate();
            assert!(
                matches!(result, Err(BakecalError::Validation(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_validate_accepts_leap_day() {
        assert!(form("2024-02-29", "09:00").validate().is_ok());
        assert!(form("2025-02-29", "09:00").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_times() {
        for bad in ["9:00", "24:00", "09:60", "noon", "09:00:00"] {
            let result = form("2025-06-15", bad).validate();
            assert!(
                matches!(result, Err(BakecalError::Validation(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }
}
