//! Derived calendar view types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BakecalError, Event};

/// Calendar view mode. Determines grid shape only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
        }
    }

    /// Get all view modes in order
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Month, ViewMode::Week, ViewMode::Day]
    }

    /// Get the next view mode (wrapping)
    pub fn next(self) -> Self {
        match self {
            Self::Month => Self::Week,
            Self::Week => Self::Day,
            Self::Day => Self::Month,
        }
    }

    /// Get the previous view mode (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Self::Month => Self::Day,
            Self::Week => Self::Month,
            Self::Day => Self::Week,
        }
    }

    /// Number of cells a grid of this mode contains
    pub fn cell_count(self) -> usize {
        match self {
            Self::Month => 42,
            Self::Week => 7,
            Self::Day => 1,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = BakecalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::all()
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BakecalError::Config(format!("unknown view mode '{}'", s)))
    }
}

/// One rendered day of the calendar, annotated with membership flags and the
/// events that fall on it. Recomputed on every navigation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_sunday: bool,
    pub is_holiday: bool,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_cycle() {
        assert_eq!(ViewMode::Month.next(), ViewMode::Week);
        assert_eq!(ViewMode::Week.next(), ViewMode::Day);
        assert_eq!(ViewMode::Day.next(), ViewMode::Month);
        assert_eq!(ViewMode::Month.prev(), ViewMode::Day);
        assert_eq!(ViewMode::Day.prev(), ViewMode::Week);
    }

    #[test]
    fn test_view_mode_cell_count() {
        assert_eq!(ViewMode::Month.cell_count(), 42);
        assert_eq!(ViewMode::Week.cell_count(), 7);
        assert_eq!(ViewMode::Day.cell_count(), 1);
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("week".parse::<ViewMode>().unwrap(), ViewMode::Week);
        assert_eq!("MONTH".parse::<ViewMode>().unwrap(), ViewMode::Month);
        assert!("year".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_day_cell_serializes_camel_case() {
        let cell = DayCell {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            is_current_month: true,
            is_today: false,
            is_sunday: true,
            is_holiday: false,
            events: Vec::new(),
        };
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["date"], "2025-06-01");
        assert_eq!(json["isCurrentMonth"], true);
        assert_eq!(json["isSunday"], true);
    }
}
