//! Calendar grid generation
//!
//! Builds the Sunday-anchored day cells for month, week and day views and
//! associates events with each day by canonical ISO date string.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::{DayCell, Event, EventType, ViewMode, ISO_DATE_FORMAT};

/// Cells in a month grid (6 rows x 7 columns)
pub const MONTH_GRID_CELLS: usize = 42;

/// Cells in a week grid
pub const WEEK_GRID_CELLS: usize = 7;

/// Default number of entries returned by [`upcoming_events`]
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Format a date in canonical `yyyy-mm-dd` form
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// The Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// First cell of the month grid: the Sunday on or before the 1st
pub fn month_grid_start(reference: NaiveDate) -> NaiveDate {
    week_start(first_of_month(reference))
}

/// Events whose date equals `date` (string comparison on the ISO form).
/// Input order is preserved.
pub fn events_for_date(date: NaiveDate, events: &[Event]) -> Vec<Event> {
    let key = format_iso(date);
    events.iter().filter(|e| e.date == key).cloned().collect()
}

/// Events on or after `today`, excluding holidays, ordered by `(date, time)`
/// and truncated to `limit`.
pub fn upcoming_events(events: &[Event], today: NaiveDate, limit: usize) -> Vec<Event> {
    let today_key = format_iso(today);

    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| e.event_type != EventType::Holiday && e.date.as_str() >= today_key.as_str())
        .cloned()
        .collect();

    // Zero-padded ISO strings sort chronologically; sort_by is stable
    upcoming.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
    upcoming.truncate(limit);
    upcoming
}

/// Builds day cells for the calendar views relative to an injected "today"
#[derive(Debug, Clone, Copy)]
pub struct CalendarGridBuilder {
    today: NaiveDate,
}

impl CalendarGridBuilder {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Build the cells for `mode` around `reference`
    pub fn build(&self, mode: ViewMode, reference: NaiveDate, events: &[Event]) -> Vec<DayCell> {
        match mode {
            ViewMode::Month => self.build_month_grid(reference, events),
            ViewMode::Week => self.build_week_grid(reference, events),
            ViewMode::Day => vec![self.build_day_cell(reference, events)],
        }
    }

    /// 42 consecutive days starting on the Sunday on/before the 1st of the
    /// reference month. Days outside the month are kept with
    /// `is_current_month = false`.
    pub fn build_month_grid(&self, reference: NaiveDate, events: &[Event]) -> Vec<DayCell> {
        self.build_window(
            month_grid_start(reference),
            MONTH_GRID_CELLS,
            reference,
            events,
        )
    }

    /// 7 consecutive days starting on the Sunday on/before `reference`
    pub fn build_week_grid(&self, reference: NaiveDate, events: &[Event]) -> Vec<DayCell> {
        self.build_window(week_start(reference), WEEK_GRID_CELLS, reference, events)
    }

    /// Single cell for the day view
    pub fn build_day_cell(&self, date: NaiveDate, events: &[Event]) -> DayCell {
        self.make_cell(date, date, events_for_date(date, events))
    }

    fn build_window(
        &self,
        start: NaiveDate,
        len: usize,
        reference: NaiveDate,
        events: &[Event],
    ) -> Vec<DayCell> {
        // Bucket once per window instead of scanning the list per cell
        let mut by_date: HashMap<&str, Vec<&Event>> = HashMap::new();
        for event in events {
            by_date.entry(event.date.as_str()).or_default().push(event);
        }

        start
            .iter_days()
            .take(len)
            .map(|date| {
                let day_events = by_date
                    .get(format_iso(date).as_str())
                    .map(|bucket| bucket.iter().map(|&e| e.clone()).collect())
                    .unwrap_or_default();
                self.make_cell(date, reference, day_events)
            })
            .collect()
    }

    fn make_cell(&self, date: NaiveDate, reference: NaiveDate, events: Vec<Event>) -> DayCell {
        DayCell {
            date,
            is_current_month: date.year() == reference.year() && date.month() == reference.month(),
            is_today: date == self.today,
            is_sunday: date.weekday().num_days_from_sunday() == 0,
            is_holiday: events.iter().any(Event::is_holiday),
            events,
        }
    }
}
