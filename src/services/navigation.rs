//! Reference-date navigation (prev / next / today) and view titles

use chrono::{Datelike, Duration, Months, NaiveDate};

use super::calendar::week_start;
use crate::types::ViewMode;

/// Move `reference` by `steps` units of the given view mode.
/// Month steps clamp the day to the target month's length (Jan 31 -> Feb 28/29).
pub fn shift(mode: ViewMode, reference: NaiveDate, steps: i32) -> NaiveDate {
    match mode {
        ViewMode::Month => {
            let months = Months::new(steps.unsigned_abs());
            let moved = if steps >= 0 {
                reference.checked_add_months(months)
            } else {
                reference.checked_sub_months(months)
            };
            // Only None at the edges of chrono's representable range
            moved.unwrap_or(reference)
        }
        ViewMode::Week => reference
            .checked_add_signed(Duration::weeks(steps as i64))
            .unwrap_or(reference),
        ViewMode::Day => reference
            .checked_add_signed(Duration::days(steps as i64))
            .unwrap_or(reference),
    }
}

/// Human-readable heading for the window shown by `mode` around `reference`
pub fn view_title(mode: ViewMode, reference: NaiveDate) -> String {
    match mode {
        ViewMode::Month => reference.format("%B %Y").to_string(),
        ViewMode::Week => {
            let start = week_start(reference);
            let end = start + Duration::days(6);
            if start.year() == end.year() {
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            } else {
                format!(
                    "{} - {}",
                    start.format("%b %-d, %Y"),
                    end.format("%b %-d, %Y")
                )
            }
        }
        ViewMode::Day => reference.format("%A, %B %-d, %Y").to_string(),
    }
}

/// The (view mode, reference date) pair driven by the navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub view_mode: ViewMode,
    pub reference: NaiveDate,
}

impl CalendarCursor {
    pub fn new(view_mode: ViewMode, reference: NaiveDate) -> Self {
        Self {
            view_mode,
            reference,
        }
    }

    pub fn prev(&mut self) {
        self.reference = shift(self.view_mode, self.reference, -1);
    }

    pub fn next(&mut self) {
        self.reference = shift(self.view_mode, self.reference, 1);
    }

    /// Jump back to the given "today"
    pub fn go_to(&mut self, date: NaiveDate) {
        self.reference = date;
    }

    /// Switch view mode, keeping the reference date
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn title(&self) -> String {
        view_title(self.view_mode, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift(ViewMode::Month, date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift(ViewMode::Month, date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift(ViewMode::Month, date(2025, 3, 31), -1), date(2025, 2, 28));
    }

    #[test]
    fn test_shift_month_across_years() {
        assert_eq!(shift(ViewMode::Month, date(2025, 12, 15), 1), date(2026, 1, 15));
        assert_eq!(shift(ViewMode::Month, date(2025, 1, 15), -1), date(2024, 12, 15));
        assert_eq!(shift(ViewMode::Month, date(2025, 6, 1), 0), date(2025, 6, 1));
    }

    #[test]
    fn test_shift_week_and_day() {
        assert_eq!(shift(ViewMode::Week, date(2025, 6, 11), 1), date(2025, 6, 18));
        assert_eq!(shift(ViewMode::Week, date(2025, 6, 11), -1), date(2025, 6, 4));
        assert_eq!(shift(ViewMode::Day, date(2024, 2, 28), 1), date(2024, 2, 29));
        assert_eq!(shift(ViewMode::Day, date(2025, 1, 1), -1), date(2024, 12, 31));
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(view_title(ViewMode::Month, date(2025, 6, 18)), "June 2025");
        assert_eq!(
            view_title(ViewMode::Week, date(2025, 6, 4)),
            "Jun 1 - Jun 7, 2025"
        );
        assert_eq!(
            view_title(ViewMode::Day, date(2025, 6, 1)),
            "Sunday, June 1, 2025"
        );
    }

    #[test]
    fn test_week_title_across_years() {
        assert_eq!(
            view_title(ViewMode::Week, date(2025, 12, 31)),
            "Dec 28, 2025 - Jan 3, 2026"
        );
    }

    #[test]
    fn test_cursor_navigation() {
        let mut cursor = CalendarCursor::new(ViewMode::Month, date(2025, 6, 18));
        cursor.next();
        assert_eq!(cursor.reference, date(2025, 7, 18));
        cursor.set_view_mode(ViewMode::Week);
        assert_eq!(cursor.reference, date(2025, 7, 18));
        cursor.prev();
        assert_eq!(cursor.reference, date(2025, 7, 11));
        cursor.set_view_mode(ViewMode::Day);
        cursor.next();
        assert_eq!(cursor.reference, date(2025, 7, 12));
        cursor.go_to(date(2025, 6, 1));
        assert_eq!(cursor.reference, date(2025, 6, 1));
        assert_eq!(cursor.title(), "Sunday, June 1, 2025");
    }
}
