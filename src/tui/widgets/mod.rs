//! TUI widgets

pub mod day;
pub mod help;
pub mod month;
pub mod tabs;
pub mod upcoming;
pub mod week;

use ratatui::style::{Modifier, Style};

use crate::tui::theme::Theme;
use crate::types::{DayCell, Event};

/// Shorten `text` to at most `width` characters, ending with `…` when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// The cell's events ordered by time of day; ties keep input order
pub fn events_by_time(cell: &DayCell) -> Vec<&Event> {
    let mut events: Vec<&Event> = cell.events.iter().collect();
    events.sort_by(|a, b| a.time.cmp(&b.time));
    events
}

/// Style for a day label: muted outside the month, holiday/Sunday colors,
/// reversed accent for today
pub fn day_style(cell: &DayCell, theme: Theme) -> Style {
    let base = if !cell.is_current_month {
        Style::default().fg(theme.muted())
    } else if cell.is_holiday {
        Style::default().fg(theme.holiday())
    } else if cell.is_sunday {
        Style::default().fg(theme.error())
    } else {
        Style::default().fg(theme.text())
    };

    if cell.is_today {
        base.fg(theme.accent())
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cell() -> DayCell {
        DayCell {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            is_current_month: true,
            is_today: false,
            is_sunday: false,
            is_holiday: false,
            events: Vec::new(),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Croissants", 20), "Croissants");
        assert_eq!(truncate("Croissants", 10), "Croissants");
        assert_eq!(truncate("Croissants", 6), "Crois…");
        assert_eq!(truncate("Croissants", 0), "");
        assert_eq!(truncate("Crème brûlée", 4), "Crè…");
    }

    fn event(id: &str, time: &str) -> Event {
        Event {
            id: id.to_string(),
            title: id.to_string(),
            date: "2025-06-02".to_string(),
            time: time.to_string(),
            event_type: crate::types::EventType::Order,
            description: None,
        }
    }

    #[test]
    fn test_events_by_time() {
        let mut c = cell();
        c.events = vec![event("late", "15:00"), event("early", "07:00"), event("tie", "15:00")];
        let ids: Vec<&str> = events_by_time(&c).into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "tie"]);
    }

    #[test]
    fn test_day_style_priority() {
        let t = Theme::Dark;
        let mut c = cell();
        assert_eq!(day_style(&c, t).fg, Some(t.text()));

        c.is_sunday = true;
        assert_eq!(day_style(&c, t).fg, Some(t.error()));

        c.is_holiday = true;
        assert_eq!(day_style(&c, t).fg, Some(t.holiday()));

        c.is_current_month = false;
        assert_eq!(day_style(&c, t).fg, Some(t.muted()));

        c.is_today = true;
        let style = day_style(&c, t);
        assert_eq!(style.fg, Some(t.accent()));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
