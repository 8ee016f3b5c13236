//! Plain-text rendering of calendar cells for the non-interactive commands

use std::fmt::Write;

use chrono::Datelike;

use crate::services::navigation::view_title;
use crate::types::{DayCell, Event, ViewMode};

const WEEKDAY_HEADER: &str = " Sun   Mon   Tue   Wed   Thu   Fri   Sat";
const LEGEND: &str = "[ ] today  ( ) other month  * events  ! holiday";

/// One 5-char month cell: bracket markers around the day, then an event flag
fn month_cell(cell: &DayCell) -> String {
    let (open, close) = if cell.is_today {
        ('[', ']')
    } else if !cell.is_current_month {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    let flag = if cell.is_holiday {
        '!'
    } else if !cell.events.is_empty() {
        '*'
    } else {
        ' '
    };
    format!("{}{:>2}{}{}", open, cell.date.day(), close, flag)
}

/// `09:00  Order     Croissant order  (id)`
pub fn event_line(event: &Event) -> String {
    format!(
        "{}  {:<9} {}  ({})",
        event.time,
        event.event_type.label(),
        event.title,
        event.id
    )
}

/// Month grid followed by the events in the displayed window
pub fn format_month(cells: &[DayCell], reference: chrono::NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view_title(ViewMode::Month, reference));
    let _ = writeln!(out, "{}", WEEKDAY_HEADER);

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(month_cell).collect();
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }
    let _ = writeln!(out, "{}", LEGEND);

    let with_events: Vec<&DayCell> = cells.iter().filter(|c| !c.events.is_empty()).collect();
    if !with_events.is_empty() {
        let _ = writeln!(out);
        for cell in with_events {
            let _ = writeln!(out, "{}", cell.date.format("%a %Y-%m-%d"));
            for event in &cell.events {
                let _ = writeln!(out, "  {}", event_line(event));
            }
        }
    }

    out
}

/// Week listing, one block per day
pub fn format_week(cells: &[DayCell], reference: chrono::NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view_title(ViewMode::Week, reference));

    for cell in cells {
        let mut header = cell.date.format("%a %Y-%m-%d").to_string();
        if cell.is_today {
            header.push_str("  (today)");
        }
        if cell.is_holiday {
            header.push_str("  (holiday)");
        }
        let _ = writeln!(out, "{}", header);
        if cell.events.is_empty() {
            let _ = writeln!(out, "  -");
        }
        for event in &cell.events {
            let _ = writeln!(out, "  {}", event_line(event));
        }
    }

    out
}

/// Day agenda sorted by time, descriptions indented below each entry
pub fn format_day(cell: &DayCell) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view_title(ViewMode::Day, cell.date));
    if cell.is_holiday {
        let _ = writeln!(out, "Holiday - bakery closed");
    }

    let mut events: Vec<&Event> = cell.events.iter().collect();
    events.sort_by(|a, b| a.time.cmp(&b.time));

    if events.is_empty() {
        let _ = writeln!(out, "No events scheduled");
    }
    for event in events {
        let _ = writeln!(out, "  {}", event_line(event));
        if let Some(description) = &event.description {
            let _ = writeln!(out, "         {}", description);
        }
    }

    out
}

/// Upcoming list with dates
pub fn format_upcoming(events: &[Event]) -> String {
    if events.is_empty() {
        return "Nothing upcoming\n".to_string();
    }

    let mut out = String::new();
    for event in events {
        let _ = writeln!(out, "{} {}", event.date, event_line(event));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CalendarGridBuilder;
    use crate::types::EventType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, date: &str, time: &str, event_type: EventType) -> Event {
        Event {
            id: id.to_string(),
            title: format!("{} {}", event_type.label(), id),
            date: date.to_string(),
            time: time.to_string(),
            event_type,
            description: None,
        }
    }

    #[test]
    fn test_event_line() {
        let e = event("e1", "2025-06-15", "09:00", EventType::Order);
        assert_eq!(event_line(&e), "09:00  Order     Order e1  (e1)");
    }

    #[test]
    fn test_format_month_june_2025() {
        let events = vec![
            event("a", "2025-06-03", "09:00", EventType::Order),
            event("h", "2025-06-19", "00:00", EventType::Holiday),
        ];
        let cells = CalendarGridBuilder::new(date(2025, 6, 10)).build_month_grid(date(2025, 6, 1), &events);
        let text = format_month(&cells, date(2025, 6, 1));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "June 2025");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        assert_eq!(lines[2], "  1     2     3 *   4     5     6     7");
        assert_eq!(lines[3], "  8     9   [10]   11    12    13    14");
        assert_eq!(lines[4], " 15    16    17    18    19 !  20    21");
        assert_eq!(lines[7], "( 6)  ( 7)  ( 8)  ( 9)  (10)  (11)  (12)");
        assert_eq!(lines[8], LEGEND);
        assert!(text.contains("Tue 2025-06-03\n  09:00  Order     Order a  (a)"));
    }

    #[test]
    fn test_format_week() {
        let events = vec![event("a", "2025-06-10", "09:00", EventType::Catering)];
        let cells = CalendarGridBuilder::new(date(2025, 6, 10)).build_week_grid(date(2025, 6, 10), &events);
        let text = format_week(&cells, date(2025, 6, 10));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jun 8 - Jun 14, 2025");
        assert_eq!(lines[1], "Sun 2025-06-08");
        assert_eq!(lines[2], "  -");
        assert!(text.contains("Tue 2025-06-10  (today)\n  09:00  Catering  Catering a  (a)"));
    }

    #[test]
    fn test_format_day_sorted() {
        let mut late = event("late", "2025-06-15", "14:00", EventType::Training);
        late.description = Some("Kitchen B".to_string());
        let events = vec![late, event("early", "2025-06-15", "08:00", EventType::Order)];
        let cell = CalendarGridBuilder::new(date(2025, 6, 1)).build_day_cell(date(2025, 6, 15), &events);
        let text = format_day(&cell);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sunday, June 15, 2025");
        assert!(lines[1].contains("early"));
        assert!(lines[2].contains("late"));
        assert_eq!(lines[3], "         Kitchen B");
    }

    #[test]
    fn test_format_day_empty() {
        let cell = CalendarGridBuilder::new(date(2025, 6, 1)).build_day_cell(date(2025, 6, 15), &[]);
        assert!(format_day(&cell).contains("No events scheduled"));
    }

    #[test]
    fn test_format_upcoming() {
        assert_eq!(format_upcoming(&[]), "Nothing upcoming\n");
        let events = vec![event("a", "2025-06-15", "09:00", EventType::Order)];
        assert_eq!(
            format_upcoming(&events),
            "2025-06-15 09:00  Order     Order a  (a)\n"
        );
    }
}
