//! Day view widget - agenda for a single day

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{events_by_time, truncate};
use crate::tui::theme::Theme;
use crate::types::{DayCell, Event};

/// Width of the type label column ("Catering" + padding)
const TYPE_WIDTH: usize = 10;

/// Day view widget
pub struct DayView<'a> {
    cell: &'a DayCell,
    theme: Theme,
}

impl<'a> DayView<'a> {
    pub fn new(cell: &'a DayCell, theme: Theme) -> Self {
        Self { cell, theme }
    }

    /// Events ordered by time of day
    fn agenda(&self) -> Vec<&'a Event> {
        events_by_time(self.cell)
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if self.cell.is_holiday {
            lines.push(Line::from(Span::styled(
                "Holiday - bakery closed",
                Style::default()
                    .fg(self.theme.holiday())
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        let agenda = self.agenda();
        if agenda.is_empty() {
            lines.push(Line::from(Span::styled(
                "No events scheduled",
                Style::default().fg(self.theme.muted()),
            )));
            return lines;
        }

        // "HH:MM  " + type column
        let title_width = width.saturating_sub(7 + TYPE_WIDTH);
        for event in agenda {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}  ", event.time),
                    Style::default().fg(self.theme.date()),
                ),
                Span::styled(
                    format!("{:<width$}", event.event_type.label(), width = TYPE_WIDTH),
                    Style::default().fg(self.theme.event_color(event.event_type)),
                ),
                Span::styled(
                    truncate(&event.title, title_width),
                    Style::default().fg(self.theme.text()),
                ),
            ]));

            if let Some(description) = &event.description {
                lines.push(Line::from(Span::styled(
                    format!(
                        "{}{}",
                        " ".repeat(7 + TYPE_WIDTH),
                        truncate(description, title_width)
                    ),
                    Style::default().fg(self.theme.muted()),
                )));
            }
        }

        lines
    }
}

impl Widget for DayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CalendarGridBuilder;
    use crate::types::EventType;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn event(id: &str, time: &str, event_type: EventType, description: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Title {}", id),
            date: "2025-06-15".to_string(),
            time: time.to_string(),
            event_type,
            description: description.map(String::from),
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn render(events: &[Event]) -> Buffer {
        let cell = CalendarGridBuilder::new(date()).build_day_cell(date(), events);
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        DayView::new(&cell, Theme::Dark).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_empty_day() {
        let buf = render(&[]);
        assert_eq!(row_text(&buf, 0), "No events scheduled");
    }

    #[test]
    fn test_agenda_sorted_by_time_with_descriptions() {
        let events = vec![
            event("late", "15:00", EventType::Catering, None),
            event("early", "08:00", EventType::Order, Some("Pickup at back door")),
        ];
        let buf = render(&events);
        assert_eq!(row_text(&buf, 0), "08:00  Order     Title early");
        assert_eq!(row_text(&buf, 1), "                 Pickup at back door");
        assert_eq!(row_text(&buf, 2), "15:00  Catering  Title late");
    }

    #[test]
    fn test_holiday_banner() {
        let events = vec![event("h", "00:00", EventType::Holiday, None)];
        let buf = render(&events);
        assert_eq!(row_text(&buf, 0), "Holiday - bakery closed");
        assert_eq!(row_text(&buf, 2), "00:00  Holiday   Title h");
    }
}
