//! Upcoming events panel

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::truncate;
use crate::tui::theme::Theme;
use crate::types::Event;

/// Preferred panel width including borders
pub const PANEL_WIDTH: u16 = 34;

/// Upcoming events panel (already filtered and sorted by the caller)
pub struct UpcomingPanel<'a> {
    events: &'a [Event],
    theme: Theme,
}

impl<'a> UpcomingPanel<'a> {
    pub fn new(events: &'a [Event], theme: Theme) -> Self {
        Self { events, theme }
    }

    /// Rows needed to show `count` events, borders included
    pub fn height_for(count: usize) -> u16 {
        2 + (count.max(1) as u16).saturating_mul(2)
    }

    /// "Jun 15" style label for an ISO date string, falling back to the raw
    /// string when it does not parse
    fn date_label(event: &Event) -> String {
        event
            .naive_date()
            .map(|d: NaiveDate| d.format("%b %-d").to_string())
            .unwrap_or_else(|| event.date.clone())
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        if self.events.is_empty() {
            return vec![Line::from(Span::styled(
                "Nothing upcoming",
                Style::default().fg(self.theme.muted()),
            ))];
        }

        let mut lines = Vec::with_capacity(self.events.len() * 2);
        for event in self.events {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {}", Self::date_label(event), event.time),
                    Style::default().fg(self.theme.date()),
                ),
                Span::styled(
                    format!("  {}", event.event_type.label()),
                    Style::default().fg(self.theme.event_color(event.event_type)),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                truncate(&event.title, width),
                Style::default().fg(self.theme.text()),
            )));
        }
        lines
    }
}

impl Widget for UpcomingPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .title(" Upcoming ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.muted()));

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width as usize)).render(inner, buf);
    }
}
