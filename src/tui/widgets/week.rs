//! Week view widget - seven day columns with their events

use chrono::Datelike;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{day_style, events_by_time, truncate};
use crate::services::calendar::WEEK_GRID_CELLS;
use crate::tui::theme::Theme;
use crate::types::DayCell;

/// Gap between columns
const COLUMN_GAP: u16 = 1;

/// Lines each event occupies (time, title)
const LINES_PER_EVENT: u16 = 2;

/// Week view widget
pub struct WeekView<'a> {
    cells: &'a [DayCell],
    theme: Theme,
}

impl<'a> WeekView<'a> {
    pub fn new(cells: &'a [DayCell], theme: Theme) -> Self {
        Self { cells, theme }
    }

    /// Width of each day column for the given area width
    pub fn column_width_for(width: u16) -> u16 {
        width.saturating_sub(COLUMN_GAP * (WEEK_GRID_CELLS as u16 - 1)) / WEEK_GRID_CELLS as u16
    }

    /// How many events fit in a column body of `height` lines, keeping one
    /// line for the overflow marker when needed
    pub fn visible_events(total: usize, height: u16) -> (usize, bool) {
        let capacity = (height / LINES_PER_EVENT) as usize;
        if total <= capacity {
            (total, false)
        } else {
            // "+N more" takes one line
            let fit = (height.saturating_sub(1) / LINES_PER_EVENT) as usize;
            (fit, true)
        }
    }

    fn render_column(&self, area: Rect, buf: &mut Buffer, cell: &DayCell) {
        let width = area.width as usize;
        if width == 0 || area.height == 0 {
            return;
        }

        let header = format!("{} {}", cell.date.format("%a"), cell.date.day());
        buf.set_stringn(
            area.x,
            area.y,
            truncate(&header, width),
            width,
            day_style(cell, self.theme),
        );

        if area.height < 2 {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y + 1,
            "─".repeat(width),
            width,
            Style::default().fg(self.theme.muted()),
        );

        let body_height = area.height - 2;
        let (shown, overflow) = Self::visible_events(cell.events.len(), body_height);
        let mut y = area.y + 2;

        for event in events_by_time(cell).into_iter().take(shown) {
            buf.set_stringn(
                area.x,
                y,
                &event.time,
                width,
                Style::default().fg(self.theme.date()),
            );
            buf.set_stringn(
                area.x,
                y + 1,
                truncate(&event.title, width),
                width,
                Style::default().fg(self.theme.event_color(event.event_type)),
            );
            y += LINES_PER_EVENT;
        }

        if overflow && body_height > 0 {
            let more = format!("+{} more", cell.events.len() - shown);
            buf.set_stringn(
                area.x,
                y,
                truncate(&more, width),
                width,
                Style::default().fg(self.theme.muted()),
            );
        }
    }
}

impl Widget for WeekView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.cells.len() != WEEK_GRID_CELLS {
            return;
        }

        let column_width = Self::column_width_for(area.width);
        if column_width == 0 {
            return;
        }

        for (idx, cell) in self.cells.iter().enumerate() {
            let column = Rect {
                x: area.x + idx as u16 * (column_width + COLUMN_GAP),
                y: area.y,
                width: column_width,
                height: area.height,
            };
            self.render_column(column, buf, cell);
        }
    }
}
