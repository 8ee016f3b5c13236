//! Month grid widget (6 weeks x 7 days)

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use super::{day_style, events_by_time, truncate};
use crate::services::calendar::MONTH_GRID_CELLS;
use crate::tui::theme::Theme;
use crate::types::DayCell;

const GRID_ROWS: usize = 6;
const GRID_COLS: usize = 7;

/// Content width bounds per cell (excluding border)
const MIN_CELL_WIDTH: u16 = 4;
const MAX_CELL_WIDTH: u16 = 18;

/// Content rows per cell (day number + event lines)
const MAX_CELL_ROWS: u16 = 4;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Box drawing characters for grid border
const BOX_TOP_LEFT: &str = "┌";
const BOX_TOP_RIGHT: &str = "┐";
const BOX_BOTTOM_LEFT: &str = "└";
const BOX_BOTTOM_RIGHT: &str = "┘";
const BOX_HORIZONTAL: &str = "─";
const BOX_VERTICAL: &str = "│";
const BOX_T_DOWN: &str = "┬";
const BOX_T_UP: &str = "┴";
const BOX_T_RIGHT: &str = "├";
const BOX_T_LEFT: &str = "┤";
const BOX_CROSS: &str = "┼";

/// Month grid widget for ratatui
pub struct MonthGrid<'a> {
    cells: &'a [DayCell],
    theme: Theme,
}

impl<'a> MonthGrid<'a> {
    pub fn new(cells: &'a [DayCell], theme: Theme) -> Self {
        Self { cells, theme }
    }

    /// Content width of a cell for the given area width
    pub fn cell_width_for(width: u16) -> u16 {
        (width.saturating_sub(1) / GRID_COLS as u16)
            .saturating_sub(1)
            .clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
    }

    /// Content rows per cell for the given area height
    /// (1 weekday header + 1 top border + 6 x (rows + 1 border))
    pub fn cell_rows_for(height: u16) -> u16 {
        (height.saturating_sub(2) / GRID_ROWS as u16)
            .saturating_sub(1)
            .clamp(1, MAX_CELL_ROWS)
    }

    fn grid_width(cell_width: u16) -> u16 {
        1 + GRID_COLS as u16 * (cell_width + 1)
    }

    /// Render a horizontal border row: left ─── mid ─── right
    fn render_border(
        &self,
        area: Rect,
        buf: &mut Buffer,
        x0: u16,
        y: u16,
        cell_width: u16,
        (left, mid, right): (&str, &str, &str),
    ) {
        let style = Style::default().fg(self.theme.muted());
        put(area, buf, x0, y, left, style);
        for col in 0..GRID_COLS {
            let x = x0 + 1 + col as u16 * (cell_width + 1);
            put(
                area,
                buf,
                x,
                y,
                &BOX_HORIZONTAL.repeat(cell_width as usize),
                style,
            );
            let joint = if col == GRID_COLS - 1 { right } else { mid };
            put(area, buf, x + cell_width, y, joint, style);
        }
    }

    /// Render the content lines of one cell
    #[allow(clippy::too_many_arguments)]
    fn render_cell(
        &self,
        area: Rect,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        cell_width: u16,
        rows: u16,
        cell: &DayCell,
    ) {
        let width = cell_width as usize;
        put(
            area,
            buf,
            x,
            y,
            &format!("{:>2}", cell.date.day()),
            day_style(cell, self.theme),
        );

        let event_rows = rows.saturating_sub(1) as usize;
        if event_rows == 0 || cell.events.is_empty() {
            return;
        }

        let overflow = cell.events.len() > event_rows;
        let shown = if overflow {
            event_rows - 1
        } else {
            cell.events.len()
        };

        for (line, event) in events_by_time(cell).into_iter().take(shown).enumerate() {
            let color = if cell.is_current_month {
                self.theme.event_color(event.event_type)
            } else {
                self.theme.muted()
            };
            put(
                area,
                buf,
                x,
                y + 1 + line as u16,
                &truncate(&event.title, width),
                Style::default().fg(color),
            );
        }

        if overflow {
            let more = format!("+{} more", cell.events.len() - shown);
            put(
                area,
                buf,
                x,
                y + 1 + shown as u16,
                &truncate(&more, width),
                Style::default().fg(self.theme.muted()),
            );
        }
    }
}

/// Write `text` at (x, y), clipped to `area`
fn put(area: Rect, buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    if y >= area.bottom() || x >= area.right() {
        return;
    }
    buf.set_stringn(x, y, text, (area.right() - x) as usize, style);
}

impl Widget for MonthGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.cells.len() != MONTH_GRID_CELLS {
            return;
        }

        let cell_width = Self::cell_width_for(area.width);
        let rows = Self::cell_rows_for(area.height);
        let x0 = area.x + area.width.saturating_sub(Self::grid_width(cell_width)) / 2;
        let y0 = area.y;

        // Weekday header, centered over each column
        for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
            let x = x0
                + 1
                + col as u16 * (cell_width + 1)
                + cell_width.saturating_sub(label.len() as u16) / 2;
            let color = if col == 0 {
                self.theme.error()
            } else {
                self.theme.muted()
            };
            put(area, buf, x, y0, label, Style::default().fg(color));
        }

        self.render_border(
            area,
            buf,
            x0,
            y0 + 1,
            cell_width,
            (BOX_TOP_LEFT, BOX_T_DOWN, BOX_TOP_RIGHT),
        );

        let border_style = Style::default().fg(self.theme.muted());

        for (row, week) in self.cells.chunks(GRID_COLS).enumerate() {
            let row_y = y0 + 2 + row as u16 * (rows + 1);

            for line in 0..rows {
                for col in 0..=GRID_COLS {
                    let x = x0 + col as u16 * (cell_width + 1);
                    put(area, buf, x, row_y + line, BOX_VERTICAL, border_style);
                }
            }

            for (col, cell) in week.iter().enumerate() {
                let x = x0 + 1 + col as u16 * (cell_width + 1);
                self.render_cell(area, buf, x, row_y, cell_width, rows, cell);
            }

            let joints = if row == GRID_ROWS - 1 {
                (BOX_BOTTOM_LEFT, BOX_T_UP, BOX_BOTTOM_RIGHT)
            } else {
                (BOX_T_RIGHT, BOX_CROSS, BOX_T_LEFT)
            };
            self.render_border(area, buf, x0, row_y + rows, cell_width, joints);
        }
    }
}
