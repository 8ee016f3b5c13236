//! Application state and event loop

use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    DefaultTerminal, Frame,
};

use crate::services::{upcoming_events, CalendarCursor, CalendarGridBuilder, Config};
use crate::types::{Event as CalendarEvent, ViewMode};

use super::theme::Theme;
use super::widgets::{
    day::DayView,
    help::HelpPopup,
    month::MonthGrid,
    tabs::ViewTabs,
    upcoming::{UpcomingPanel, PANEL_WIDTH},
    week::WeekView,
};

/// Minimum body width at which the upcoming panel sits beside the view;
/// narrower terminals stack it underneath
const SIDE_PANEL_MIN_WIDTH: u16 = 100;

/// Smallest stacked panel: borders plus one line
const STACKED_PANEL_MIN_HEIGHT: u16 = 3;

/// Main application
pub struct App {
    builder: CalendarGridBuilder,
    cursor: CalendarCursor,
    events: Vec<CalendarEvent>,
    upcoming_limit: usize,
    theme: Theme,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Create an app showing `today` in the configured default view
    pub fn new(today: NaiveDate, events: Vec<CalendarEvent>, config: &Config, theme: Theme) -> Self {
        Self {
            builder: CalendarGridBuilder::new(today),
            cursor: CalendarCursor::new(config.default_view, today),
            events,
            upcoming_limit: config.upcoming_limit,
            theme,
            show_help: false,
            should_quit: false,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.cursor.prev();
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.cursor.next();
                    }
                    KeyCode::Char('t') => {
                        self.cursor.go_to(self.builder.today());
                    }
                    KeyCode::Char('m') => {
                        self.cursor.set_view_mode(ViewMode::Month);
                    }
                    KeyCode::Char('w') => {
                        self.cursor.set_view_mode(ViewMode::Week);
                    }
                    KeyCode::Char('d') => {
                        self.cursor.set_view_mode(ViewMode::Day);
                    }
                    KeyCode::Tab => {
                        self.cursor.set_view_mode(self.cursor.view_mode.next());
                    }
                    KeyCode::BackTab => {
                        self.cursor.set_view_mode(self.cursor.view_mode.prev());
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    _ => {}
                }
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn render_view(&self, area: Rect, buf: &mut Buffer) {
        let cells = self
            .builder
            .build(self.cursor.view_mode, self.cursor.reference, &self.events);

        match self.cursor.view_mode {
            ViewMode::Month => MonthGrid::new(&cells, self.theme).render(area, buf),
            ViewMode::Week => WeekView::new(&cells, self.theme).render(area, buf),
            ViewMode::Day => {
                if let Some(cell) = cells.first() {
                    DayView::new(cell, self.theme).render(area, buf);
                }
            }
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // View tabs
            Constraint::Length(1), // Title
            Constraint::Length(1), // Padding
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

        ViewTabs::new(self.cursor.view_mode, self.theme).render(chunks[1], buf);

        let title = Line::from(Span::styled(
            self.cursor.title(),
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        let body = chunks[4];
        let upcoming = upcoming_events(&self.events, self.builder.today(), self.upcoming_limit);
        let [view_area, panel_area] = if body.width >= SIDE_PANEL_MIN_WIDTH {
            Layout::horizontal([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)]).areas(body)
        } else {
            // Panel gets at most half the body so the view stays usable
            let panel_height = UpcomingPanel::height_for(upcoming.len())
                .min(body.height / 2)
                .max(STACKED_PANEL_MIN_HEIGHT.min(body.height));
            Layout::vertical([Constraint::Min(0), Constraint::Length(panel_height)]).areas(body)
        };
        self.render_view(view_area, buf);
        UpcomingPanel::new(&upcoming, self.theme).render(panel_area, buf);

        let hints = Line::from(Span::styled(
            "←/→ navigate · t today · m/w/d view · ? help · q quit",
            Style::default().fg(self.theme.muted()),
        ));
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        if self.show_help {
            let popup_area = HelpPopup::centered_area(area);
            HelpPopup::new(self.theme).render(popup_area, buf);
        }
    }
}

/// Run the TUI application
pub fn run(today: NaiveDate, events: Vec<CalendarEvent>, config: &Config) -> anyhow::Result<()> {
    // Theme detection must happen before raw mode
    let theme = Theme::from_setting(config.theme);
    let mut app = App::new(today, events, config, theme);

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);
        }
    }

    Ok(())
}
