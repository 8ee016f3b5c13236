//! Help popup: key bindings and the event-type colour legend

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::tui::theme::Theme;
use crate::types::EventType;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const POPUP_WIDTH: u16 = 42;
const POPUP_HEIGHT: u16 = 19;

/// Key column width inside the popup
const KEY_COLUMN: usize = 19;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Left/Right or h/l", "Previous / next"),
            ("t", "Jump to today"),
            ("m / w / d", "Month/Week/Day"),
            ("Tab / Shift+Tab", "Cycle view"),
        ],
    ),
    ("General", &[("q / Esc", "Quit"), ("?", "Toggle help")]),
];

pub struct HelpPopup {
    theme: Theme,
}

impl HelpPopup {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Popup rect centered in `area`, shrunk to fit small terminals
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }

    /// Section title plus a rule underneath; returns the next free row
    fn render_heading(&self, inner: Rect, y: u16, title: &str, buf: &mut Buffer) -> u16 {
        let width = inner.width as usize;
        let bottom = inner.y + inner.height;
        if y < bottom {
            buf.set_stringn(
                inner.x,
                y,
                title,
                width,
                Style::default()
                    .fg(self.theme.date())
                    .add_modifier(Modifier::BOLD),
            );
        }
        if y + 1 < bottom {
            buf.set_stringn(
                inner.x,
                y + 1,
                "─".repeat(width),
                width,
                Style::default().fg(self.theme.muted()),
            );
        }
        y + 2
    }
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(" bakecal v{} ", VERSION))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let bottom = inner.y + inner.height;
        let mut y = inner.y + 1;

        for (title, bindings) in SECTIONS {
            y = self.render_heading(inner, y, title, buf);
            for (key, desc) in bindings.iter() {
                if y >= bottom {
                    return;
                }
                let key_text = format!("  {:<width$}", key, width = KEY_COLUMN);
                buf.set_stringn(
                    inner.x,
                    y,
                    &key_text,
                    width,
                    Style::default().fg(self.theme.accent()),
                );
                let used = key_text.chars().count();
                if used < width {
                    buf.set_stringn(
                        inner.x + used as u16,
                        y,
                        desc,
                        width - used,
                        Style::default().fg(self.theme.text()),
                    );
                }
                y += 1;
            }
            y += 1;
        }

        y = self.render_heading(inner, y, "Event types", buf);
        if y < bottom {
            let mut x = inner.x;
            for event_type in EventType::all() {
                let label = event_type.label();
                let remaining = (inner.x + inner.width).saturating_sub(x) as usize;
                if remaining == 0 {
                    break;
                }
                buf.set_stringn(
                    x,
                    y,
                    label,
                    remaining,
                    Style::default().fg(self.theme.event_color(*event_type)),
                );
                x += label.chars().count() as u16 + 1;
            }
        }

        let hint = "Press ? to close";
        if inner.height > 0 && (hint.len() as u16) <= inner.width {
            let hint_x = inner.x + (inner.width - hint.len() as u16) / 2;
            buf.set_string(
                hint_x,
                bottom - 1,
                hint,
                Style::default().fg(self.theme.muted()),
            );
        }
    }
}
