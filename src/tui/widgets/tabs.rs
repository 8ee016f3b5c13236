//! View mode tab bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;
use crate::types::ViewMode;

/// Tab bar showing Month / Week / Day with the active mode bracketed
pub struct ViewTabs {
    selected: ViewMode,
    theme: Theme,
}

impl ViewTabs {
    pub fn new(selected: ViewMode, theme: Theme) -> Self {
        Self { selected, theme }
    }

    /// Width of the rendered bar, used for centering
    fn total_width(&self) -> u16 {
        ViewMode::all()
            .iter()
            .map(|mode| {
                let label = mode.label();
                let display_len = if *mode == self.selected {
                    label.len() + 2 // "[label]"
                } else {
                    label.len()
                };
                display_len as u16 + 2 // + spacing
            })
            .sum::<u16>()
            .saturating_sub(2) // Remove trailing spacing
    }
}

impl Widget for ViewTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let start_x = area.x + (area.width.saturating_sub(self.total_width())) / 2;
        let mut x = start_x;

        for mode in ViewMode::all() {
            let is_selected = *mode == self.selected;
            let display = if is_selected {
                format!("[{}]", mode.label())
            } else {
                mode.label().to_string()
            };

            let display_len = display.len() as u16;
            if x + display_len > area.x + area.width {
                break;
            }

            let style = if is_selected {
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted())
            };

            buf.set_string(x, area.y, &display, style);
            x += display_len + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_selected_mode_is_bracketed() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        ViewTabs::new(ViewMode::Week, Theme::Dark).render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.contains("[Week]"));
        assert!(text.contains("Month"));
        assert!(!text.contains("[Month]"));
    }

    #[test]
    fn test_tabs_are_centered() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        let tabs = ViewTabs::new(ViewMode::Month, Theme::Dark);
        // "[Month]  Week  Day" = 7 + 2 + 4 + 2 + 3
        assert_eq!(tabs.total_width(), 18);
        tabs.render(area, &mut buf);
        assert_eq!(buf.cell((11, 0)).unwrap().symbol(), "[");
    }

    #[test]
    fn test_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        ViewTabs::new(ViewMode::Day, Theme::Dark).render(area, &mut buf);
    }
}
