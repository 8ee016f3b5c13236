//! Terminal theme detection and color definitions

use ratatui::style::Color;

use crate::services::ThemeSetting;
use crate::types::EventType;

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Resolve a configured preference, detecting only for `auto`
    pub fn from_setting(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Auto => Self::detect(),
            ThemeSetting::Dark => Self::Dark,
            ThemeSetting::Light => Self::Light,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (selected tabs, keybinding keys, today marker)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (separators, borders, days outside the month)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Date and time text color
    pub fn date(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Error text and Sunday day numbers
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Holiday day numbers
    pub fn holiday(self) -> Color {
        match self {
            Self::Dark => Color::Indexed(208), // orange (ANSI 256)
            Self::Light => Color::Indexed(166), // dark orange (ANSI 256)
        }
    }

    /// Color used for an event of the given type
    pub fn event_color(self, event_type: EventType) -> Color {
        match self {
            Self::Dark => match event_type {
                EventType::Order => Color::Green,
                EventType::Catering => Color::Magenta,
                EventType::Training => Color::Blue,
                EventType::Holiday => Color::Indexed(208),
                EventType::Reminder => Color::Yellow,
            },
            Self::Light => match event_type {
                EventType::Order => Color::Indexed(22),
                EventType::Catering => Color::Indexed(90),
                EventType::Training => Color::Indexed(25),
                EventType::Holiday => Color::Indexed(166),
                EventType::Reminder => Color::Indexed(130),
            },
        }
    }
}
