//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the plain-text output (display/mod.rs).

use iocraft::prelude::Color;

use crate::profile::StatusTone;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Ticket status colors
    pub status_alert: Color,
    pub status_ok: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub heading: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_alert: Color::Red,
            status_ok: Color::Green,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            heading: Color::Cyan,
            highlight: Color::Blue,
            highlight_text: Color::White,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status tone
    pub fn tone_color(&self, tone: StatusTone) -> Color {
        match tone {
            StatusTone::Alert => self.status_alert,
            StatusTone::Ok => self.status_ok,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
