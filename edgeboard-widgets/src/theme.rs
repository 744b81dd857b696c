//! Color roles shared by all widgets.

use ratatui::style::Color;

/// Named color roles for the dashboard widgets.
///
/// Every widget takes an optional theme override; the default maps onto the
/// standard terminal palette so it works without truecolor support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary accent (focused borders, tab highlight, spinner).
    pub accent: Color,
    /// De-emphasized text (hints, placeholders, skeleton rows).
    pub muted: Color,
    /// Default foreground.
    pub text: Color,
    /// Background used for the selected row and active drop target.
    pub highlight_bg: Color,
    /// Foreground painted over `highlight_bg`.
    pub highlight_fg: Color,
    /// Alert variant colors.
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            text: Color::Reset,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
        }
    }
}
