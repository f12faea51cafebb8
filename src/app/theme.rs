//! UI theme: the handful of colors used by the renderer, collected in
//! one place instead of scattered through render code.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub header_fg: Color,
    pub accent_fg: Color,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub label_fg: Color,
    pub muted_fg: Color,
    pub button_fg: Color,
    pub overlay_border: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Cyan,
            accent_fg: Color::Yellow,
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            label_fg: Color::Gray,
            muted_fg: Color::DarkGray,
            button_fg: Color::White,
            overlay_border: Color::Cyan,
        }
    }
}
