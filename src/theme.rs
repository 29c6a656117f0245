//! Nordic Frost color theme definitions.
//!
//! Nord palette with semantic assignments for the indicator's states.

use nordtray::state::ConnectionState;
use ratatui::style::Color;

// === Nord palette ===

pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);
pub const NORD_FROST_3: Color = Color::Rgb(129, 161, 193);
pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);

// === Semantic Color Aliases ===

/// Primary text color.
pub const TEXT_PRIMARY: Color = NORD_SNOW_STORM_1;
/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
/// Primary accent color.
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;
/// Secondary accent color.
pub const ACCENT_SECONDARY: Color = NORD_FROST_3;
pub const SUCCESS: Color = NORD_GREEN;
pub const WARNING: Color = NORD_YELLOW;
pub const ERROR: Color = NORD_RED;

// === UI Element Colors ===

pub const BORDER_DEFAULT: Color = NORD_POLAR_NIGHT_3;
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
pub const ROW_SELECTED_BG: Color = Color::Rgb(40, 40, 40);
pub const ROW_SELECTED_FG: Color = NORD_FROST_2;

/// Indicator color for a tunnel state (the tray icon's traffic light).
pub const fn state_color(state: ConnectionState) -> Color {
    match state {
        ConnectionState::Connected => SUCCESS,
        ConnectionState::Disconnected => ERROR,
        ConnectionState::Connecting => WARNING,
    }
}

/// Color for a tri-state setting flag.
pub const fn flag_color(value: Option<bool>) -> Color {
    match value {
        Some(true) => SUCCESS,
        Some(false) => TEXT_SECONDARY,
        None => WARNING,
    }
}
