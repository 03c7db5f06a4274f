//! Palette and semantic styling for the viewer.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ACCENT_VIOLET: Color = Color::Rgb(189, 147, 249); // #bd93f9
pub const ACCENT_TEAL: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const ACCENT_PINK: Color = Color::Rgb(255, 121, 198); // #ff79c6
pub const WARN_AMBER: Color = Color::Rgb(255, 184, 108); // #ffb86c
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_VIOLET)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(ACCENT_TEAL)
        .add_modifier(Modifier::BOLD)
}

/// Header cell under the column cursor.
pub fn table_header_cursor() -> Style {
    table_header().bg(BG_HIGHLIGHT).add_modifier(Modifier::UNDERLINED)
}

/// Resize handle glyph in the header; highlighted while dragging.
pub fn resize_handle(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT_PINK).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER_GRAY)
    }
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(ACCENT_VIOLET)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Enabled pagination button.
pub fn button_enabled() -> Style {
    Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD)
}

/// Disabled pagination button.
pub fn button_disabled() -> Style {
    Style::default().fg(BORDER_GRAY).add_modifier(Modifier::DIM)
}

/// Error message text.
pub fn error_text() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD)
}

/// Label column in the detail modal.
pub fn detail_label() -> Style {
    Style::default().fg(ACCENT_PINK)
}

/// Value column in the detail modal.
pub fn detail_value() -> Style {
    Style::default().fg(DIM_WHITE)
}
