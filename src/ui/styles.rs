//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Menu styles
// =============================================================================

/// Style for the "new chat" button at the top of the menu.
pub fn new_chat_button_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for channel names (bold, bright).
pub fn channel_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the message count and last activity line.
pub fn channel_meta_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Highlight applied to the active channel row.
pub fn active_channel_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Row marked by the cursor when it is not the active channel.
pub fn cursor_row_style() -> Style {
    Style::default().add_modifier(Modifier::UNDERLINED)
}

/// Style for footer actions (clear all, about).
pub fn footer_action_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Message panel styles
// =============================================================================

pub fn message_role_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

// =============================================================================
// Confirmation dialog styles
// =============================================================================

pub fn dialog_border_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn dialog_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
