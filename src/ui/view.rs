use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    domain::{
        channel::{Channel, ChatMessage},
        confirm::PendingConfirmation,
        shell_state::ShellState,
    },
    infra::{config::UiConfig, locale::MessageBundle},
};

use super::{styles, timestamp};

const MENU_WIDTH: u16 = 34;
const CHANNEL_NAME_MAX_WIDTH: usize = 26;
const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 7;
const CURSOR_MARKER: &str = "> ";

pub fn render(frame: &mut Frame<'_>, state: &ShellState, messages: &MessageBundle, ui: &UiConfig) {
    let [content_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [menu_area, messages_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(1)])
        .areas(content_area);

    render_menu(frame, menu_area, state, messages, ui);
    render_messages_panel(frame, messages_area, state, messages, ui);

    let hints = Paragraph::new(messages.t("menu.hints")).style(styles::hint_style());
    frame.render_widget(hints, hint_area);

    if let Some(pending) = state.pending_confirmation() {
        render_confirmation(frame, pending, messages);
    }
}

fn render_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    messages: &MessageBundle,
    ui: &UiConfig,
) {
    let [button_area, list_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);

    let button = Paragraph::new(format!("[a] {}", messages.t("menu.new-chat")))
        .alignment(Alignment::Center)
        .style(styles::new_chat_button_style())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);

    let channels = state.channels();
    // Inner width = area width - 2 (borders)
    let inner_width = list_area.width.saturating_sub(2) as usize;
    let cursor = state.cursor_id();
    let items: Vec<ListItem<'static>> = channels
        .list()
        .iter()
        .map(|channel| {
            let marked =
                &channel.channel_id == cursor && !channels.is_active(&channel.channel_id);
            channel_list_item(channel, messages, ui, inner_width, marked)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(styles::active_channel_style());

    let mut list_state = ListState::default();
    list_state.select(
        channels
            .list()
            .iter()
            .position(|channel| channels.is_active(&channel.channel_id)),
    );
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let footer = Paragraph::new(vec![
        Line::from(format!("[c] {}", messages.t("menu.clear-all-conversation"))),
        Line::from(format!("[g] {}", messages.t("menu.about"))),
    ])
    .style(styles::footer_action_style())
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, footer_area);
}

fn channel_list_item(
    channel: &Channel,
    messages: &MessageBundle,
    ui: &UiConfig,
    width: usize,
    marked: bool,
) -> ListItem<'static> {
    let name = truncate_to_width(
        display_name(channel, messages),
        CHANNEL_NAME_MAX_WIDTH.min(width),
    );
    let name = if marked {
        format!("{CURSOR_MARKER}{name}")
    } else {
        name
    };
    let count = format!("{} {}", channel.message_count(), messages.t("menu.messages"));
    let activity = timestamp::last_activity_label(channel, &ui.timestamp_pattern);

    let item = ListItem::new(vec![
        Line::from(Span::styled(name, styles::channel_name_style())),
        Line::from(Span::styled(
            spread(&count, &activity, width),
            styles::channel_meta_style(),
        )),
    ]);

    if marked {
        item.style(styles::cursor_row_style())
    } else {
        item
    }
}

/// Unnamed channels show the localized placeholder.
fn display_name<'a>(channel: &'a Channel, messages: &'a MessageBundle) -> &'a str {
    if channel.channel_name.is_empty() {
        messages.t("menu.new-conversation")
    } else {
        &channel.channel_name
    }
}

fn render_messages_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    messages: &MessageBundle,
    ui: &UiConfig,
) {
    let active = state.channels().active_channel();
    let title = active
        .map(|channel| display_name(channel, messages))
        .unwrap_or_default();
    let lines: Vec<Line<'static>> = active
        .map(|channel| {
            channel
                .chat_list
                .iter()
                .map(|message| message_line(message, ui))
                .collect()
        })
        .unwrap_or_default();

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title.to_owned()));
    frame.render_widget(panel, area);
}

fn message_line(message: &ChatMessage, ui: &UiConfig) -> Line<'static> {
    let mut spans = Vec::with_capacity(3);

    let time = message
        .timestamp_ms()
        .map(|timestamp_ms| timestamp::format_timestamp(timestamp_ms, &ui.timestamp_pattern))
        .unwrap_or_default();
    if !time.is_empty() {
        spans.push(Span::styled(format!("{time} "), styles::message_time_style()));
    }

    if let Some(role) = &message.role {
        spans.push(Span::styled(format!("{role}: "), styles::message_role_style()));
    }

    spans.push(Span::styled(
        message.content.clone(),
        styles::message_text_style(),
    ));

    Line::from(spans)
}

fn render_confirmation(frame: &mut Frame<'_>, pending: &PendingConfirmation, messages: &MessageBundle) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    let body = vec![
        Line::from(messages.t(pending.content_key())),
        Line::default(),
        Line::from(format!(
            "{}    {}",
            messages.t("menu.confirm-ok"),
            messages.t("menu.confirm-cancel")
        )),
    ];

    let dialog = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::dialog_border_style())
            .title(Span::styled(
                messages.t(pending.title_key()),
                styles::dialog_title_style(),
            )),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cuts `text` to `max_width` display columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Places `left` and `right` at opposite ends of a `width`-column row.
fn spread(left: &str, right: &str, width: usize) -> String {
    if right.is_empty() {
        return left.to_owned();
    }

    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}
