use std::fmt::Write;

use chrono::{Local, LocalResult, TimeZone};

use crate::domain::channel::Channel;

/// Formats unix milliseconds in local time with a strftime `pattern`.
/// Out-of-range timestamps and malformed patterns render as an empty string.
pub fn format_timestamp(timestamp_ms: i64, pattern: &str) -> String {
    let datetime = match Local.timestamp_millis_opt(timestamp_ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => return String::new(),
    };

    let mut formatted = String::new();
    if write!(formatted, "{}", datetime.format(pattern)).is_err() {
        tracing::debug!(pattern, "invalid timestamp pattern");
        return String::new();
    }

    formatted
}

/// Last-activity label for a channel row; empty when there is no usable time.
pub fn last_activity_label(channel: &Channel, pattern: &str) -> String {
    channel
        .last_activity_ms()
        .map(|timestamp_ms| format_timestamp(timestamp_ms, pattern))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::{ChannelId, ChatMessage};

    const PATTERN: &str = "%m-%d %H:%M:%S";

    #[test]
    fn formats_in_local_time() {
        let timestamp_ms = 1_700_000_000_000_i64;
        let expected = Local
            .timestamp_millis_opt(timestamp_ms)
            .single()
            .expect("timestamp must be valid")
            .format(PATTERN)
            .to_string();

        let formatted = format_timestamp(timestamp_ms, PATTERN);

        assert_eq!(formatted, expected);
        assert_eq!(formatted.len(), "MM-DD HH:MM:SS".len());
    }

    #[test]
    fn extreme_timestamp_renders_empty() {
        assert_eq!(format_timestamp(i64::MIN, PATTERN), "");
    }

    #[test]
    fn malformed_pattern_renders_empty() {
        assert_eq!(format_timestamp(0, "%Q"), "");
    }

    #[test]
    fn last_activity_is_empty_without_time() {
        let mut channel = Channel::new(ChannelId::from("A"));
        assert_eq!(last_activity_label(&channel, PATTERN), "");

        channel.chat_list.push(ChatMessage {
            time: Some(String::new()),
            ..ChatMessage::default()
        });
        assert_eq!(last_activity_label(&channel, PATTERN), "");
    }
}
