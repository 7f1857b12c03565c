use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque channel identifier, unique within a channel list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single entry of a channel's chat history.
///
/// Only `time` matters to channel bookkeeping; `role` and `content` are
/// carried for the message panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_time"
    )]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    /// Parses `time` as unix milliseconds. Blank or non-numeric values yield `None`.
    pub fn timestamp_ms(&self) -> Option<i64> {
        let raw = self.time.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(value) = raw.parse::<i64>() {
            return Some(value);
        }

        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value.trunc() as i64)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match RawTime::deserialize(deserializer)? {
        RawTime::Integer(value) => value.to_string(),
        RawTime::Float(value) => value.to_string(),
        RawTime::Text(value) => value,
    };

    Ok(Some(raw))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: ChannelId,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub chat_list: Vec<ChatMessage>,
}

impl Channel {
    /// Creates an unnamed channel with no history.
    pub fn new(channel_id: ChannelId) -> Self {
        Self::named(channel_id, "")
    }

    pub fn named(channel_id: ChannelId, channel_name: impl Into<String>) -> Self {
        Self {
            channel_id,
            channel_name: channel_name.into(),
            chat_list: Vec::new(),
        }
    }

    pub fn message_count(&self) -> usize {
        self.chat_list.len()
    }

    /// Timestamp of the most recent message, if it carries a usable one.
    pub fn last_activity_ms(&self) -> Option<i64> {
        self.chat_list.last().and_then(ChatMessage::timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_at(time: Option<&str>) -> ChatMessage {
        ChatMessage {
            time: time.map(str::to_owned),
            ..ChatMessage::default()
        }
    }

    #[test]
    fn timestamp_ms_parses_integer_strings() {
        assert_eq!(
            message_at(Some("1700000000000")).timestamp_ms(),
            Some(1_700_000_000_000)
        );
    }

    #[test]
    fn timestamp_ms_truncates_fractional_values() {
        assert_eq!(message_at(Some("1500.9")).timestamp_ms(), Some(1500));
    }

    #[test]
    fn timestamp_ms_ignores_blank_and_garbage() {
        assert_eq!(message_at(None).timestamp_ms(), None);
        assert_eq!(message_at(Some("  ")).timestamp_ms(), None);
        assert_eq!(message_at(Some("yesterday")).timestamp_ms(), None);
        assert_eq!(message_at(Some("NaN")).timestamp_ms(), None);
    }

    #[test]
    fn last_activity_uses_only_the_final_message() {
        let mut channel = Channel::new(ChannelId::from("A"));
        channel.chat_list.push(message_at(Some("1000")));
        channel.chat_list.push(message_at(None));

        assert_eq!(channel.message_count(), 2);
        assert_eq!(channel.last_activity_ms(), None);

        channel.chat_list.push(message_at(Some("2000")));
        assert_eq!(channel.last_activity_ms(), Some(2000));
    }

    #[test]
    fn deserializes_numeric_and_textual_time() {
        let channel: Channel = toml::from_str(
            r#"channel_id = "A"

[[chat_list]]
time = 1700000000000
content = "hi"

[[chat_list]]
time = "1700000000500"
role = "assistant"
"#,
        )
        .expect("channel must parse");

        assert_eq!(channel.channel_name, "");
        assert_eq!(channel.chat_list[0].timestamp_ms(), Some(1_700_000_000_000));
        assert_eq!(channel.chat_list[1].role.as_deref(), Some("assistant"));
        assert_eq!(channel.last_activity_ms(), Some(1_700_000_000_500));
    }
}
