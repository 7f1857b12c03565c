use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    channel::{Channel, ChannelId},
    channel_state::{ChannelSeed, SeedError},
};

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_SEED_CHANNEL_ID: &str = "default";
/// Month-day and wall-clock time of the last message, e.g. `03-14 09:26:53`.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub locale: LocaleConfig,
    pub channels: ChannelsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub default: String,
    /// Directory searched for `<locale>.toml` before the built-in bundles.
    pub dir: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_LOCALE.to_owned(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedChannelConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelsConfig {
    pub persist: bool,
    pub seed: Vec<SeedChannelConfig>,
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            persist: true,
            seed: vec![SeedChannelConfig {
                id: DEFAULT_SEED_CHANNEL_ID.to_owned(),
                name: String::new(),
            }],
        }
    }
}

impl ChannelsConfig {
    pub fn channel_seed(&self) -> Result<ChannelSeed, SeedError> {
        ChannelSeed::new(
            self.seed
                .iter()
                .map(|entry| Channel::named(ChannelId::new(entry.id.as_str()), entry.name.as_str()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub about_url: Option<String>,
    pub timestamp_pattern: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            about_url: None,
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_owned(),
        }
    }
}
