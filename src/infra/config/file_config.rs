use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    AppConfig, ChannelsConfig, LocaleConfig, LogConfig, SeedChannelConfig, UiConfig,
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub locale: Option<FileLocaleConfig>,
    pub channels: Option<FileChannelsConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(locale) = self.locale {
            locale.merge_into(&mut config.locale);
        }

        if let Some(channels) = self.channels {
            channels.merge_into(&mut config.channels);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLocaleConfig {
    pub default: Option<String>,
    pub dir: Option<PathBuf>,
}

impl FileLocaleConfig {
    fn merge_into(self, config: &mut LocaleConfig) {
        if let Some(default) = self.default {
            config.default = default;
        }

        if let Some(dir) = self.dir {
            config.dir = Some(dir);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChannelsConfig {
    pub persist: Option<bool>,
    pub seed: Option<Vec<SeedChannelConfig>>,
}

impl FileChannelsConfig {
    fn merge_into(self, config: &mut ChannelsConfig) {
        if let Some(persist) = self.persist {
            config.persist = persist;
        }

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub about_url: Option<String>,
    pub timestamp_pattern: Option<String>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(about_url) = self.about_url {
            config.about_url = Some(about_url);
        }

        if let Some(pattern) = self.timestamp_pattern {
            config.timestamp_pattern = pattern;
        }
    }
}
