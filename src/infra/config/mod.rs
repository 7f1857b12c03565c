mod app_config;
mod file_config;
mod loader;

pub use app_config::{
    AppConfig, ChannelsConfig, LocaleConfig, LogConfig, SeedChannelConfig, UiConfig,
};
pub use loader::load;
