use crate::infra::{config::AppConfig, locale::MessageBundle, storage_layout::StorageLayout};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub layout: StorageLayout,
    pub messages: MessageBundle,
}

impl AppContext {
    pub fn new(config: AppConfig, layout: StorageLayout, messages: MessageBundle) -> Self {
        Self {
            config,
            layout,
            messages,
        }
    }
}
