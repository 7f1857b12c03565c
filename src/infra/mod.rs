//! Infrastructure layer: adapters for config, locales, storage, and OS integrations.

pub mod channel_store;
pub mod config;
pub mod contracts;
pub mod error;
pub mod id_generator;
pub mod locale;
pub mod logging;
pub mod opener;
pub mod panic_hook;
pub mod storage_layout;
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
