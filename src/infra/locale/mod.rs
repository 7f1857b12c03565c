//! Locale bundles: resolve a locale id to its translated strings.

mod bundle;
mod catalog;

pub use bundle::MessageBundle;
pub use catalog::LocaleCatalog;
