//! UI layer: terminal rendering and input for the channel menu.

mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod timestamp;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
