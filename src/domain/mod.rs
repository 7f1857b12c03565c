//! Domain layer: channel records and the channel list state machine.

pub mod channel;
pub mod channel_state;
pub mod confirm;
pub mod events;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
