use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

/// Produces input for the shell loop. `Ok(None)` means "nothing this round".
pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

/// Owns the shell state and turns events into channel transitions.
pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;

    fn is_running(&self) -> bool {
        self.state().is_running()
    }
}
