use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        locale = context.messages.locale(),
        channels = orchestrator.state().channels().list().len(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.is_running() {
        terminal.draw(|frame| {
            view::render(
                frame,
                orchestrator.state(),
                &context.messages,
                &context.config.ui,
            )
        })?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    tracing::info!("TUI shell stopped");
    Ok(())
}
