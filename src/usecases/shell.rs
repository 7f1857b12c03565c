use anyhow::Result;

use crate::{
    domain::{
        channel::ChannelId,
        channel_state::{ChannelAction, ChannelState},
        confirm::PendingConfirmation,
        events::{AppEvent, KeyInput},
        shell_state::ShellState,
    },
    infra::contracts::{ChannelIdGenerator, ChannelStore, ExternalOpener},
};

use super::{channels::apply_channel_action, contracts::ShellOrchestrator};

pub struct DefaultShellOrchestrator<S, O, G>
where
    S: ChannelStore,
    O: ExternalOpener,
    G: ChannelIdGenerator,
{
    state: ShellState,
    store: S,
    opener: O,
    ids: G,
    about_url: Option<String>,
}

impl<S, O, G> DefaultShellOrchestrator<S, O, G>
where
    S: ChannelStore,
    O: ExternalOpener,
    G: ChannelIdGenerator,
{
    pub fn new(channels: ChannelState, store: S, opener: O, ids: G) -> Self {
        Self {
            state: ShellState::new(channels),
            store,
            opener,
            ids,
            about_url: None,
        }
    }

    pub fn with_about_url(mut self, about_url: Option<String>) -> Self {
        self.about_url = about_url;
        self
    }

    fn apply(&mut self, action: ChannelAction) -> Result<()> {
        apply_channel_action(&mut self.state, action, &mut self.store)?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        if self.state.pending_confirmation().is_some() {
            return self.handle_confirmation_key(&key);
        }

        if key.ctrl {
            return Ok(());
        }

        match key.key.as_str() {
            "a" => {
                let channel_id = self.ids.next_id();
                self.apply(ChannelAction::Add { channel_id })?;
            }
            "j" => self.select_neighbour(ChannelState::next_id)?,
            "k" => self.select_neighbour(ChannelState::previous_id)?,
            "J" => self.move_cursor(ChannelState::id_after),
            "K" => self.move_cursor(ChannelState::id_before),
            "d" => {
                let target = self.state.cursor_id().clone();
                self.state
                    .request_confirmation(PendingConfirmation::DeleteChannel(target));
            }
            "c" => self
                .state
                .request_confirmation(PendingConfirmation::ClearChannels),
            "g" => self.open_about(),
            _ => {}
        }

        Ok(())
    }

    /// Only accept/cancel keys reach a pending confirmation; the rest are dropped.
    fn handle_confirmation_key(&mut self, key: &KeyInput) -> Result<()> {
        if key.is("y") || key.is("enter") {
            if let Some(pending) = self.state.take_confirmation() {
                self.apply(pending.into_action())?;
            }
        } else if key.is("n") || key.is("esc") {
            if let Some(pending) = self.state.take_confirmation() {
                tracing::debug!(?pending, "confirmation cancelled");
            }
        }

        Ok(())
    }

    fn select_neighbour(&mut self, pick: fn(&ChannelState) -> Option<&ChannelId>) -> Result<()> {
        let Some(id) = pick(self.state.channels()).cloned() else {
            return Ok(());
        };

        self.apply(ChannelAction::Select(id))
    }

    fn move_cursor(
        &mut self,
        pick: for<'a> fn(&'a ChannelState, &ChannelId) -> Option<&'a ChannelId>,
    ) {
        let Some(id) = pick(self.state.channels(), self.state.cursor_id()).cloned() else {
            return;
        };

        self.state.move_cursor(id);
    }

    fn open_about(&self) {
        let Some(url) = self.about_url.as_deref() else {
            tracing::debug!("no about url configured");
            return;
        };

        if let Err(error) = self.opener.open(url) {
            tracing::warn!(%error, url, "failed to open about url");
        }
    }
}

impl<S, O, G> ShellOrchestrator for DefaultShellOrchestrator<S, O, G>
where
    S: ChannelStore,
    O: ExternalOpener,
    G: ChannelIdGenerator,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key)?,
        }

        Ok(())
    }
}
