use super::{channel::ChannelId, channel_state::ChannelState, confirm::PendingConfirmation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    channels: ChannelState,
    /// Row marked for deletion; `None` tracks the active channel.
    cursor: Option<ChannelId>,
    pending_confirmation: Option<PendingConfirmation>,
}

impl ShellState {
    pub fn new(channels: ChannelState) -> Self {
        Self {
            running: true,
            channels,
            cursor: None,
            pending_confirmation: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn channels(&self) -> &ChannelState {
        &self.channels
    }

    /// Replaces the channel state and snaps the cursor back to the active row.
    pub fn replace_channels(&mut self, channels: ChannelState) {
        self.channels = channels;
        self.cursor = None;
    }

    pub fn cursor_id(&self) -> &ChannelId {
        self.cursor
            .as_ref()
            .filter(|id| self.channels.contains(id))
            .unwrap_or_else(|| self.channels.active_id())
    }

    pub fn move_cursor(&mut self, id: ChannelId) {
        if !self.channels.contains(&id) || self.channels.is_active(&id) {
            self.cursor = None;
        } else {
            self.cursor = Some(id);
        }
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending_confirmation.as_ref()
    }

    pub fn request_confirmation(&mut self, confirmation: PendingConfirmation) {
        self.pending_confirmation = Some(confirmation);
    }

    pub fn take_confirmation(&mut self) -> Option<PendingConfirmation> {
        self.pending_confirmation.take()
    }
}
