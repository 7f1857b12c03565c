use super::{channel::ChannelId, channel_state::ChannelAction};

/// A destructive action waiting for the user's ok/cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    DeleteChannel(ChannelId),
    ClearChannels,
}

impl PendingConfirmation {
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::DeleteChannel(_) => "menu.delete-this-conversation",
            Self::ClearChannels => "menu.clear-all-conversation",
        }
    }

    pub fn content_key(&self) -> &'static str {
        match self {
            Self::DeleteChannel(_) => "menu.delete-conversation",
            Self::ClearChannels => "menu.clear-conversation",
        }
    }

    pub fn into_action(self) -> ChannelAction {
        match self {
            Self::DeleteChannel(id) => ChannelAction::Delete(id),
            Self::ClearChannels => ChannelAction::Clear,
        }
    }
}
