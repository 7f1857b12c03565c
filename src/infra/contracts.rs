use anyhow::Result;

use crate::{
    domain::{channel::ChannelId, channel_state::ChannelState},
    infra::channel_store::ChannelSnapshot,
};

/// Persists channel snapshots between sessions.
pub trait ChannelStore {
    fn load(&self) -> Result<Option<ChannelSnapshot>>;
    fn save(&mut self, state: &ChannelState) -> Result<()>;
}

pub trait ChannelIdGenerator {
    /// Returns an id that is unique with overwhelming probability.
    fn next_id(&mut self) -> ChannelId;
}

pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}
