use anyhow::Result;

use crate::{
    domain::channel_state::ChannelState,
    infra::{channel_store::ChannelSnapshot, contracts::ChannelStore},
};

#[cfg(test)]
use crate::{
    domain::channel::ChannelId,
    infra::contracts::{ChannelIdGenerator, ExternalOpener},
};

/// Keeps the latest snapshot in memory; used when persistence is disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryChannelStore {
    snapshot: Option<ChannelSnapshot>,
}

#[cfg(test)]
impl MemoryChannelStore {
    pub fn with_snapshot(snapshot: ChannelSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }
}

impl ChannelStore for MemoryChannelStore {
    fn load(&self) -> Result<Option<ChannelSnapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, state: &ChannelState) -> Result<()> {
        self.snapshot = Some(ChannelSnapshot::from_state(state));
        Ok(())
    }
}

/// Wraps a store and counts successful saves.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct CountingStore<S> {
    inner: S,
    saves: usize,
}

#[cfg(test)]
impl<S> CountingStore<S> {
    pub fn saves(&self) -> usize {
        self.saves
    }
}

#[cfg(test)]
impl<S: ChannelStore> ChannelStore for CountingStore<S> {
    fn load(&self) -> Result<Option<ChannelSnapshot>> {
        self.inner.load()
    }

    fn save(&mut self, state: &ChannelState) -> Result<()> {
        self.inner.save(state)?;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct NoopOpener;

#[cfg(test)]
impl ExternalOpener for NoopOpener {
    fn open(&self, target: &str) -> Result<()> {
        tracing::debug!(target, "external open suppressed");
        Ok(())
    }
}

/// Deterministic ids `id-1`, `id-2`, ... for tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: usize,
}

#[cfg(test)]
impl ChannelIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ChannelId {
        self.next += 1;
        ChannelId::new(format!("id-{}", self.next))
    }
}
