use anyhow::Result;

use crate::{
    domain::{
        channel_state::{ChannelAction, ChannelSeed, ChannelState},
        shell_state::ShellState,
    },
    infra::contracts::ChannelStore,
};

/// Restores the last saved channel list, or starts from the seed.
pub fn load_channels(store: &dyn ChannelStore, seed: ChannelSeed) -> Result<ChannelState> {
    match store.load()? {
        Some(snapshot) => {
            let state = snapshot.into_state(seed);
            tracing::info!(
                channels = state.list().len(),
                active_id = %state.active_id(),
                "restored channel list"
            );
            Ok(state)
        }
        None => {
            tracing::info!("starting from seed channel list");
            Ok(ChannelState::from_seed(seed))
        }
    }
}

/// Applies `action` and persists the result. The shell state is only
/// replaced once the save succeeded. Returns whether anything changed.
pub fn apply_channel_action(
    state: &mut ShellState,
    action: ChannelAction,
    store: &mut dyn ChannelStore,
) -> Result<bool> {
    let Some(next) = state.channels().apply(&action) else {
        tracing::debug!(?action, "channel action left state unchanged");
        return Ok(false);
    };

    store.save(&next)?;
    tracing::info!(
        ?action,
        active_id = %next.active_id(),
        channels = next.list().len(),
        "channel list updated"
    );
    state.replace_channels(next);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::{
        domain::channel::{Channel, ChannelId},
        infra::{
            channel_store::ChannelSnapshot,
            stubs::{CountingStore, MemoryChannelStore},
        },
    };

    struct FailingStore;

    impl ChannelStore for FailingStore {
        fn load(&self) -> Result<Option<ChannelSnapshot>> {
            Ok(None)
        }

        fn save(&mut self, _state: &ChannelState) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    fn seed() -> ChannelSeed {
        ChannelSeed::new(vec![
            Channel::new(ChannelId::from("A")),
            Channel::new(ChannelId::from("B")),
        ])
        .expect("seed must be valid")
    }

    #[test]
    fn load_channels_starts_from_seed_without_snapshot() {
        let store = MemoryChannelStore::default();

        let state = load_channels(&store, seed()).expect("load must succeed");

        assert_eq!(state, ChannelState::from_seed(seed()));
    }

    #[test]
    fn load_channels_prefers_saved_snapshot() {
        let store = MemoryChannelStore::with_snapshot(ChannelSnapshot {
            active_id: Some(ChannelId::from("Z")),
            list: vec![Channel::new(ChannelId::from("Z"))],
        });

        let state = load_channels(&store, seed()).expect("load must succeed");

        assert_eq!(state.active_id(), &ChannelId::from("Z"));
        assert_eq!(state.list().len(), 1);
    }

    #[test]
    fn changed_state_is_saved_once() {
        let mut shell = ShellState::new(ChannelState::from_seed(seed()));
        let mut store = CountingStore::<MemoryChannelStore>::default();

        let changed = apply_channel_action(
            &mut shell,
            ChannelAction::Select(ChannelId::from("B")),
            &mut store,
        )
        .expect("action must apply");

        assert!(changed);
        assert_eq!(store.saves(), 1);
        assert_eq!(shell.channels().active_id(), &ChannelId::from("B"));
    }

    #[test]
    fn no_op_actions_are_not_saved() {
        let mut shell = ShellState::new(ChannelState::from_seed(seed()));
        let mut store = CountingStore::<MemoryChannelStore>::default();

        let changed = apply_channel_action(
            &mut shell,
            ChannelAction::Select(ChannelId::from("A")),
            &mut store,
        )
        .expect("action must apply");

        assert!(!changed);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn failed_save_leaves_state_untouched() {
        let mut shell = ShellState::new(ChannelState::from_seed(seed()));
        let before = shell.clone();

        let result = apply_channel_action(
            &mut shell,
            ChannelAction::Delete(ChannelId::from("A")),
            &mut FailingStore,
        );

        assert!(result.is_err());
        assert_eq!(shell, before);
    }
}
