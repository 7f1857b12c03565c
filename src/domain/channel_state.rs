use std::{collections::HashSet, sync::Arc};

use thiserror::Error;

use super::channel::{Channel, ChannelId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed channel list must not be empty")]
    Empty,
    #[error("seed channel list contains duplicate id `{0}`")]
    DuplicateId(ChannelId),
}

/// Baseline channel set restored whenever the list would become empty or is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSeed {
    channels: Vec<Channel>,
}

impl ChannelSeed {
    pub fn new(channels: Vec<Channel>) -> Result<Self, SeedError> {
        if channels.is_empty() {
            return Err(SeedError::Empty);
        }

        let mut seen = HashSet::new();
        for channel in &channels {
            if !seen.insert(&channel.channel_id) {
                return Err(SeedError::DuplicateId(channel.channel_id.clone()));
            }
        }

        Ok(Self { channels })
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    fn first_id(&self) -> &ChannelId {
        &self.channels[0].channel_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelAction {
    Add { channel_id: ChannelId },
    Select(ChannelId),
    Delete(ChannelId),
    Clear,
}

/// Ordered channel list plus the active channel pointer.
///
/// Every transition builds a fresh value; `apply` returns `None` when the
/// action would not change anything so callers can skip notifications.
/// Invariants: the list is never empty, ids are unique, and `active_id`
/// names an entry of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelState {
    seed: Arc<ChannelSeed>,
    list: Vec<Channel>,
    active_id: ChannelId,
}

impl ChannelState {
    pub fn from_seed(seed: ChannelSeed) -> Self {
        Self::reset_to(Arc::new(seed))
    }

    /// Rebuilds a state from a previously saved list, repairing anything
    /// that breaks the invariants instead of trusting it.
    pub fn restore(seed: ChannelSeed, list: Vec<Channel>, active_id: Option<ChannelId>) -> Self {
        let seed = Arc::new(seed);

        let mut seen = HashSet::new();
        let list: Vec<Channel> = list
            .into_iter()
            .filter(|channel| {
                let fresh = seen.insert(channel.channel_id.clone());
                if !fresh {
                    tracing::warn!(
                        channel_id = %channel.channel_id,
                        "dropping duplicate channel from snapshot"
                    );
                }
                fresh
            })
            .collect();

        let Some(first) = list.first() else {
            return Self::reset_to(seed);
        };

        let active_id = match active_id {
            Some(id) if list.iter().any(|channel| channel.channel_id == id) => id,
            _ => first.channel_id.clone(),
        };

        Self {
            seed,
            list,
            active_id,
        }
    }

    fn reset_to(seed: Arc<ChannelSeed>) -> Self {
        Self {
            list: seed.channels().to_vec(),
            active_id: seed.first_id().clone(),
            seed,
        }
    }

    pub fn list(&self) -> &[Channel] {
        &self.list
    }

    pub fn active_id(&self) -> &ChannelId {
        &self.active_id
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        self.list
            .iter()
            .find(|channel| channel.channel_id == self.active_id)
    }

    pub fn is_active(&self, id: &ChannelId) -> bool {
        &self.active_id == id
    }

    fn position_of(&self, id: &ChannelId) -> Option<usize> {
        self.list.iter().position(|channel| &channel.channel_id == id)
    }

    /// Id of the entry after the active one, clamped to the end of the list.
    pub fn next_id(&self) -> Option<&ChannelId> {
        self.id_after(&self.active_id)
    }

    /// Id of the entry before the active one, clamped to the start of the list.
    pub fn previous_id(&self) -> Option<&ChannelId> {
        self.id_before(&self.active_id)
    }

    /// Id of the entry after `id`, clamped to the end of the list.
    pub fn id_after(&self, id: &ChannelId) -> Option<&ChannelId> {
        let index = self.position_of(id)?;
        let last_index = self.list.len().saturating_sub(1);
        self.list
            .get(std::cmp::min(index.saturating_add(1), last_index))
            .map(|channel| &channel.channel_id)
    }

    pub fn id_before(&self, id: &ChannelId) -> Option<&ChannelId> {
        let index = self.position_of(id)?;
        self.list
            .get(index.saturating_sub(1))
            .map(|channel| &channel.channel_id)
    }

    pub fn contains(&self, id: &ChannelId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn apply(&self, action: &ChannelAction) -> Option<Self> {
        match action {
            ChannelAction::Add { channel_id } => self.add_channel(channel_id.clone()),
            ChannelAction::Select(id) => self.select_channel(id),
            ChannelAction::Delete(id) => self.delete_channel(id),
            ChannelAction::Clear => self.clear_channels(),
        }
    }

    pub fn add_channel(&self, channel_id: ChannelId) -> Option<Self> {
        if self.position_of(&channel_id).is_some() {
            tracing::warn!(%channel_id, "generated channel id collides with an existing channel");
            return None;
        }

        let mut next = self.clone();
        next.list.push(Channel::new(channel_id.clone()));
        next.active_id = channel_id;
        Some(next)
    }

    pub fn select_channel(&self, id: &ChannelId) -> Option<Self> {
        if self.is_active(id) {
            return None;
        }

        if self.position_of(id).is_none() {
            tracing::debug!(channel_id = %id, "ignoring selection of unknown channel");
            return None;
        }

        let mut next = self.clone();
        next.active_id = id.clone();
        Some(next)
    }

    /// Removing the only remaining channel resets to the seed, whatever `id` is.
    pub fn delete_channel(&self, id: &ChannelId) -> Option<Self> {
        if self.list.len() <= 1 {
            return self.reset();
        }

        let Some(index) = self.position_of(id) else {
            tracing::debug!(channel_id = %id, "ignoring deletion of unknown channel");
            return None;
        };

        let mut next = self.clone();
        next.list.remove(index);
        if next.is_active(id) {
            next.active_id = next.list[0].channel_id.clone();
        }
        Some(next)
    }

    pub fn clear_channels(&self) -> Option<Self> {
        self.reset()
    }

    fn reset(&self) -> Option<Self> {
        let reset = Self::reset_to(Arc::clone(&self.seed));
        (reset != *self).then_some(reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::ChatMessage;

    fn id(raw: &str) -> ChannelId {
        ChannelId::from(raw)
    }

    fn seed(ids: &[&str]) -> ChannelSeed {
        ChannelSeed::new(ids.iter().map(|raw| Channel::new(id(raw))).collect())
            .expect("seed must be valid")
    }

    fn ids(state: &ChannelState) -> Vec<&str> {
        state
            .list()
            .iter()
            .map(|channel| channel.channel_id.as_str())
            .collect()
    }

    fn assert_invariants(state: &ChannelState) {
        assert!(!state.list().is_empty(), "list must never be empty");
        assert!(
            state.active_channel().is_some(),
            "active id must reference a listed channel"
        );
        let unique: HashSet<_> = state.list().iter().map(|c| &c.channel_id).collect();
        assert_eq!(unique.len(), state.list().len(), "ids must be unique");
    }

    #[test]
    fn seed_rejects_empty_and_duplicate_lists() {
        assert_eq!(ChannelSeed::new(vec![]), Err(SeedError::Empty));
        assert_eq!(
            ChannelSeed::new(vec![Channel::new(id("A")), Channel::new(id("A"))]),
            Err(SeedError::DuplicateId(id("A")))
        );
    }

    #[test]
    fn from_seed_activates_first_seed_channel() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        assert_eq!(ids(&state), vec!["A", "B"]);
        assert_eq!(state.active_id(), &id("A"));
        assert_invariants(&state);
    }

    #[test]
    fn add_appends_and_activates_new_channel() {
        let state = ChannelState::from_seed(seed(&["A"]));

        let next = state.add_channel(id("N")).expect("add must change state");

        assert_eq!(ids(&next), vec!["A", "N"]);
        assert_eq!(next.active_id(), &id("N"));
        let added = next.active_channel().expect("new channel is active");
        assert!(added.channel_name.is_empty());
        assert!(added.chat_list.is_empty());
        assert_invariants(&next);
    }

    #[test]
    fn add_with_colliding_id_is_rejected() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        assert_eq!(state.add_channel(id("B")), None);
    }

    #[test]
    fn selecting_active_channel_is_a_no_op() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        assert_eq!(state.select_channel(&id("A")), None);
    }

    #[test]
    fn select_moves_active_pointer_only() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        let next = state.select_channel(&id("B")).expect("select must change state");

        assert_eq!(next.active_id(), &id("B"));
        assert_eq!(next.list(), state.list());
    }

    #[test]
    fn selecting_unknown_channel_is_ignored() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        assert_eq!(state.select_channel(&id("missing")), None);
    }

    #[test]
    fn deleting_active_channel_reassigns_to_new_first_entry() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        let next = state.delete_channel(&id("A")).expect("delete must change state");

        assert_eq!(ids(&next), vec!["B"]);
        assert_eq!(next.active_id(), &id("B"));
        assert_invariants(&next);
    }

    #[test]
    fn deleting_inactive_channel_keeps_active_pointer() {
        let state = ChannelState::from_seed(seed(&["A", "B", "C"]))
            .select_channel(&id("C"))
            .expect("select must change state");

        let next = state.delete_channel(&id("B")).expect("delete must change state");

        assert_eq!(ids(&next), vec!["A", "C"]);
        assert_eq!(next.active_id(), &id("C"));
    }

    #[test]
    fn deleting_unknown_channel_is_ignored() {
        let state = ChannelState::from_seed(seed(&["A", "B"]));

        assert_eq!(state.delete_channel(&id("missing")), None);
    }

    #[test]
    fn deleting_the_last_channel_resets_to_seed_regardless_of_id() {
        let state = ChannelState::from_seed(seed(&["A"]))
            .add_channel(id("N"))
            .and_then(|s| s.delete_channel(&id("A")))
            .expect("state must change");
        assert_eq!(ids(&state), vec!["N"]);

        let reset = state
            .delete_channel(&id("whatever"))
            .expect("reset must change state");

        assert_eq!(ids(&reset), vec!["A"]);
        assert_eq!(reset.active_id(), &id("A"));
    }

    #[test]
    fn deleting_the_only_seed_channel_discards_its_history() {
        let mut list = vec![Channel::new(id("A"))];
        list[0].chat_list.push(ChatMessage {
            time: Some("1".to_owned()),
            ..ChatMessage::default()
        });
        let state = ChannelState::restore(seed(&["A"]), list, Some(id("A")));

        let reset = state.delete_channel(&id("A")).expect("reset must change state");

        assert_eq!(reset, ChannelState::from_seed(seed(&["A"])));
    }

    #[test]
    fn clear_restores_seed_from_any_state() {
        let seeded = ChannelState::from_seed(seed(&["A", "B"]));
        let state = seeded
            .add_channel(id("N"))
            .and_then(|s| s.delete_channel(&id("A")))
            .expect("state must change");

        let cleared = state.clear_channels().expect("clear must change state");

        assert_eq!(cleared, seeded);
        assert_eq!(cleared.active_id(), &id("A"));
        assert_eq!(seeded.clear_channels(), None);
    }

    #[test]
    fn add_then_delete_returns_to_seed_channel() {
        let state = ChannelState::from_seed(seed(&["A"]));

        let added = state.add_channel(id("N")).expect("add must change state");
        assert_eq!(added.list().len(), 2);
        assert_eq!(added.list()[0].channel_id, id("A"));
        assert_eq!(added.active_id(), &id("N"));

        let deleted = added.delete_channel(&id("N")).expect("delete must change state");
        assert_eq!(deleted.list().len(), 1);
        assert_eq!(deleted.active_id(), &id("A"));
    }

    #[test]
    fn neighbours_are_clamped_to_list_bounds() {
        let state = ChannelState::from_seed(seed(&["A", "B", "C"]));

        assert_eq!(state.previous_id(), Some(&id("A")));
        assert_eq!(state.next_id(), Some(&id("B")));

        let last = state.select_channel(&id("C")).expect("select must change state");
        assert_eq!(last.next_id(), Some(&id("C")));
        assert_eq!(last.previous_id(), Some(&id("B")));
    }

    #[test]
    fn neighbours_of_any_row_ignore_the_active_pointer() {
        let state = ChannelState::from_seed(seed(&["A", "B", "C"]));

        assert_eq!(state.id_after(&id("B")), Some(&id("C")));
        assert_eq!(state.id_before(&id("B")), Some(&id("A")));
        assert_eq!(state.id_after(&id("missing")), None);
        assert!(state.contains(&id("C")));
        assert!(!state.contains(&id("missing")));
    }

    #[test]
    fn restore_repairs_broken_snapshots() {
        let empty = ChannelState::restore(seed(&["A"]), vec![], Some(id("X")));
        assert_eq!(empty, ChannelState::from_seed(seed(&["A"])));

        let dangling = ChannelState::restore(
            seed(&["A"]),
            vec![Channel::new(id("B")), Channel::new(id("C"))],
            Some(id("X")),
        );
        assert_eq!(dangling.active_id(), &id("B"));

        let duplicated = ChannelState::restore(
            seed(&["A"]),
            vec![
                Channel::named(id("B"), "first"),
                Channel::named(id("B"), "second"),
                Channel::new(id("C")),
            ],
            Some(id("C")),
        );
        assert_eq!(ids(&duplicated), vec!["B", "C"]);
        assert_eq!(duplicated.list()[0].channel_name, "first");
        assert_eq!(duplicated.active_id(), &id("C"));
    }

    #[test]
    fn invariants_hold_across_a_long_action_sequence() {
        let mut state = ChannelState::from_seed(seed(&["S1", "S2"]));
        let mut counter: usize = 0;

        for round in 0..60 {
            let action = match round % 7 {
                0 | 3 => {
                    counter += 1;
                    ChannelAction::Add {
                        channel_id: id(&format!("n{counter}")),
                    }
                }
                1 => ChannelAction::Delete(state.active_id().clone()),
                2 => ChannelAction::Select(state.list()[0].channel_id.clone()),
                4 => ChannelAction::Delete(id(&format!("n{}", counter.saturating_sub(1)))),
                5 => ChannelAction::Select(id("nowhere")),
                _ if round % 21 == 6 => ChannelAction::Clear,
                _ => ChannelAction::Delete(state.list()[state.list().len() - 1].channel_id.clone()),
            };

            let before_len = state.list().len();
            if let Some(next) = state.apply(&action) {
                if matches!(action, ChannelAction::Add { .. }) {
                    assert_eq!(next.list().len(), before_len + 1);
                }
                state = next;
            }
            assert_invariants(&state);
        }
    }
}
