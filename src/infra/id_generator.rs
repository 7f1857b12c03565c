use uuid::Uuid;

use crate::{domain::channel::ChannelId, infra::contracts::ChannelIdGenerator};

/// Random v4 UUIDs: 122 bits of entropy per id.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidChannelIdGenerator;

impl ChannelIdGenerator for UuidChannelIdGenerator {
    fn next_id(&mut self) -> ChannelId {
        ChannelId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generates_distinct_uuid_strings() {
        let mut generator = UuidChannelIdGenerator;

        let ids: HashSet<_> = (0..256).map(|_| generator.next_id()).collect();

        assert_eq!(ids.len(), 256);
        assert!(ids
            .iter()
            .all(|id| Uuid::parse_str(id.as_str()).is_ok_and(|uuid| uuid.get_version_num() == 4)));
    }
}
