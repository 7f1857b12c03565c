use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use anyhow::Result;
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        channel::{Channel, ChannelId},
        channel_state::{ChannelSeed, ChannelState},
    },
    infra::{contracts::ChannelStore, error::AppError},
};

/// On-disk shape of a channel list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_id: Option<ChannelId>,
    #[serde(default)]
    pub list: Vec<Channel>,
}

impl ChannelSnapshot {
    pub fn from_state(state: &ChannelState) -> Self {
        Self {
            active_id: Some(state.active_id().clone()),
            list: state.list().to_vec(),
        }
    }

    pub fn into_state(self, seed: ChannelSeed) -> ChannelState {
        ChannelState::restore(seed, self.list, self.active_id)
    }
}

/// TOML file store guarded by an exclusive advisory lock held for the
/// lifetime of the value.
#[derive(Debug)]
pub struct TomlChannelStore {
    path: PathBuf,
    _lock: File,
}

impl TomlChannelStore {
    pub fn open(path: PathBuf, lock_path: &Path) -> Result<Self, AppError> {
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(lock_path)
            .map_err(|source| AppError::StoreWrite {
                path: lock_path.to_path_buf(),
                source,
            })?;

        lock.try_lock_exclusive()
            .map_err(|_| AppError::StoreBusy { path: path.clone() })?;

        Ok(Self { path, _lock: lock })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> Result<Option<ChannelSnapshot>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| AppError::StoreRead {
            path: self.path.clone(),
            source,
        })?;

        let snapshot = toml::from_str(&raw).map_err(|source| AppError::StoreParse {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(snapshot))
    }

    fn write_snapshot(&self, snapshot: &ChannelSnapshot) -> Result<(), AppError> {
        let raw = toml::to_string_pretty(snapshot).map_err(AppError::StoreSerialize)?;

        // Write-then-rename keeps the previous snapshot intact if we die mid-write.
        let staging = self.path.with_extension("toml.tmp");
        fs::write(&staging, raw).map_err(|source| AppError::StoreWrite {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &self.path).map_err(|source| AppError::StoreWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl ChannelStore for TomlChannelStore {
    fn load(&self) -> Result<Option<ChannelSnapshot>> {
        Ok(self.read_snapshot()?)
    }

    fn save(&mut self, state: &ChannelState) -> Result<()> {
        self.write_snapshot(&ChannelSnapshot::from_state(state))?;
        tracing::debug!(
            path = %self.path.display(),
            channels = state.list().len(),
            "channel snapshot saved"
        );
        Ok(())
    }
}
