use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "chatmenu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve config base directory (XDG_CONFIG_HOME/HOME)".into(),
            })?;

        Ok(Self::under(config_base.join(APP_DIR_NAME)))
    }

    pub fn under(config_dir: PathBuf) -> Self {
        let state_dir = config_dir.join("state");
        let log_dir = config_dir.join("logs");

        Self {
            config_dir,
            state_dir,
            log_dir,
        }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.state_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn channels_file(&self) -> PathBuf {
        self.state_dir.join("channels.toml")
    }

    pub fn channels_lock_file(&self) -> PathBuf {
        self.state_dir.join("channels.lock")
    }
}
