use std::path::PathBuf;

use thiserror::Error;

use crate::domain::channel_state::SeedError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid channel seed in config: {0}")]
    InvalidSeed(#[source] SeedError),
    #[error("locale `{locale}` not found")]
    LocaleNotFound { locale: String },
    #[error("failed to read locale bundle at {path}: {source}")]
    LocaleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse locale bundle `{locale}`: {details}")]
    LocaleParse { locale: String, details: String },
    #[error("failed to read channel store at {path}: {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse channel store at {path}: {source}")]
    StoreParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize channel snapshot: {0}")]
    StoreSerialize(#[source] toml::ser::Error),
    #[error("failed to write channel store at {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("channel store at {path} is locked by another session")]
    StoreBusy { path: PathBuf },
    #[error("failed to resolve storage paths: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create storage directory at {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
