use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{error::AppError, locale::MessageBundle};

const BUILTIN_BUNDLES: [(&str, &str); 2] = [
    ("en", include_str!("../../../locales/en.toml")),
    ("zh-CN", include_str!("../../../locales/zh-CN.toml")),
];

const MAX_LOCALE_ID_LEN: usize = 32;

/// Resolves locale ids to bundles: an optional override directory first,
/// then the bundles compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    dir: Option<PathBuf>,
}

impl LocaleCatalog {
    pub fn new(dir: Option<&Path>) -> Self {
        Self {
            dir: dir.map(Path::to_path_buf),
        }
    }

    pub fn builtin_locales() -> impl Iterator<Item = &'static str> {
        BUILTIN_BUNDLES.iter().map(|(locale, _)| *locale)
    }

    pub fn resolve(&self, locale: &str) -> Result<MessageBundle, AppError> {
        if !is_valid_locale_id(locale) {
            return Err(AppError::LocaleNotFound {
                locale: locale.to_owned(),
            });
        }

        if let Some(dir) = &self.dir {
            let path = dir.join(format!("{locale}.toml"));
            if path.is_file() {
                let raw = fs::read_to_string(&path)
                    .map_err(|source| AppError::LocaleRead { path, source })?;
                return MessageBundle::parse(locale, &raw);
            }
        }

        BUILTIN_BUNDLES
            .iter()
            .find(|(builtin, _)| *builtin == locale)
            .map(|(_, raw)| MessageBundle::parse(locale, raw))
            .unwrap_or_else(|| {
                Err(AppError::LocaleNotFound {
                    locale: locale.to_owned(),
                })
            })
    }
}

/// Locale ids double as file names, so only `[A-Za-z0-9_-]` is accepted.
fn is_valid_locale_id(locale: &str) -> bool {
    !locale.is_empty()
        && locale.len() <= MAX_LOCALE_ID_LEN
        && locale
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}
