use std::collections::HashMap;

use crate::infra::error::AppError;

/// Translated strings for one locale, keyed by dotted path (`menu.new-chat`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageBundle {
    locale: String,
    entries: HashMap<String, String>,
}

impl MessageBundle {
    pub fn parse(locale: &str, raw: &str) -> Result<Self, AppError> {
        let table: toml::Table = toml::from_str(raw).map_err(|error| AppError::LocaleParse {
            locale: locale.to_owned(),
            details: error.to_string(),
        })?;

        let mut entries = HashMap::new();
        flatten_into(&mut entries, None, table).map_err(|details| AppError::LocaleParse {
            locale: locale.to_owned(),
            details,
        })?;

        Ok(Self {
            locale: locale.to_owned(),
            entries,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Looks up `key`, falling back to the key itself when it is missing.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn flatten_into(
    entries: &mut HashMap<String, String>,
    prefix: Option<&str>,
    table: toml::Table,
) -> Result<(), String> {
    for (name, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name,
        };

        match value {
            toml::Value::String(text) => {
                entries.insert(key, text);
            }
            toml::Value::Table(nested) => flatten_into(entries, Some(&key), nested)?,
            other => {
                return Err(format!(
                    "`{key}` must be a string or table, found {}",
                    other.type_str()
                ))
            }
        }
    }

    Ok(())
}
