use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::StorageError;

use super::{KEY_CATEGORIES, KEY_LOGS, entities::LogEntry, key_value::KeyValueStore};

/// Loads the log list. Anything unreadable results in an empty list; individual broken entries
/// are dropped while the rest survive.
pub fn load_logs(store: &impl KeyValueStore) -> Vec<LogEntry> {
    let raw = match store.get(KEY_LOGS) {
        Ok(Some(raw)) => raw,
        Ok(None) => return vec![],
        Err(e) => {
            warn!("Falling back to empty logs: {e}");
            return vec![];
        }
    };

    let values = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(values)) => values,
        Ok(other) => {
            warn!("Stored logs are not a list, found {other}");
            return vec![];
        }
        Err(source) => {
            let e = StorageError::Malformed {
                key: KEY_LOGS.to_owned(),
                source,
            };
            warn!("Falling back to empty logs: {e}");
            return vec![];
        }
    };

    values
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<LogEntry>(v.clone()) {
            Ok(entry) if !entry.category.is_empty() => Some(entry),
            Ok(_) => {
                warn!("Skipping entry without category {v}");
                None
            }
            Err(e) => {
                warn!("Skipping illegal entry {v}: {e}");
                None
            }
        })
        .collect()
}

/// Result of reading the category list.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadedCategories {
    Stored(Vec<String>),
    /// Nothing usable was stored. `persist` tells whether the defaults should be written back,
    /// which is skipped for unparseable values so they remain available for inspection.
    Missing { persist: bool },
}

pub fn load_categories(store: &impl KeyValueStore) -> LoadedCategories {
    let raw = match store.get(KEY_CATEGORIES) {
        Ok(Some(raw)) => raw,
        Ok(None) => return LoadedCategories::Missing { persist: true },
        Err(e) => {
            warn!("Falling back to default categories: {e}");
            return LoadedCategories::Missing { persist: false };
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(values)) => {
            let names = sanitize_categories(
                values
                    .into_iter()
                    .filter_map(|v| v.as_str().map(str::to_owned)),
            );
            if names.is_empty() {
                LoadedCategories::Missing { persist: true }
            } else {
                LoadedCategories::Stored(names)
            }
        }
        Ok(other) => {
            warn!("Stored categories are not a list, found {other}");
            LoadedCategories::Missing { persist: true }
        }
        Err(source) => {
            let e = StorageError::Malformed {
                key: KEY_CATEGORIES.to_owned(),
                source,
            };
            warn!("Falling back to default categories: {e}");
            LoadedCategories::Missing { persist: false }
        }
    }
}

/// Trims names and drops blanks and repeats, keeping the first occurrence.
fn sanitize_categories(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut result: Vec<String> = vec![];
    for name in names {
        let name = name.trim();
        if name.is_empty() || result.iter().any(|v| v == name) {
            continue;
        }
        result.push(name.to_owned());
    }
    result
}

/// Serializes `value` under `key`.
pub fn save<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
