//! Persisted user selections and word pairs.
//!
//! Everything lives in one JSON object (`word-pairs.json`) that acts as a
//! small key/value namespace:
//!
//! | Key                   | Value                                      |
//! |-----------------------|--------------------------------------------|
//! | `from_language_index` | integer, default 0 (English)               |
//! | `to_language_index`   | integer, default 1 (Spanish)               |
//! | `delay_index`         | integer, default 2 (2.0 s)                 |
//! | `word_pairs_json`     | string holding a JSON array of records     |
//!
//! Older files may carry `word_pairs`, an unordered set of records. It is
//! dropped on load and never read, since it cannot restore the user's order.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use super::codec::{decode_json, encode_json};
use super::WordPair;
use crate::config::AppPaths;
use crate::language::DEFAULT_DELAY_INDEX;

const KEY_FROM: &str = "from_language_index";
const KEY_TO: &str = "to_language_index";
const KEY_DELAY: &str = "delay_index";
const KEY_PAIRS: &str = "word_pairs_json";
const KEY_LEGACY_PAIRS: &str = "word_pairs";

// ---------------------------------------------------------------------------
// PreferencesError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot write preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode preferences: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// Everything restored on startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub from_language_index: usize,
    pub to_language_index: usize,
    pub delay_index: usize,
    pub pairs: Vec<WordPair>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            from_language_index: 0,
            to_language_index: 1,
            delay_index: DEFAULT_DELAY_INDEX,
            pairs: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// PreferencesStore
// ---------------------------------------------------------------------------

/// Reads and writes [`Preferences`] at a fixed path.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Store at the platform-appropriate data path.
    pub fn open_default() -> Self {
        Self::at(AppPaths::new().preferences_file)
    }

    /// Store at an explicit path (useful for tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences. Never fails: unreadable data degrades to defaults.
    pub fn load(&self) -> Preferences {
        let mut map = match self.read_map() {
            Some(map) => map,
            None => return Preferences::default(),
        };

        let mut dirty = false;
        if map.contains_key(KEY_LEGACY_PAIRS) && !map.contains_key(KEY_PAIRS) {
            map.remove(KEY_LEGACY_PAIRS);
            dirty = true;
            log::debug!("preferences: cleared old unordered word pair data");
        }

        let defaults = Preferences::default();
        let index = |key: &str, default: usize| {
            map.get(key)
                .and_then(Value::as_u64)
                .map(|v| v as usize)
                .unwrap_or(default)
        };
        let from_language_index = index(KEY_FROM, defaults.from_language_index);
        let to_language_index = index(KEY_TO, defaults.to_language_index);
        let delay_index = index(KEY_DELAY, defaults.delay_index);

        let saved = map
            .get(KEY_PAIRS)
            .and_then(Value::as_str)
            .map(str::to_owned);
        let pairs = match saved {
            Some(json) if !json.is_empty() => match decode_json(&json) {
                Ok(pairs) => {
                    log::debug!("preferences: loaded {} word pairs", pairs.len());
                    pairs
                }
                Err(e) => {
                    log::error!("preferences: error loading saved word pairs: {e}");
                    if map.remove(KEY_LEGACY_PAIRS).is_some() {
                        dirty = true;
                    }
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };

        if dirty {
            if let Err(e) = self.write_map(&map) {
                log::warn!("preferences: could not rewrite {}: {e}", self.path.display());
            }
        }

        Preferences {
            from_language_index,
            to_language_index,
            delay_index,
            pairs,
        }
    }

    /// Persist `prefs`, creating parent directories as needed.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        let mut map = Map::new();
        map.insert(KEY_FROM.into(), Value::from(prefs.from_language_index));
        map.insert(KEY_TO.into(), Value::from(prefs.to_language_index));
        map.insert(KEY_DELAY.into(), Value::from(prefs.delay_index));

        let json = encode_json(&prefs.pairs);
        log::debug!("preferences: saving word pairs in order: {json}");
        map.insert(KEY_PAIRS.into(), Value::from(json));

        self.write_map(&map)
    }

    fn read_map(&self) -> Option<Map<String, Value>> {
        if !self.path.exists() {
            return None;
        }
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("preferences: cannot read {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str::<Value>(&data) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) | Err(_) => {
                log::warn!(
                    "preferences: {} is not a JSON object, using defaults",
                    self.path.display()
                );
                None
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in_temp() -> (PreferencesStore, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let store = PreferencesStore::at(dir.path().join("word-pairs.json"));
        (store, dir)
    }

    fn read_raw(store: &PreferencesStore) -> Map<String, Value> {
        let data = std::fs::read_to_string(store.path()).expect("read");
        match serde_json::from_str(&data).expect("json") {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let (store, _dir) = store_in_temp();
        let prefs = store.load();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.delay_index, 2);
    }

    #[test]
    fn persists_and_reloads_in_order() {
        let (store, _dir) = store_in_temp();
        let prefs = Preferences {
            from_language_index: 1,
            to_language_index: 0,
            delay_index: 4,
            pairs: vec![WordPair::new("hola", "hello"), WordPair::new("gato", "cat")],
        };
        store.save(&prefs).expect("save");

        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn saved_file_uses_ordered_string_key() {
        let (store, _dir) = store_in_temp();
        let prefs = Preferences {
            pairs: vec![WordPair::new("uno", "one")],
            ..Preferences::default()
        };
        store.save(&prefs).expect("save");

        let map = read_raw(&store);
        assert_eq!(map[KEY_PAIRS], Value::from(r#"["uno|one"]"#));
        assert!(!map.contains_key(KEY_LEGACY_PAIRS));
    }

    #[test]
    fn legacy_set_is_dropped_when_ordered_key_missing() {
        let (store, _dir) = store_in_temp();
        std::fs::write(
            store.path(),
            r#"{"word_pairs": ["b|B", "a|A"], "delay_index": 5}"#,
        )
        .expect("write");

        let prefs = store.load();
        assert!(prefs.pairs.is_empty());
        assert_eq!(prefs.delay_index, 5);
        assert!(!read_raw(&store).contains_key(KEY_LEGACY_PAIRS));
    }

    #[test]
    fn unparseable_pairs_fall_back_to_empty_and_clear_legacy() {
        let (store, _dir) = store_in_temp();
        std::fs::write(
            store.path(),
            r#"{"word_pairs_json": "[broken", "word_pairs": ["x|y"], "to_language_index": 3}"#,
        )
        .expect("write");

        let prefs = store.load();
        assert!(prefs.pairs.is_empty());
        assert_eq!(prefs.to_language_index, 3);
        assert!(!read_raw(&store).contains_key(KEY_LEGACY_PAIRS));
    }

    #[test]
    fn bad_records_do_not_discard_the_rest() {
        let (store, _dir) = store_in_temp();
        std::fs::write(
            store.path(),
            r#"{"word_pairs_json": "[\"uno|one\", 42, \"nodelim\", \"dos|two\"]"}"#,
        )
        .expect("write");

        let prefs = store.load();
        assert_eq!(
            prefs.pairs,
            vec![WordPair::new("uno", "one"), WordPair::new("dos", "two")]
        );
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let (store, _dir) = store_in_temp();
        std::fs::write(store.path(), "not json at all").expect("write");
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn wrongly_typed_indices_use_defaults() {
        let (store, _dir) = store_in_temp();
        std::fs::write(store.path(), r#"{"from_language_index": "two"}"#).expect("write");
        assert_eq!(store.load().from_language_index, 0);
    }
}
