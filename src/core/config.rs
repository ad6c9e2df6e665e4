//! Configuration types.
//!
//! - `SelectionConfig`: which expansions and card types the user picked.
//!   This is the only state that outlives a page load.
//! - `ConfigStore`: key-value persistence the host provides (localStorage
//!   in a browser, a map in tests).
//! - `DisplayConfig`: presentation constants for the placeholder and images.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{DeckError, DeckResult};

/// Key the selection configuration is stored under.
pub const SAVED_CONFIG_KEY: &str = "savedConfig";

/// Persisted selection of expansions and card types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    /// Chosen expansions, in the order they were selected.
    pub selected_games: Vec<String>,

    /// Chosen card types. Empty means "never chosen", not "none".
    #[serde(default)]
    pub selected_card_types: Vec<String>,
}

impl SelectionConfig {
    /// Create a configuration from expansion and type lists.
    pub fn new(
        games: impl IntoIterator<Item = impl Into<String>>,
        card_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            selected_games: games.into_iter().map(Into::into).collect(),
            selected_card_types: card_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> DeckResult<String> {
        serde_json::to_string(self).map_err(DeckError::Config)
    }

    /// Parse the stored JSON form.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        serde_json::from_str(json).map_err(DeckError::Config)
    }

    /// Read the configuration from a store, if one was saved.
    pub fn load(store: &impl ConfigStore) -> DeckResult<Option<Self>> {
        match store.load(SAVED_CONFIG_KEY) {
            Some(json) => Self::from_json(&json).map(Some),
            None => Ok(None),
        }
    }

    /// Write the configuration to a store.
    pub fn save(&self, store: &mut impl ConfigStore) -> DeckResult<()> {
        let json = self.to_json()?;
        store.save(SAVED_CONFIG_KEY, json);
        Ok(())
    }
}

/// Host-provided key-value persistence.
pub trait ConfigStore {
    /// Read the value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: String);
}

/// In-process store, used by tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Presentation constants for rendering a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Directory card images are served from (with trailing slash).
    pub image_dir: String,

    /// Image shown while the cursor is on the placeholder.
    pub placeholder_image: String,

    /// Caption shown while the cursor is on the placeholder.
    pub placeholder_title: String,

    /// How long a notice stays visible, in milliseconds.
    pub notice_millis: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            image_dir: "cardimages/".to_string(),
            placeholder_image: "back.jpg".to_string(),
            placeholder_title: "Start the Game".to_string(),
            notice_millis: 3000,
        }
    }
}

impl DisplayConfig {
    /// Use a different image directory.
    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<String>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Use a different placeholder image.
    #[must_use]
    pub fn with_placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.placeholder_image = image.into();
        self
    }

    /// Use a different notice lifetime.
    #[must_use]
    pub fn with_notice_millis(mut self, millis: u64) -> Self {
        self.notice_millis = millis;
        self
    }

    /// Full path to an image file.
    #[must_use]
    pub fn image_path(&self, file: &str) -> String {
        format!("{}{}", self.image_dir, file)
    }
}
