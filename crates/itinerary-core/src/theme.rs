//! Theme Preference
//!
//! Stored as `"light"` / `"dark"` under its own key, independent of the
//! itinerary document.

use std::convert::Infallible;
use std::str::FromStr;

use tracing::warn;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn load(storage: &impl KeyValueStore, key: &str) -> Self {
        match storage.get(key) {
            Ok(Some(value)) => value.parse().unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read theme: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save(self, storage: &mut impl KeyValueStore, key: &str) -> Result<(), StorageError> {
        storage.set(key, self.as_str())
    }
}

/// Unknown values fall back to light
impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        })
    }
}
