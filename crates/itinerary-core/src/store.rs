//! Itinerary Store
//!
//! Owns the document for the session and persists it as JSON under a single
//! key of a `KeyValueStore`.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::{StoreError, StoreResult};
use crate::form::{EditAction, FieldPath};
use crate::model::Itinerary;
use crate::storage::KeyValueStore;
use crate::template;

/// What `load()` found under the document key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// A stored document was parsed and installed
    Restored,
    /// Nothing stored (or the backend could not be read)
    Missing,
    /// Stored data was unreadable and has been removed
    Corrupted,
}

pub struct ItineraryStore<S> {
    storage: S,
    document_key: String,
    template_offsets: Vec<i64>,
    document: Itinerary,
}

impl<S: KeyValueStore> ItineraryStore<S> {
    /// Store holding the empty shell; nothing is read yet
    pub fn new(storage: S, config: &EditorConfig) -> Self {
        Self {
            storage,
            document_key: config.document_key.clone(),
            template_offsets: config.template_offsets.clone(),
            document: Itinerary::empty(),
        }
    }

    /// Session start: restore the saved document, or fall back to the template
    pub fn open(storage: S, config: &EditorConfig, today: NaiveDate) -> Self {
        let mut store = Self::new(storage, config);
        if store.load() != LoadStatus::Restored {
            store.document = template::generate(today, &store.template_offsets);
        }
        store
    }

    pub fn document(&self) -> &Itinerary {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the document with the stored one.
    ///
    /// Missing or malformed data leaves the empty shell in place; malformed
    /// data is also removed from storage.
    pub fn load(&mut self) -> LoadStatus {
        let raw = match self.storage.get(&self.document_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.document = Itinerary::empty();
                return LoadStatus::Missing;
            }
            Err(e) => {
                warn!("Could not read '{}': {}", self.document_key, e);
                self.document = Itinerary::empty();
                return LoadStatus::Missing;
            }
        };

        match serde_json::from_str::<Itinerary>(&raw) {
            Ok(doc) => {
                debug!("Restored itinerary with {} days", doc.days.len());
                self.document = doc;
                LoadStatus::Restored
            }
            Err(e) => {
                warn!("Discarding malformed itinerary data: {}", e);
                if let Err(e) = self.storage.remove(&self.document_key) {
                    warn!("Could not clear '{}': {}", self.document_key, e);
                }
                self.document = Itinerary::empty();
                LoadStatus::Corrupted
            }
        }
    }

    /// Serialize the whole document and overwrite the stored copy
    pub fn save(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.document)?;
        self.storage.set(&self.document_key, &json)?;
        debug!("Saved itinerary ({} bytes)", json.len());
        Ok(())
    }

    /// Drop stored data and start over from a template dated from `today`
    pub fn reset(&mut self, today: NaiveDate) -> StoreResult<()> {
        self.storage.remove(&self.document_key)?;
        self.document = template::generate(today, &self.template_offsets);
        info!("Reset itinerary to template for {}", today);
        Ok(())
    }

    /// Drop stored data and start from the empty shell
    pub fn clear(&mut self) -> StoreResult<()> {
        self.storage.remove(&self.document_key)?;
        self.document = Itinerary::empty();
        info!("Cleared itinerary");
        Ok(())
    }

    /// Write one text field. Not persisted here; callers debounce the save.
    pub fn set_field(&mut self, path: FieldPath, value: String) -> StoreResult<()> {
        self.document.set_field(path, value).map_err(StoreError::from)
    }

    /// Apply a structural edit and persist right away.
    ///
    /// A rejected edit touches neither the document nor storage. A failed
    /// save keeps the edit in memory and returns the storage error.
    pub fn apply(&mut self, action: EditAction) -> StoreResult<()> {
        action.apply(&mut self.document)?;
        debug!("Applied {:?}", action);
        self.save()
    }
}
