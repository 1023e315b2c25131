//! Itinerary Core
//!
//! Platform-free half of the itinerary editor:
//! - model: the itinerary document tree
//! - template: built-in starter document with computed dates
//! - store: document ownership, edits, and persistence
//! - format: plain-text chat export
//! - form: field bindings, block ids, and structural edit actions
//! - debounce: cancellable delayed tasks for auto-save

pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod format;
pub mod model;
pub mod storage;
pub mod store;
pub mod template;
pub mod theme;

mod lenient;


pub use config::EditorConfig;
pub use debounce::{Debouncer, Scheduler, TimerHandle};
pub use error::{EditError, FormatError, StorageError, StoreError};
pub use form::{BlockId, CollapseState, EditAction, FieldPath};
pub use format::format_itinerary;
pub use model::{Activity, Day, Itinerary, Section, SectionItem};
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::{ItineraryStore, LoadStatus};
pub use theme::Theme;
