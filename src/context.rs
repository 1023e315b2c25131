//! Application Context
//!
//! Shared editor state provided via Leptos Context API: the itinerary store,
//! the auto-save debouncer, and the UI store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, info, warn};

use itinerary_core::{
    format_itinerary, BlockId, Debouncer, EditAction, EditorConfig, FieldPath, ItineraryStore,
    StoreError, Theme,
};

use crate::commands::{self, BrowserStorage, TimeoutScheduler};
use crate::store::{Toast, ToastKind, UiStateStoreFields, UiStore};

pub type DocumentStore = ItineraryStore<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Itinerary store. Structural edits notify (full form re-render);
    /// typing writes untracked so inputs keep focus.
    pub store: RwSignal<DocumentStore>,
    /// UI-only state (collapse, toast, theme, menu)
    pub ui: UiStore,
    /// Pending auto-save
    autosave: StoredValue<Debouncer<TimeoutScheduler>, LocalStorage>,
    config: StoredValue<EditorConfig>,
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

impl AppContext {
    pub fn new(config: EditorConfig, ui: UiStore) -> Self {
        let store = ItineraryStore::open(BrowserStorage, &config, today());
        info!("Editor ready with {} days", store.document().days.len());

        Self {
            store: RwSignal::new(store),
            ui,
            autosave: StoredValue::new_local(Debouncer::new(
                TimeoutScheduler,
                config.autosave_delay_ms,
            )),
            config: StoredValue::new(config),
        }
    }

    // ========================
    // Field Editing
    // ========================

    /// Current text of a field, read without subscribing
    pub fn field_value(&self, path: FieldPath) -> String {
        self.store
            .with_untracked(|s| s.document().field(path).unwrap_or_default().to_string())
    }

    /// Write keystroke input into the document and restart the auto-save window
    pub fn edit_field(&self, path: FieldPath, value: String) {
        self.store.update_untracked(|s| {
            if let Err(e) = s.set_field(path, value) {
                warn!("Dropped edit for {:?}: {}", path, e);
            }
        });

        let ctx = *self;
        self.autosave
            .update_value(|d| d.schedule(move || ctx.persist(false)));
    }

    /// Blur: skip the remaining debounce window and run the pending save now
    pub fn flush(&self) {
        self.autosave.update_value(|d| {
            if d.flush() {
                debug!("Flushed pending auto-save");
            }
        });
    }

    /// Explicit save from the menu
    pub fn save_now(&self) {
        self.flush();
        self.persist(true);
    }

    fn persist(&self, announce: bool) {
        match self.store.try_update_untracked(|s| s.save()) {
            Some(Ok(())) => {
                if announce {
                    self.notify("Saved successfully!", ToastKind::Success);
                }
            }
            Some(Err(e)) => {
                warn!("Save failed: {}", e);
                self.notify("Failed to save", ToastKind::Failure);
            }
            None => debug!("Store disposed; skipping save"),
        }
    }

    // ========================
    // Structural Editing
    // ========================

    /// Apply an add/remove. Removals are confirmed by the caller's control.
    pub fn apply(&self, action: EditAction) {
        // Typed text must reach storage even if the edit itself is rejected
        self.flush();

        match self.store.try_update(|s| s.apply(action)) {
            Some(Ok(())) => {}
            Some(Err(StoreError::Edit(e))) => warn!("Rejected {:?}: {}", action, e),
            Some(Err(e)) => {
                warn!("Saving after {:?} failed: {}", action, e);
                self.notify("Failed to save", ToastKind::Failure);
            }
            None => {}
        }
    }

    /// Replace the document with a freshly dated template
    pub fn reset_to_template(&self) {
        if !commands::confirm(
            "Are you sure you want to reset all data to original? This cannot be undone.",
        ) {
            return;
        }
        self.autosave.update_value(|d| {
            d.cancel();
        });

        let today = today();
        match self.store.try_update(|s| s.reset(today)) {
            Some(Ok(())) => {
                self.ui.collapsed().update(|c| c.expand_all());
                self.notify("Reset to original data!", ToastKind::Success);
            }
            Some(Err(e)) => {
                warn!("Reset failed: {}", e);
                self.notify("Failed to reset", ToastKind::Failure);
            }
            None => {}
        }
        self.ui.menu_open().set(false);
    }

    /// Replace the document with the empty shell
    pub fn start_blank(&self) {
        if !commands::confirm(
            "Are you sure you want to start with blank data? This will clear all current content.",
        ) {
            return;
        }
        self.autosave.update_value(|d| {
            d.cancel();
        });

        match self.store.try_update(|s| s.clear()) {
            Some(Ok(())) => {
                self.ui.collapsed().update(|c| c.expand_all());
                self.notify("Started with blank data!", ToastKind::Success);
            }
            Some(Err(e)) => {
                warn!("Clear failed: {}", e);
                self.notify("Failed to clear", ToastKind::Failure);
            }
            None => {}
        }
        self.ui.menu_open().set(false);
    }

    // ========================
    // Export
    // ========================

    /// Format the itinerary and copy it to the clipboard
    pub fn export_to_clipboard(&self) {
        self.flush();

        let text = match self.store.with_untracked(|s| format_itinerary(s.document())) {
            Ok(text) => text,
            Err(e) => {
                debug!("Export skipped: {}", e);
                self.notify("No content to copy!", ToastKind::Failure);
                return;
            }
        };

        let ctx = *self;
        spawn_local(async move {
            match commands::write_clipboard_text(&text).await {
                Ok(()) => ctx.notify("Copied to clipboard!", ToastKind::Success),
                Err(e) => {
                    warn!("{}", e);
                    ctx.notify("Failed to copy", ToastKind::Failure);
                }
            }
        });
    }

    // ========================
    // UI State
    // ========================

    pub fn is_collapsed(&self, block: BlockId) -> bool {
        self.ui.collapsed().with(|c| c.is_collapsed(block))
    }

    pub fn toggle_block(&self, block: BlockId) {
        self.ui.collapsed().update(|c| {
            c.toggle(block);
        });
    }

    pub fn toggle_theme(&self) {
        let theme = self.ui.theme().get_untracked().toggled();
        self.ui.theme().set(theme);
        commands::apply_theme(theme);

        let key = self.config.with_value(|c| c.theme_key.clone());
        if let Err(e) = theme.save(&mut BrowserStorage, &key) {
            warn!("Could not store theme: {}", e);
        }
        self.ui.menu_open().set(false);
    }

    /// Show a toast; it hides itself unless a newer one replaced it
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.ui.toast_seq().get_untracked().wrapping_add(1);
        self.ui.toast_seq().set(id);
        self.ui.toast().set(Some(Toast {
            id,
            message: message.into(),
            kind,
        }));

        let ui = self.ui;
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        commands::after_delay(duration, move || {
            let current = ui.toast().with_untracked(|t| t.as_ref().map(|t| t.id));
            if current == Some(id) {
                ui.toast().set(None);
            }
        });
    }
}

/// Read the stored theme preference
pub fn load_theme(config: &EditorConfig) -> Theme {
    Theme::load(&BrowserStorage, &config.theme_key)
}

