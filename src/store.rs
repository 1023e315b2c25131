//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds page state
//! that never goes into the itinerary document.

use leptos::prelude::*;
use reactive_stores::Store;
use itinerary_core::{CollapseState, Theme};

/// Toast colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// Short-lived notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Page-level UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Collapsed blocks of the form
    pub collapsed: CollapseState,
    /// Toast currently on screen
    pub toast: Option<Toast>,
    /// Last toast id handed out
    pub toast_seq: u32,
    /// Active colour theme
    pub theme: Theme,
    /// Whether the header menu is open
    pub menu_open: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
