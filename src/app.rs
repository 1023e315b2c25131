//! Itinerary Editor App
//!
//! Root component: header menu, the editable form, and page chrome.

use leptos::prelude::*;
use itinerary_core::EditorConfig;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ItineraryForm, TitleBar, ToastBanner};
use crate::context::{load_theme, AppContext};
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let config = EditorConfig::default();

    // Theme is applied before the first paint of the form
    let theme = load_theme(&config);
    commands::apply_theme(theme);

    let ui = Store::new(UiState::new(theme));
    let ctx = AppContext::new(config, ui);

    // Provide context to all children
    provide_context(ui);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <TitleBar />

            <main class="container">
                <ItineraryForm />
            </main>

            <button class="scroll-top-btn" title="Back to top" on:click=move |_| commands::scroll_to_top()>
                "↑"
            </button>

            <ToastBanner />
        </div>
    }
}
