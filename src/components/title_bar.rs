//! Title Bar Component
//!
//! Page header with the hamburger menu (save, theme, reset, start blank).

use leptos::prelude::*;
use itinerary_core::Theme;

use crate::context::AppContext;
use crate::store::UiStateStoreFields;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    let toggle_menu = move |_| ui.menu_open().update(|open| *open = !*open);

    let menu_class = move || {
        if ui.menu_open().get() {
            "dropdown-menu show"
        } else {
            "dropdown-menu"
        }
    };

    let theme_label = move || match ui.theme().get() {
        Theme::Light => "☾ Dark Mode",
        Theme::Dark => "☀ Light Mode",
    };

    view! {
        <header class="header">
            <h1 class="header-title">"Itinerary Editor"</h1>
            <button class="hamburger-btn" title="Menu" on:click=toggle_menu>
                "☰"
            </button>
        </header>

        // Click outside the menu closes it
        <Show when=move || ui.menu_open().get()>
            <div class="menu-backdrop" on:click=move |_| ui.menu_open().set(false)></div>
        </Show>

        <div class=menu_class>
            <button class="menu-item" on:click=move |_| {
                ctx.save_now();
                ui.menu_open().set(false);
            }>
                "Save"
            </button>
            <button class="menu-item" on:click=move |_| ctx.toggle_theme()>
                {theme_label}
            </button>
            <button class="menu-item" on:click=move |_| ctx.reset_to_template()>
                "Reset to Original"
            </button>
            <button class="menu-item danger" on:click=move |_| ctx.start_blank()>
                "Start Blank"
            </button>
        </div>
    }
}
