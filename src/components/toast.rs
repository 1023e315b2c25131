//! Toast Component
//!
//! Fire-and-forget feedback banner driven by the UI store.

use leptos::prelude::*;

use crate::store::{use_ui_store, ToastKind, UiStateStoreFields};

#[component]
pub fn ToastBanner() -> impl IntoView {
    let ui = use_ui_store();

    move || {
        ui.toast().get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Failure => "toast fail",
            };
            view! { <div class=class role="status">{toast.message}</div> }
        })
    }
}
