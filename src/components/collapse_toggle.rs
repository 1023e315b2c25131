//! Collapse Toggle Component
//!
//! Arrow button that folds a form block, plus the matching body class.

use leptos::prelude::*;
use itinerary_core::BlockId;

use crate::context::AppContext;

/// CSS class for a block body given its collapsed state
pub fn body_class(collapsed: bool) -> &'static str {
    if collapsed {
        "section-body collapsed"
    } else {
        "section-body"
    }
}

#[component]
pub fn CollapseToggle(block: BlockId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let icon_class = move || {
        if ctx.is_collapsed(block) {
            "collapse-icon collapsed"
        } else {
            "collapse-icon"
        }
    };

    view! {
        <button
            class="collapse-btn"
            data-block=block.to_string()
            on:click=move |_| ctx.toggle_block(block)
        >
            <span class=icon_class>"▼"</span>
        </button>
    }
}
