//! Field Input Component
//!
//! One labelled input or textarea bound to a document field.

use leptos::prelude::*;
use itinerary_core::FieldPath;

use crate::context::AppContext;

/// Text field bound two-way to `path`.
///
/// Typing writes into the store and restarts the auto-save window; leaving
/// the field saves immediately.
#[component]
pub fn FieldInput(
    path: FieldPath,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Read once: the form is rebuilt after structural edits, and typing
    // must not re-render the input under the cursor
    let value = ctx.field_value(path);
    let label = path.label();

    let input = if path.is_multiline() {
        view! {
            <textarea
                class=class
                placeholder=path.placeholder()
                prop:value=value
                on:input=move |ev| ctx.edit_field(path, event_target_value(&ev))
                on:blur=move |_| ctx.flush()
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class=class
                placeholder=path.placeholder()
                prop:value=value
                on:input=move |ev| ctx.edit_field(path, event_target_value(&ev))
                on:blur=move |_| ctx.flush()
            />
        }
        .into_any()
    };

    view! {
        {(!label.is_empty()).then(|| view! { <label class="form-label">{label}</label> })}
        {input}
    }
}
