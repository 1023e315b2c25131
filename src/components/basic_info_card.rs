//! Basic Information Card
//!
//! Title, dates, organizer and contacts.

use leptos::prelude::*;
use itinerary_core::{BlockId, FieldPath};

use crate::components::collapse_toggle::{body_class, CollapseToggle};
use crate::components::FieldInput;
use crate::context::AppContext;

const FIELDS: &[FieldPath] = &[
    FieldPath::Title,
    FieldPath::Dates,
    FieldPath::Organizer,
    FieldPath::Contacts,
];

#[component]
pub fn BasicInfoCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let block = BlockId::Basic;

    view! {
        <div class="section">
            <div class="section-controls">
                <CollapseToggle block=block />
                <div class="section-header">
                    <div class="form-label">"Basic Information"</div>
                </div>
            </div>
            <div class=move || body_class(ctx.is_collapsed(block))>
                {FIELDS.iter().map(|path| view! {
                    <div class="form-group">
                        <FieldInput path=*path />
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
