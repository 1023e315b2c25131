//! Footer Card Component

use leptos::prelude::*;
use itinerary_core::{BlockId, FieldPath};

use crate::components::collapse_toggle::{body_class, CollapseToggle};
use crate::components::FieldInput;
use crate::context::AppContext;

#[component]
pub fn FooterCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let block = BlockId::Footer;

    view! {
        <div class="section">
            <div class="section-controls">
                <CollapseToggle block=block />
                <div class="section-header">
                    <div class="form-label">"Footer Message"</div>
                </div>
            </div>
            <div class=move || body_class(ctx.is_collapsed(block))>
                <div class="form-group">
                    <FieldInput path=FieldPath::Footer />
                </div>
            </div>
        </div>
    }
}
