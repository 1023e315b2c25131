//! Itinerary Form Component
//!
//! The whole editable document. Rebuilt from the store after every
//! structural edit, reset, or clear; keystrokes never trigger a rebuild.

use leptos::prelude::*;
use itinerary_core::EditAction;

use crate::components::{BasicInfoCard, DayCard, FooterCard, SectionCard};
use crate::context::AppContext;

#[component]
pub fn ItineraryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = move || {
        let doc = ctx.store.with(|s| s.document().clone());

        let days = doc
            .days
            .into_iter()
            .enumerate()
            .map(|(idx, day)| {
                view! {
                    <DayCard index=idx day=day />
                    <div class="separator"></div>
                }
            })
            .collect_view();

        let sections = doc
            .sections
            .iter()
            .enumerate()
            .map(|(idx, section)| {
                view! {
                    <SectionCard index=idx item_count=section.items.len() />
                    <div class="separator"></div>
                }
            })
            .collect_view();

        view! {
            <BasicInfoCard />
            <div class="separator"></div>

            {days}
            <button class="btn btn-success btn-center" on:click=move |_| ctx.apply(EditAction::AddDay)>
                "+ Add Day"
            </button>
            <div class="separator"></div>

            {sections}
            <button class="btn btn-success btn-center" on:click=move |_| ctx.apply(EditAction::AddSection)>
                "+ Add Section"
            </button>
            <div class="separator"></div>

            <FooterCard />
        }
    };

    view! {
        <div id="content">
            {form}
            <div class="actions">
                <button class="btn btn-success btn-export" on:click=move |_| ctx.export_to_clipboard()>
                    "Copy Formatted Text"
                </button>
            </div>
        </div>
    }
}
