//! Day Card Component
//!
//! One day of the trip: title plus its activity list.

use leptos::prelude::*;
use itinerary_core::{BlockId, Day, EditAction, FieldPath};

use crate::components::collapse_toggle::{body_class, CollapseToggle};
use crate::components::{ActivityCard, DeleteConfirmButton, FieldInput};
use crate::context::AppContext;

#[component]
pub fn DayCard(index: usize, day: Day) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let block = BlockId::Day(index);
    let remove = EditAction::RemoveDay { day: index };

    // Alternate shading
    let day_class = if index % 2 == 0 {
        "section day-section day-odd"
    } else {
        "section day-section day-even"
    };

    let activities = day
        .activities
        .iter()
        .enumerate()
        .map(|(act_idx, act)| {
            view! {
                <ActivityCard day=index index=act_idx sub_count=act.sub_items().len() />
            }
        })
        .collect_view();

    view! {
        <div class=day_class>
            <div class="count-number">{format!("day {}", index + 1)}</div>
            <div class="section-controls no-border-bottom">
                <CollapseToggle block=block />
                <DeleteConfirmButton
                    button_class="btn btn-danger btn-small"
                    label="Remove Day"
                    prompt=remove.confirm_prompt().unwrap_or_default()
                    on_confirm=move |_| ctx.apply(remove)
                />
            </div>
            <div class="section-header">
                <FieldInput path=FieldPath::DayTitle { day: index } class="section-title day-title" />
            </div>
            <div class=move || body_class(ctx.is_collapsed(block))>
                {activities}
                <button
                    class="btn btn-primary btn-small"
                    on:click=move |_| ctx.apply(EditAction::AddActivity { day: index })
                >
                    "+ Add Activity"
                </button>
            </div>
        </div>
    }
}
