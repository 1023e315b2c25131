//! Activity Card Component
//!
//! Time, description and optional sub-activities of one activity.

use leptos::prelude::*;
use itinerary_core::{EditAction, FieldPath};

use crate::components::{DeleteConfirmButton, FieldInput};
use crate::context::AppContext;

#[component]
pub fn ActivityCard(day: usize, index: usize, sub_count: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let remove = EditAction::RemoveActivity { day, activity: index };
    let add_sub = EditAction::AddSubItem { day, activity: index };

    let sub_items = if sub_count > 0 {
        view! {
            <div class="nested-bullets">
                {(0..sub_count).map(|sub| {
                    let remove_sub = EditAction::RemoveSubItem { day, activity: index, sub };
                    view! {
                        <div class="bullet-item">
                            <div class="sub-count">{sub + 1}</div>
                            <FieldInput
                                path=FieldPath::SubItem { day, activity: index, sub }
                                class="sub-item-input"
                            />
                            <DeleteConfirmButton
                                button_class="btn btn-icon"
                                label="×"
                                prompt=remove_sub.confirm_prompt().unwrap_or_default()
                                on_confirm=move |_| ctx.apply(remove_sub)
                            />
                        </div>
                    }
                }).collect_view()}
                <button class="btn btn-primary btn-small" on:click=move |_| ctx.apply(add_sub)>
                    "+ Add Sub-activity"
                </button>
            </div>
        }
        .into_any()
    } else {
        view! {
            <button class="btn btn-primary btn-small" on:click=move |_| ctx.apply(add_sub)>
                "+ Add Sub-activities"
            </button>
        }
        .into_any()
    };

    view! {
        <div class="activity-item">
            <div class="activity-count">{index + 1}</div>
            <div class="activity-header">
                <div class="activity-time-field">
                    <FieldInput
                        path=FieldPath::ActivityTime { day, activity: index }
                        class="activity-time"
                    />
                </div>
                <DeleteConfirmButton
                    button_class="btn btn-icon"
                    label="×"
                    prompt=remove.confirm_prompt().unwrap_or_default()
                    on_confirm=move |_| ctx.apply(remove)
                />
            </div>
            <div class="activity-desc-field">
                <FieldInput
                    path=FieldPath::ActivityDescription { day, activity: index }
                    class="activity-desc"
                />
            </div>
            {sub_items}
        </div>
    }
}
