//! Section Card Component
//!
//! Custom instruction section with numbered title/description items.

use leptos::prelude::*;
use itinerary_core::{BlockId, EditAction, FieldPath};

use crate::components::collapse_toggle::{body_class, CollapseToggle};
use crate::components::{DeleteConfirmButton, FieldInput};
use crate::context::AppContext;

#[component]
pub fn SectionCard(index: usize, item_count: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let block = BlockId::Section(index);
    let remove = EditAction::RemoveSection { section: index };

    let items = (0..item_count)
        .map(|item| {
            let remove_item = EditAction::RemoveSectionItem { section: index, item };
            view! {
                <div class="instruction-item">
                    <div class="instruction-count">{item + 1}</div>
                    <div class="instruction-header">
                        <div class="instruction-content">
                            <FieldInput
                                path=FieldPath::ItemTitle { section: index, item }
                                class="instruction-title-input"
                            />
                            <FieldInput
                                path=FieldPath::ItemDescription { section: index, item }
                                class="instruction-desc-input"
                            />
                        </div>
                        <DeleteConfirmButton
                            button_class="btn btn-icon"
                            label="×"
                            prompt=remove_item.confirm_prompt().unwrap_or_default()
                            on_confirm=move |_| ctx.apply(remove_item)
                        />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="section custom-section">
            <div class="count-number">{format!("#{}", index + 1)}</div>
            <div class="section-controls no-border-bottom">
                <CollapseToggle block=block />
                <DeleteConfirmButton
                    button_class="btn btn-danger btn-small"
                    label="Remove Section"
                    prompt=remove.confirm_prompt().unwrap_or_default()
                    on_confirm=move |_| ctx.apply(remove)
                />
            </div>
            <div class="section-header">
                <FieldInput
                    path=FieldPath::SectionTitle { section: index }
                    class="section-title section-title-input"
                />
            </div>
            <div class=move || body_class(ctx.is_collapsed(block))>
                {items}
                <button
                    class="btn btn-primary btn-small"
                    on:click=move |_| ctx.apply(EditAction::AddSectionItem { section: index })
                >
                    "+ Add Item"
                </button>
            </div>
        </div>
    }
}
