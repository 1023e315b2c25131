//! UI Components
//!
//! Reusable Leptos components.

mod activity_card;
mod basic_info_card;
mod collapse_toggle;
mod day_card;
mod delete_confirm_button;
mod field_input;
mod footer_card;
mod itinerary_form;
mod section_card;
mod title_bar;
mod toast;

pub use activity_card::ActivityCard;
pub use basic_info_card::BasicInfoCard;
pub use collapse_toggle::CollapseToggle;
pub use day_card::DayCard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field_input::FieldInput;
pub use footer_card::FooterCard;
pub use itinerary_form::ItineraryForm;
pub use section_card::SectionCard;
pub use title_bar::TitleBar;
pub use toast::ToastBanner;
