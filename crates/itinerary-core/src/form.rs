//! Form Bindings
//!
//! Explicit view-to-model mapping for the editor form:
//! - `FieldPath` addresses one editable text field by entity indices
//! - `BlockId` names a collapsible block (`basic`, `day-0`, `sec-1`, `footer`)
//! - `EditAction` is a structural add/remove on one of the lists

use std::collections::BTreeSet;
use std::fmt;

use crate::error::EditError;
use crate::model::{Activity, Day, Itinerary, Section, SectionItem};

// ========================
// Field Paths
// ========================

/// Address of a single text field in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Title,
    Dates,
    Organizer,
    Contacts,
    Footer,
    DayTitle { day: usize },
    ActivityTime { day: usize, activity: usize },
    ActivityDescription { day: usize, activity: usize },
    SubItem { day: usize, activity: usize, sub: usize },
    SectionTitle { section: usize },
    ItemTitle { section: usize, item: usize },
    ItemDescription { section: usize, item: usize },
}

impl FieldPath {
    pub fn label(&self) -> &'static str {
        match self {
            FieldPath::Title => "Itinerary Title",
            FieldPath::Dates => "Dates",
            FieldPath::Organizer => "Organizer",
            FieldPath::Contacts => "Contact Numbers (comma-separated)",
            FieldPath::Footer => "Footer Text",
            FieldPath::DayTitle { .. } => "Day Title",
            FieldPath::ActivityTime { .. } => "Time",
            FieldPath::ActivityDescription { .. } => "Activity Description",
            FieldPath::SubItem { .. } => "",
            FieldPath::SectionTitle { .. } => "Section Title",
            FieldPath::ItemTitle { .. } => "Title",
            FieldPath::ItemDescription { .. } => "Description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldPath::Title => "Itinerary Title",
            FieldPath::Dates => "Date range",
            FieldPath::Organizer => "Organizer name",
            FieldPath::Contacts => "e.g., 9500008901, 9500025901",
            FieldPath::Footer => "Footer message",
            FieldPath::DayTitle { .. } => "e.g., Day 1: Saturday, 17/01/2026",
            FieldPath::ActivityTime { .. } => "e.g., 01:45 AM",
            FieldPath::ActivityDescription { .. } => "Activity description",
            FieldPath::SubItem { .. } => "Sub-activity",
            FieldPath::SectionTitle { .. } => "e.g., Important Instructions",
            FieldPath::ItemTitle { .. } => "e.g., Identity",
            FieldPath::ItemDescription { .. } => "Description",
        }
    }

    /// Rendered as a textarea instead of a single-line input
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            FieldPath::Footer
                | FieldPath::ActivityDescription { .. }
                | FieldPath::ItemDescription { .. }
        )
    }
}

impl Itinerary {
    /// Current value of a field, `None` if the path points past the document
    pub fn field(&self, path: FieldPath) -> Option<&str> {
        let value = match path {
            FieldPath::Title => &self.title,
            FieldPath::Dates => &self.dates,
            FieldPath::Organizer => &self.organizer,
            FieldPath::Contacts => &self.contacts,
            FieldPath::Footer => &self.footer,
            FieldPath::DayTitle { day } => &self.days.get(day)?.title,
            FieldPath::ActivityTime { day, activity } => {
                &self.days.get(day)?.activities.get(activity)?.time
            }
            FieldPath::ActivityDescription { day, activity } => {
                &self.days.get(day)?.activities.get(activity)?.description
            }
            FieldPath::SubItem { day, activity, sub } => self
                .days
                .get(day)?
                .activities
                .get(activity)?
                .sub_items()
                .get(sub)?,
            FieldPath::SectionTitle { section } => &self.sections.get(section)?.title,
            FieldPath::ItemTitle { section, item } => {
                &self.sections.get(section)?.items.get(item)?.title
            }
            FieldPath::ItemDescription { section, item } => {
                &self.sections.get(section)?.items.get(item)?.description
            }
        };
        Some(value.as_str())
    }

    /// Overwrite one field
    pub fn set_field(&mut self, path: FieldPath, value: String) -> Result<(), EditError> {
        let slot = match path {
            FieldPath::Title => &mut self.title,
            FieldPath::Dates => &mut self.dates,
            FieldPath::Organizer => &mut self.organizer,
            FieldPath::Contacts => &mut self.contacts,
            FieldPath::Footer => &mut self.footer,
            FieldPath::DayTitle { day } => &mut day_mut(&mut self.days, day)?.title,
            FieldPath::ActivityTime { day, activity } => {
                &mut activity_mut(&mut self.days, day, activity)?.time
            }
            FieldPath::ActivityDescription { day, activity } => {
                &mut activity_mut(&mut self.days, day, activity)?.description
            }
            FieldPath::SubItem { day, activity, sub } => {
                let subs = activity_mut(&mut self.days, day, activity)?
                    .sub_items
                    .as_mut()
                    .ok_or(EditError::SubItem { index: sub, len: 0 })?;
                let len = subs.len();
                subs.get_mut(sub)
                    .ok_or(EditError::SubItem { index: sub, len })?
            }
            FieldPath::SectionTitle { section } => {
                &mut section_mut(&mut self.sections, section)?.title
            }
            FieldPath::ItemTitle { section, item } => {
                &mut item_mut(&mut self.sections, section, item)?.title
            }
            FieldPath::ItemDescription { section, item } => {
                &mut item_mut(&mut self.sections, section, item)?.description
            }
        };
        *slot = value;
        Ok(())
    }
}

fn day_mut(days: &mut [Day], index: usize) -> Result<&mut Day, EditError> {
    let len = days.len();
    days.get_mut(index).ok_or(EditError::Day { index, len })
}

fn activity_mut(days: &mut [Day], day: usize, index: usize) -> Result<&mut Activity, EditError> {
    let activities = &mut day_mut(days, day)?.activities;
    let len = activities.len();
    activities.get_mut(index).ok_or(EditError::Activity { index, len })
}

fn section_mut(sections: &mut [Section], index: usize) -> Result<&mut Section, EditError> {
    let len = sections.len();
    sections.get_mut(index).ok_or(EditError::Section { index, len })
}

fn item_mut(
    sections: &mut [Section],
    section: usize,
    index: usize,
) -> Result<&mut SectionItem, EditError> {
    let items = &mut section_mut(sections, section)?.items;
    let len = items.len();
    items.get_mut(index).ok_or(EditError::SectionItem { index, len })
}

// ========================
// Structural Edits
// ========================

/// Add or remove one entry in one of the document's lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    AddDay,
    RemoveDay { day: usize },
    AddActivity { day: usize },
    RemoveActivity { day: usize, activity: usize },
    AddSubItem { day: usize, activity: usize },
    RemoveSubItem { day: usize, activity: usize, sub: usize },
    AddSection,
    RemoveSection { section: usize },
    AddSectionItem { section: usize },
    RemoveSectionItem { section: usize, item: usize },
}

impl EditAction {
    /// Question shown before a destructive edit
    pub fn confirm_prompt(&self) -> Option<&'static str> {
        match self {
            EditAction::RemoveDay { .. } => Some("Remove this day?"),
            EditAction::RemoveActivity { .. } => Some("Remove this activity?"),
            EditAction::RemoveSubItem { .. } => Some("Remove this sub-activity?"),
            EditAction::RemoveSection { .. } => Some("Remove this section?"),
            EditAction::RemoveSectionItem { .. } => Some("Remove this item?"),
            _ => None,
        }
    }

    /// Apply to `doc`. Indices are checked first; on error nothing changed.
    pub fn apply(self, doc: &mut Itinerary) -> Result<(), EditError> {
        match self {
            EditAction::AddDay => doc.days.push(Day::default()),
            EditAction::RemoveDay { day } => {
                day_mut(&mut doc.days, day)?;
                doc.days.remove(day);
            }
            EditAction::AddActivity { day } => {
                day_mut(&mut doc.days, day)?.activities.push(Activity::default());
            }
            EditAction::RemoveActivity { day, activity } => {
                activity_mut(&mut doc.days, day, activity)?;
                doc.days[day].activities.remove(activity);
            }
            EditAction::AddSubItem { day, activity } => {
                activity_mut(&mut doc.days, day, activity)?
                    .sub_items
                    .get_or_insert_with(Vec::new)
                    .push(String::new());
            }
            EditAction::RemoveSubItem { day, activity, sub } => {
                let act = activity_mut(&mut doc.days, day, activity)?;
                let len = act.sub_items().len();
                if sub >= len {
                    return Err(EditError::SubItem { index: sub, len });
                }
                if let Some(subs) = act.sub_items.as_mut() {
                    subs.remove(sub);
                }
                if act.sub_items().is_empty() {
                    act.sub_items = None;
                }
            }
            EditAction::AddSection => doc.sections.push(Section::default()),
            EditAction::RemoveSection { section } => {
                section_mut(&mut doc.sections, section)?;
                doc.sections.remove(section);
            }
            EditAction::AddSectionItem { section } => {
                section_mut(&mut doc.sections, section)?
                    .items
                    .push(SectionItem::default());
            }
            EditAction::RemoveSectionItem { section, item } => {
                item_mut(&mut doc.sections, section, item)?;
                doc.sections[section].items.remove(item);
            }
        }
        Ok(())
    }
}

// ========================
// Collapsible Blocks
// ========================

/// One collapsible block of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockId {
    Basic,
    Day(usize),
    Section(usize),
    Footer,
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Basic => write!(f, "basic"),
            BlockId::Day(idx) => write!(f, "day-{}", idx),
            BlockId::Section(idx) => write!(f, "sec-{}", idx),
            BlockId::Footer => write!(f, "footer"),
        }
    }
}

/// Which blocks are collapsed. UI-only; never persisted with the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: BTreeSet<BlockId>,
}

impl CollapseState {
    pub fn is_collapsed(&self, block: BlockId) -> bool {
        self.collapsed.contains(&block)
    }

    /// Flip a block; returns the new collapsed state
    pub fn toggle(&mut self, block: BlockId) -> bool {
        if self.collapsed.remove(&block) {
            false
        } else {
            self.collapsed.insert(block);
            true
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Itinerary {
        Itinerary {
            title: "Trip".to_string(),
            days: vec![Day {
                title: "Day 1".to_string(),
                activities: vec![
                    Activity::new("09:00 AM", "Breakfast"),
                    Activity::new("10:00 AM", "Tour").with_sub_items(["Museum"]),
                ],
            }],
            sections: vec![Section {
                title: "Notes".to_string(),
                items: vec![SectionItem::new("ID", "Bring ID")],
            }],
            ..Itinerary::default()
        }
    }

    #[test]
    fn test_field_lookup() {
        let doc = sample();
        assert_eq!(doc.field(FieldPath::Title), Some("Trip"));
        assert_eq!(
            doc.field(FieldPath::SubItem { day: 0, activity: 1, sub: 0 }),
            Some("Museum")
        );
        assert_eq!(doc.field(FieldPath::SubItem { day: 0, activity: 0, sub: 0 }), None);
        assert_eq!(doc.field(FieldPath::DayTitle { day: 3 }), None);
    }

    #[test]
    fn test_set_field() {
        let mut doc = sample();
        doc.set_field(FieldPath::ItemDescription { section: 0, item: 0 }, "Passport".into())
            .unwrap();
        assert_eq!(doc.sections[0].items[0].description, "Passport");

        let err = doc
            .set_field(FieldPath::ActivityTime { day: 0, activity: 5 }, "x".into())
            .unwrap_err();
        assert_eq!(err, EditError::Activity { index: 5, len: 2 });
    }

    #[test]
    fn test_add_sub_item_creates_list() {
        let mut doc = sample();
        EditAction::AddSubItem { day: 0, activity: 0 }.apply(&mut doc).unwrap();
        assert_eq!(doc.days[0].activities[0].sub_items, Some(vec![String::new()]));
    }

    #[test]
    fn test_remove_last_sub_item_drops_field() {
        let mut doc = sample();
        EditAction::RemoveSubItem { day: 0, activity: 1, sub: 0 }
            .apply(&mut doc)
            .unwrap();
        assert_eq!(doc.days[0].activities[1].sub_items, None);
    }

    #[test]
    fn test_out_of_range_removal_leaves_doc_untouched() {
        let mut doc = sample();
        let before = doc.clone();

        let cases = [
            EditAction::RemoveDay { day: 1 },
            EditAction::RemoveActivity { day: 0, activity: 2 },
            EditAction::RemoveSubItem { day: 0, activity: 0, sub: 0 },
            EditAction::RemoveSection { section: 4 },
            EditAction::RemoveSectionItem { section: 0, item: 1 },
            EditAction::AddActivity { day: 9 },
        ];
        for action in cases {
            assert!(action.apply(&mut doc).is_err(), "{:?} should fail", action);
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn test_adds_append_defaults() {
        let mut doc = sample();
        EditAction::AddDay.apply(&mut doc).unwrap();
        EditAction::AddActivity { day: 1 }.apply(&mut doc).unwrap();
        EditAction::AddSection.apply(&mut doc).unwrap();
        EditAction::AddSectionItem { section: 1 }.apply(&mut doc).unwrap();

        assert_eq!(doc.days[1].activities, vec![Activity::default()]);
        assert_eq!(doc.sections[1].items, vec![SectionItem::default()]);
    }

    #[test]
    fn test_only_removals_need_confirmation() {
        assert!(EditAction::RemoveDay { day: 0 }.confirm_prompt().is_some());
        assert!(EditAction::RemoveSubItem { day: 0, activity: 0, sub: 0 }
            .confirm_prompt()
            .is_some());
        assert_eq!(EditAction::AddDay.confirm_prompt(), None);
        assert_eq!(EditAction::AddSection.confirm_prompt(), None);
    }

    #[test]
    fn test_block_ids() {
        assert_eq!(BlockId::Day(2).to_string(), "day-2");
        assert_eq!(BlockId::Section(0).to_string(), "sec-0");
        assert_eq!(BlockId::Basic.to_string(), "basic");
        assert_eq!(BlockId::Footer.to_string(), "footer");
    }

    #[test]
    fn test_collapse_toggle() {
        let mut state = CollapseState::default();
        assert!(state.toggle(BlockId::Basic));
        assert!(state.is_collapsed(BlockId::Basic));
        assert!(!state.toggle(BlockId::Basic));

        state.toggle(BlockId::Day(0));
        state.expand_all();
        assert!(!state.is_collapsed(BlockId::Day(0)));
    }
}
