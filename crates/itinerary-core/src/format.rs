//! Chat Export Formatter
//!
//! Turns the itinerary into plain text with `*bold*` markers, ready to paste
//! into a messaging app. Blank fields are left out.

use crate::error::FormatError;
use crate::model::{Activity, Day, Itinerary, Section, SectionItem};

const RULE: &str = "--------------------------";
const DAY_RULE: &str = "-------------";

fn present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Format the whole document.
///
/// Returns `FormatError::NothingToExport` when every field is blank.
pub fn format_itinerary(doc: &Itinerary) -> Result<String, FormatError> {
    let mut text = String::new();

    write_header(&mut text, doc);
    if !text.is_empty() {
        text.push('\n');
        text.push_str(RULE);
        text.push_str("\n\n");
    }

    let last_day = doc.days.len().saturating_sub(1);
    for (idx, day) in doc.days.iter().enumerate() {
        if !present(&day.title) && day.activities.is_empty() {
            continue;
        }
        write_day(&mut text, day);
        if idx < last_day {
            text.push('\n');
            text.push_str(DAY_RULE);
            text.push_str("\n\n");
        } else {
            text.push('\n');
        }
    }

    for section in &doc.sections {
        write_section(&mut text, section);
    }

    if present(&doc.footer) {
        text.push_str(RULE);
        text.push_str("\n\n");
        text.push_str(&format!("*{}*\n", doc.footer));
    }

    if !present(&text) {
        return Err(FormatError::NothingToExport);
    }
    Ok(text)
}

fn write_header(text: &mut String, doc: &Itinerary) {
    if present(&doc.title) {
        text.push_str(&format!("*{}*\n\n", doc.title));
    }
    if present(&doc.dates) {
        text.push_str(&format!("Dates: *{}*\n", doc.dates));
    }
    if present(&doc.organizer) {
        text.push_str(&format!("Organizer: *{}*", doc.organizer));
        if present(&doc.contacts) {
            text.push_str(&format!(" ( {} )", doc.contacts));
        }
        text.push('\n');
    } else if present(&doc.contacts) {
        text.push_str(&format!("Contact: {}\n", doc.contacts));
    }
}

fn write_day(text: &mut String, day: &Day) {
    if present(&day.title) {
        text.push_str(&format!("*{}*\n\n", day.title));
    }
    for act in &day.activities {
        write_activity(text, act);
    }
}

fn write_activity(text: &mut String, act: &Activity) {
    match (present(&act.time), present(&act.description)) {
        (false, false) => return,
        (true, true) => text.push_str(&format!("• *{}*: {}\n", act.time, act.description)),
        (true, false) => text.push_str(&format!("• *{}*\n", act.time)),
        (false, true) => text.push_str(&format!("• {}\n", act.description)),
    }
    for sub in act.sub_items().iter().filter(|s| present(s)) {
        text.push_str(&format!("     - {}\n", sub));
    }
}

fn item_has_content(item: &SectionItem) -> bool {
    present(&item.title) || present(&item.description)
}

fn write_section(text: &mut String, section: &Section) {
    if !section.items.iter().any(item_has_content) {
        return;
    }

    text.push_str(RULE);
    text.push_str("\n\n");
    if present(&section.title) {
        text.push_str(&format!("*{}*\n\n", section.title));
    }

    let numbered = section.items.iter().filter(|item| item_has_content(item));
    for (n, item) in (1..).zip(numbered) {
        if present(&item.title) {
            text.push_str(&format!("*{}. {}*", n, item.title));
            if present(&item.description) {
                text.push_str(&format!(": {}", item.description));
            }
            text.push('\n');
        } else {
            text.push_str(&format!("*{}.* {}\n", n, item.description));
        }
    }
    text.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_document_has_nothing_to_export() {
        assert_eq!(
            format_itinerary(&Itinerary::empty()),
            Err(FormatError::NothingToExport)
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let doc = Itinerary {
            title: "   ".to_string(),
            footer: "\n".to_string(),
            days: vec![Day {
                title: " ".to_string(),
                activities: vec![Activity::new(" ", "")],
            }],
            ..Itinerary::default()
        };
        assert_eq!(format_itinerary(&doc), Err(FormatError::NothingToExport));
    }

    #[test]
    fn test_header_with_organizer_and_contacts() {
        let doc = Itinerary {
            title: "Trip".to_string(),
            organizer: "Jane".to_string(),
            contacts: "555-1234".to_string(),
            ..Itinerary::default()
        };
        assert_eq!(
            format_itinerary(&doc).unwrap(),
            "*Trip*\n\nOrganizer: *Jane* ( 555-1234 )\n\n--------------------------\n\n"
        );
    }

    #[test]
    fn test_contacts_without_organizer() {
        let doc = Itinerary {
            dates: "May 01 - May 03, 2026".to_string(),
            contacts: "555-1234".to_string(),
            ..Itinerary::default()
        };
        assert_eq!(
            format_itinerary(&doc).unwrap(),
            "Dates: *May 01 - May 03, 2026*\nContact: 555-1234\n\n--------------------------\n\n"
        );
    }

    #[test]
    fn test_day_with_activity() {
        let doc = Itinerary {
            days: vec![Day {
                title: "Day 1".to_string(),
                activities: vec![Activity::new("09:00 AM", "Breakfast")],
            }],
            ..Itinerary::default()
        };
        let text = format_itinerary(&doc).unwrap();
        assert!(text.contains("*Day 1*\n\n• *09:00 AM*: Breakfast\n"));
        assert_eq!(text, "*Day 1*\n\n• *09:00 AM*: Breakfast\n\n");
    }

    #[test]
    fn test_activity_variants_and_sub_items() {
        let doc = Itinerary {
            days: vec![
                Day {
                    title: "Day 1".to_string(),
                    activities: vec![
                        Activity::new("08:00 AM", ""),
                        Activity::new("", "Free time"),
                        Activity::new("", ""),
                        Activity::new("09:00 AM", "Tour:").with_sub_items(["Museum", " ", "Park"]),
                    ],
                },
                Day {
                    title: "Day 2".to_string(),
                    activities: vec![],
                },
            ],
            ..Itinerary::default()
        };
        assert_eq!(
            format_itinerary(&doc).unwrap(),
            "*Day 1*\n\n\
             • *08:00 AM*\n\
             • Free time\n\
             • *09:00 AM*: Tour:\n\
             \x20    - Museum\n\
             \x20    - Park\n\
             \n-------------\n\n\
             *Day 2*\n\n\n"
        );
    }

    #[test]
    fn test_empty_day_is_skipped() {
        let doc = Itinerary {
            days: vec![
                Day::default(),
                Day {
                    title: "Day 2".to_string(),
                    activities: vec![],
                },
            ],
            ..Itinerary::default()
        };
        assert_eq!(format_itinerary(&doc).unwrap(), "*Day 2*\n\n\n");
    }

    #[test]
    fn test_separator_follows_index_not_last_emitted_day() {
        // The trailing blank day is skipped, but Day 1 is not last by index
        let doc = Itinerary {
            days: vec![
                Day {
                    title: "Day 1".to_string(),
                    activities: vec![],
                },
                Day::default(),
            ],
            ..Itinerary::default()
        };
        assert_eq!(format_itinerary(&doc).unwrap(), "*Day 1*\n\n\n-------------\n\n");
    }

    #[test]
    fn test_section_numbering_skips_blank_items() {
        let doc = Itinerary {
            sections: vec![Section {
                title: "Notes".to_string(),
                items: vec![
                    SectionItem::new("", "Bring ID"),
                    SectionItem::new("", ""),
                    SectionItem::new("Currency", "Carry cash"),
                    SectionItem::new("Weather", ""),
                ],
            }],
            ..Itinerary::default()
        };
        assert_eq!(
            format_itinerary(&doc).unwrap(),
            "--------------------------\n\n\
             *Notes*\n\n\
             *1.* Bring ID\n\
             *2. Currency*: Carry cash\n\
             *3. Weather*\n\n"
        );
    }

    #[test]
    fn test_section_without_content_is_skipped() {
        let doc = Itinerary {
            sections: vec![
                Section {
                    title: "Empty".to_string(),
                    items: vec![SectionItem::new(" ", "")],
                },
                Section {
                    title: "Titled only".to_string(),
                    items: vec![],
                },
            ],
            footer: "Bye".to_string(),
            ..Itinerary::default()
        };
        assert_eq!(
            format_itinerary(&doc).unwrap(),
            "--------------------------\n\n*Bye*\n"
        );
    }

    #[test]
    fn test_template_exports() {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let doc = crate::template::generate(today, &[30, 31, 32]);
        let text = format_itinerary(&doc).unwrap();

        assert!(text.starts_with(
            "*International Tour*\n\n\
             Dates: *Jan 30 - Feb 01, 2026*\n\
             Organizer: *Global Travels* ( 9999999999, 8888888888 )\n\n"
        ));
        assert!(text.contains("*Day 2: Saturday, 31/01/2026*\n\n• *08:00 AM*: Breakfast at Hotel.\n"));
        assert!(text.contains("     - Grand Monument\n"));
        assert!(text.contains("*4. Contact*: Keep the organizer's contact number handy.\n"));
        assert!(text.ends_with("*Have a Safe Journey! ✈️ \"Travel is Life\"*\n"));
    }
}
