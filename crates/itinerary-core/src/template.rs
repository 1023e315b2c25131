//! Built-in Template
//!
//! Starter itinerary for a three-day trip. Day titles and the date range are
//! computed from an injected "today" so results are reproducible.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::{Activity, Day, Itinerary, Section, SectionItem};

/// Calendar facts shown for one template day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    /// `DD/MM/YYYY`
    pub full_date: String,
    /// e.g. `Friday`
    pub weekday: String,
    /// e.g. `Jan 30`
    pub short: String,
    pub year: i32,
}

impl DayInfo {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            full_date: date.format("%d/%m/%Y").to_string(),
            weekday: date.format("%A").to_string(),
            short: date.format("%b %d").to_string(),
            year: date.year(),
        }
    }
}

/// `today + offset` for each offset
pub fn trip_dates(today: NaiveDate, offsets: &[i64]) -> Vec<DayInfo> {
    offsets
        .iter()
        .map(|offset| DayInfo::from_date(today + Duration::days(*offset)))
        .collect()
}

/// `Jan 30 - Feb 01, 2026`; the year is taken from the last day
pub fn date_range(first: &DayInfo, last: &DayInfo) -> String {
    format!("{} - {}, {}", first.short, last.short, last.year)
}

/// `Day 1: Friday, 30/01/2026`
pub fn day_title(number: usize, info: &DayInfo) -> String {
    format!("Day {}: {}, {}", number, info.weekday, info.full_date)
}

/// Activities per template day, in order
fn day_activities(index: usize) -> Vec<Activity> {
    match index {
        0 => vec![
            Activity::new("04:00 AM", "Report at International Airport Terminal."),
            Activity::new("07:00 AM", "Flight departs to Destination."),
            Activity::new("01:00 PM", "Arrive at Destination Airport."),
            Activity::new("02:30 PM", "Transfer to Hotel & Check-in."),
            Activity::new("05:00 PM", "Evening City Walking Tour."),
            Activity::new("08:00 PM", "Dinner at City Center."),
            Activity::new("10:00 PM", "Return to Hotel. Stay."),
        ],
        1 => vec![
            Activity::new("08:00 AM", "Breakfast at Hotel."),
            Activity::new("09:00 AM", "Visit Major Landmarks & Museum:").with_sub_items([
                "Historic City Center",
                "Famous National Park",
                "Grand Monument",
            ]),
            Activity::new("01:00 PM", "Lunch at Local Cuisine Restaurant."),
            Activity::new("03:00 PM", "Visit Scenic Viewpoint / River Cruise."),
            Activity::new("06:00 PM", "Shopping at Famous Market Square."),
            Activity::new("09:00 PM", "Gala Dinner with Cultural Show."),
        ],
        2 => vec![
            Activity::new("08:00 AM", "Breakfast & Hotel Checkout."),
            Activity::new("10:00 AM", "Free time for leisure / Last minute shopping."),
            Activity::new("12:00 PM", "Proceed to Airport."),
            Activity::new("03:00 PM", "Flight departs to Home Country."),
            Activity::new("09:00 PM", "Arrive at Home Airport."),
        ],
        _ => Vec::new(),
    }
}

fn instructions() -> Section {
    Section {
        title: "Important Instructions".to_string(),
        items: vec![
            SectionItem::new("Documents", "Carry Original Passport and Visa copies."),
            SectionItem::new("Currency", "Carry sufficient Forex/Cash for personal expenses."),
            SectionItem::new("Weather", "Check weather forecast and pack accordingly."),
            SectionItem::new("Contact", "Keep the organizer's contact number handy."),
        ],
    }
}

/// Build the template document for a trip starting `offsets[0]` days after `today`
pub fn generate(today: NaiveDate, offsets: &[i64]) -> Itinerary {
    let infos = trip_dates(today, offsets);

    let dates = match (infos.first(), infos.last()) {
        (Some(first), Some(last)) => date_range(first, last),
        _ => String::new(),
    };

    let days = infos
        .iter()
        .enumerate()
        .map(|(idx, info)| Day {
            title: day_title(idx + 1, info),
            activities: day_activities(idx),
        })
        .collect();

    Itinerary {
        title: "International Tour".to_string(),
        dates,
        organizer: "Global Travels".to_string(),
        contacts: "9999999999, 8888888888".to_string(),
        days,
        sections: vec![instructions()],
        footer: "Have a Safe Journey! ✈️ \"Travel is Life\"".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_titles_follow_offsets() {
        // 2025-12-31 + 30 = 2026-01-30 (Friday)
        let doc = generate(date(2025, 12, 31), &[30, 31, 32]);
        let titles: Vec<&str> = doc.days.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Day 1: Friday, 30/01/2026",
                "Day 2: Saturday, 31/01/2026",
                "Day 3: Sunday, 01/02/2026",
            ]
        );
    }

    #[test]
    fn test_date_range_spans_months() {
        let doc = generate(date(2025, 12, 31), &[30, 31, 32]);
        assert_eq!(doc.dates, "Jan 30 - Feb 01, 2026");
    }

    #[test]
    fn test_date_range_uses_last_year() {
        // 2026-11-30 + 30 = 2026-12-30, +32 = 2027-01-01
        let doc = generate(date(2026, 11, 30), &[30, 31, 32]);
        assert_eq!(doc.dates, "Dec 30 - Jan 01, 2027");
        assert_eq!(doc.days[0].title, "Day 1: Wednesday, 30/12/2026");
        assert_eq!(doc.days[2].title, "Day 3: Friday, 01/01/2027");
    }

    #[test]
    fn test_template_content() {
        let doc = generate(date(2026, 1, 1), &[30, 31, 32]);
        assert_eq!(doc.title, "International Tour");
        assert_eq!(doc.days[0].activities.len(), 7);
        assert_eq!(doc.days[1].activities[1].sub_items().len(), 3);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].items.len(), 4);
    }

    #[test]
    fn test_no_offsets_gives_no_days() {
        let doc = generate(date(2026, 1, 1), &[]);
        assert!(doc.days.is_empty());
        assert_eq!(doc.dates, "");
    }
}
