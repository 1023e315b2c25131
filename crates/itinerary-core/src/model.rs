//! Itinerary Document Model
//!
//! Plain owned tree; order inside every list is the display order.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Root of the itinerary document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub dates: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub organizer: String,
    /// Free text, usually comma-separated phone numbers
    #[serde(default, deserialize_with = "lenient::string")]
    pub contacts: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub days: Vec<Day>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sections: Vec<Section>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub footer: String,
}

/// One calendar day of the trip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub activities: Vec<Activity>,
}

/// A timed entry within a day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    /// Never `Some(vec![])`: the field is dropped once it empties
    #[serde(
        rename = "subItems",
        default,
        deserialize_with = "lenient::sub_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_items: Option<Vec<String>>,
}

/// Titled list of instructions (documents, currency, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<SectionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
}

impl Itinerary {
    /// Every field empty, no days or sections
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Activity {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
            sub_items: None,
        }
    }

    pub fn with_sub_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        self.sub_items = if items.is_empty() { None } else { Some(items) };
        self
    }

    /// Sub items as a slice; empty when the field is absent
    pub fn sub_items(&self) -> &[String] {
        self.sub_items.as_deref().unwrap_or(&[])
    }
}

impl SectionItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_items_omitted_when_absent() {
        let act = Activity::new("09:00 AM", "Breakfast");
        let json = serde_json::to_string(&act).unwrap();
        assert_eq!(json, r#"{"time":"09:00 AM","description":"Breakfast"}"#);
    }

    #[test]
    fn test_sub_items_use_camel_case_key() {
        let act = Activity::new("", "Tour").with_sub_items(["Museum"]);
        let json = serde_json::to_value(&act).unwrap();
        assert_eq!(json["subItems"][0], "Museum");
    }

    #[test]
    fn test_empty_sub_items_load_as_absent() {
        let act: Activity =
            serde_json::from_str(r#"{"time":"","description":"x","subItems":[]}"#).unwrap();
        assert_eq!(act.sub_items, None);
        assert!(act.sub_items().is_empty());
    }

    #[test]
    fn test_lenient_fields() {
        let doc: Itinerary = serde_json::from_str(
            r#"{"title":null,"contacts":12345,"days":"oops","sections":[{"title":"S"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.title, "");
        assert_eq!(doc.contacts, "");
        assert!(doc.days.is_empty());
        assert_eq!(doc.sections.len(), 1);
        assert!(doc.sections[0].items.is_empty());
        assert_eq!(doc.footer, "");
    }

    #[test]
    fn test_with_sub_items_empty_is_none() {
        let act = Activity::new("", "").with_sub_items(Vec::<String>::new());
        assert_eq!(act.sub_items, None);
    }
}
