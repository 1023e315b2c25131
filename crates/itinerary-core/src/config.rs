//! Editor Configuration
//!
//! Storage keys, timings, and template offsets in one place.

/// Editor-wide settings, built with `Default` at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Storage key holding the serialized itinerary
    pub document_key: String,
    /// Storage key holding the theme preference
    pub theme_key: String,
    /// Idle window before typed input is persisted
    pub autosave_delay_ms: u32,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Days from "now" for each template day
    pub template_offsets: Vec<i64>,
}

pub const DEFAULT_DOCUMENT_KEY: &str = "itinerary_data";
pub const DEFAULT_THEME_KEY: &str = "itinerary_theme";

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            autosave_delay_ms: 500,
            toast_duration_ms: 3000,
            template_offsets: vec![30, 31, 32],
        }
    }
}
