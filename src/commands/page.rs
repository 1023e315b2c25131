//! Page Commands
//!
//! Document-level tweaks: theme attribute and scrolling.

use itinerary_core::Theme;
use tracing::warn;

/// Set `data-theme` on the root element so the stylesheet can switch palettes
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            warn!("Could not apply theme: {:?}", e);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}
