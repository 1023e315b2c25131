//! Browser Command Wrappers
//!
//! Thin bindings to the browser APIs the editor needs, organized by concern.

mod storage;
mod clipboard;
mod dialog;
mod page;
mod timer;

// Re-export all public items
pub use storage::*;
pub use clipboard::*;
pub use dialog::*;
pub use page::*;
pub use timer::*;
