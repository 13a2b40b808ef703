//! Dialog components for TUI

mod base;
mod error_dialog;
mod preview_dialog;

pub use error_dialog::render_error_dialog;
pub use preview_dialog::render_step_preview;
