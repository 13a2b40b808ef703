//! Form rendering module
//!
//! - `field_renderer`: field and help-text drawing
//! - `section_form`: the draft editor for the current wizard step

mod field_renderer;
mod section_form;

pub use field_renderer::draw_help_text;
pub use section_form::draw_section_form;
