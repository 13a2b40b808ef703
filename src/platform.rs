//! Platform-specific shortcut labels
//!
//! Wizard shortcuts are bound to Ctrl on every platform because terminals
//! do not forward Cmd; only the labels in help text differ.

/// Validate-and-preview shortcut display
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Add entry shortcut display
pub const ADD_ENTRY_SHORTCUT: &str = "Ctrl+N";

/// Remove entry shortcut display
pub const REMOVE_ENTRY_SHORTCUT: &str = "Ctrl+X";

/// Cycle suggestion shortcut display
pub const SUGGESTION_SHORTCUT: &str = "Ctrl+T";

/// Copy preview shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Ctrl+Y (not Cmd)";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";
