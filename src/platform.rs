//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the "new account" shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Create another account shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const CREATE_NEW_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const CREATE_NEW_SHORTCUT: &str = "Ctrl+N";
