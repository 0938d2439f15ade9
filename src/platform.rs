//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for Enter-to-submit
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+Enter/Ctrl+Enter also work as fallback)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Enter-to-submit shortcut display
#[cfg(target_os = "macos")]
pub const ENTER_SUBMIT_SHORTCUT: &str = "Cmd+Enter";

#[cfg(not(target_os = "macos"))]
pub const ENTER_SUBMIT_SHORTCUT: &str = "Ctrl+Enter";
