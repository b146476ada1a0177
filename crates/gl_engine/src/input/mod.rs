//! Keyboard input polling
//!
//! The tutorial programs react to exactly one key: escape closes the
//! window. The check runs once per frame against the key's current
//! state rather than against key events.

use crate::render::Window;
use glfw::{Action, Key};

/// Whether the given escape-key state requests a window close.
///
/// Level-triggered: a held key answers true on every poll, independent
/// of prior frames.
#[must_use]
pub fn close_requested(escape_state: Action) -> bool {
    escape_state == Action::Press
}

/// Per-frame input check.
///
/// Marks the window as should-close while the escape key is pressed.
pub fn process_input(window: &mut Window) {
    if close_requested(window.get_key(Key::Escape)) {
        window.set_should_close(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_press_requests_close() {
        assert!(close_requested(Action::Press));
    }

    #[test]
    fn test_escape_release_does_not_request_close() {
        assert!(!close_requested(Action::Release));
        assert!(!close_requested(Action::Repeat));
    }
}
