//! Keyboard shortcuts shared by the text inputs.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// What a keydown in a task text field should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    Cancel,
}

/// Map a key to an action. Keys pressed while an IME composition is open
/// belong to the composition and never trigger anything.
pub fn key_action(key: &str, composing: bool) -> Option<KeyAction> {
    if composing {
        return None;
    }
    match key {
        "Enter" => Some(KeyAction::Submit),
        "Escape" => Some(KeyAction::Cancel),
        _ => None,
    }
}
