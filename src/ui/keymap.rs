use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the navigation layer does with a key before any widget sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Back,
    Select,
    /// Handed to the active screen's widget unchanged.
    Widget,
}

pub fn classify(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Backspace | KeyCode::Esc => KeyAction::Back,
        KeyCode::Enter => KeyAction::Select,
        _ => KeyAction::Widget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_keys() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(classify(&plain(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            classify(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(classify(&plain(KeyCode::Backspace)), KeyAction::Back);
        assert_eq!(classify(&plain(KeyCode::Esc)), KeyAction::Back);
        assert_eq!(classify(&plain(KeyCode::Enter)), KeyAction::Select);
    }

    #[test]
    fn test_movement_keys_go_to_widget() {
        for code in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Char('c'),
            KeyCode::PageDown,
        ] {
            assert_eq!(classify(&KeyEvent::new(code, KeyModifiers::NONE)), KeyAction::Widget);
        }
    }
}
