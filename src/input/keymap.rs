use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::router::Action;

/// What a key press means to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Action(Action),
    /// Re-read the layout document
    Reload,
    Quit,
}

/// Translates a terminal key press into a launcher input.
/// Releases and repeats reported by some terminals are dropped.
#[must_use]
pub fn key_input(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Char('c') && control {
        return Some(KeyInput::Quit);
    }
    if matches!(key.code, KeyCode::Char('r' | 'R')) && !control {
        return Some(KeyInput::Reload);
    }

    let action = match key.code {
        KeyCode::Right => Action::AdvancePositive,
        KeyCode::Left => Action::AdvanceNegative,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc | KeyCode::Backspace => Action::Cancel,
        KeyCode::Menu => Action::MenuToggle,
        KeyCode::Char('s' | 'S') if !control => Action::MenuToggle,
        KeyCode::Char(_)
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => return None,
    };
    Some(KeyInput::Action(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            key_input(press(KeyCode::Right)),
            Some(KeyInput::Action(Action::AdvancePositive))
        );
        assert_eq!(
            key_input(press(KeyCode::Left)),
            Some(KeyInput::Action(Action::AdvanceNegative))
        );
        assert_eq!(key_input(press(KeyCode::Up)), None);
    }

    #[test]
    fn test_confirm_and_cancel() {
        assert_eq!(
            key_input(press(KeyCode::Enter)),
            Some(KeyInput::Action(Action::Confirm))
        );
        assert_eq!(
            key_input(press(KeyCode::Esc)),
            Some(KeyInput::Action(Action::Cancel))
        );
        assert_eq!(
            key_input(press(KeyCode::Backspace)),
            Some(KeyInput::Action(Action::Cancel))
        );
    }

    #[test]
    fn test_menu_keys() {
        for code in [KeyCode::Char('s'), KeyCode::Char('S'), KeyCode::Menu] {
            assert_eq!(key_input(press(code)), Some(KeyInput::Action(Action::MenuToggle)));
        }
        assert_eq!(key_input(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_reload_key() {
        assert_eq!(key_input(press(KeyCode::Char('r'))), Some(KeyInput::Reload));
        assert_eq!(key_input(press(KeyCode::Char('R'))), Some(KeyInput::Reload));
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(key_input(key), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_input(key), Some(KeyInput::Quit));
    }

    #[test]
    fn test_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_input(key), None);
    }
}
