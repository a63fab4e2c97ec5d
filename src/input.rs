//! Input handling - key translation into editor events

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Discrete input events consumed by the interaction layer
///
/// Hosts that do not use crossterm can construct these directly; the
/// editor only ever sees this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// A printable character typed at the caret
    Insert(char),
    /// Line break
    Enter,
    /// One indentation step (Tab)
    Indent,
    /// Remove one indentation step (Shift+Tab)
    Outdent,
    /// Delete backward
    Backspace,
    /// Caret/menu navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Cancel (closes the completion menu)
    Escape,
    /// Explicitly open the completion menu (Ctrl+Space)
    CompleteTrigger,
}

/// Translate a crossterm key event into an editor event
///
/// Only press events translate; release and repeat events are dropped.
pub fn translate_key(event: KeyEvent) -> Option<EditorEvent> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let meta = modifiers.contains(KeyModifiers::SUPER);
    let shift = modifiers.contains(KeyModifiers::SHIFT);

    match code {
        KeyCode::Char(' ') if ctrl || meta => Some(EditorEvent::CompleteTrigger),
        KeyCode::Char(ch) if !ctrl && !meta => Some(EditorEvent::Insert(ch)),
        KeyCode::Enter => Some(EditorEvent::Enter),
        KeyCode::Tab if shift => Some(EditorEvent::Outdent),
        KeyCode::Tab => Some(EditorEvent::Indent),
        KeyCode::BackTab => Some(EditorEvent::Outdent),
        KeyCode::Backspace => Some(EditorEvent::Backspace),
        KeyCode::Up => Some(EditorEvent::ArrowUp),
        KeyCode::Down => Some(EditorEvent::ArrowDown),
        KeyCode::Left => Some(EditorEvent::ArrowLeft),
        KeyCode::Right => Some(EditorEvent::ArrowRight),
        KeyCode::Esc => Some(EditorEvent::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_char() {
        assert_eq!(
            translate_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(EditorEvent::Insert('a'))
        );
    }

    #[test]
    fn test_ctrl_space_triggers_completion() {
        assert_eq!(
            translate_key(press(KeyCode::Char(' '), KeyModifiers::CONTROL)),
            Some(EditorEvent::CompleteTrigger)
        );
    }

    #[test]
    fn test_shift_tab_outdents() {
        assert_eq!(
            translate_key(press(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(EditorEvent::Outdent)
        );
        assert_eq!(
            translate_key(press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(EditorEvent::Outdent)
        );
    }

    #[test]
    fn test_release_dropped() {
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(translate_key(event), None);
    }

    #[test]
    fn test_other_ctrl_chords_ignored() {
        assert_eq!(
            translate_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }
}
