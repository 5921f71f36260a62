//! Keyboard handling for the TUI.
//!
//! Keys are first offered to the command composer; anything it does not
//! consume is mapped through the global bindings. The result is a
//! [`KeyAction`] so the mapping can be tested without a terminal.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use si_protocol::Op;

use crate::widgets::CommandComposer;

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Apply an operation to the indicator.
    Op(Op),
    /// Scroll the detail view up.
    ScrollUp,
    /// Scroll the detail view down.
    ScrollDown,
    /// A submitted command could not be parsed.
    Error(String),
    /// Nothing to do beyond redrawing.
    None,
}

/// Handle a keyboard event from the user.
///
/// `step_count` is used to label steps added with `a`.
pub fn handle_keyboard_event(
    key_event: KeyEvent,
    composer: &mut CommandComposer,
    step_count: usize,
) -> KeyAction {
    if key_event.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return KeyAction::Op(Op::Quit);
    }

    if composer.handle_key_event(key_event).is_consumed() {
        return match composer.take_submitted() {
            Some(Ok(op)) => KeyAction::Op(op),
            Some(Err(message)) => KeyAction::Error(message),
            None => KeyAction::None,
        };
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Op(Op::Quit),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Op(Op::Next),
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Op(Op::Previous),
        KeyCode::Char('a') => KeyAction::Op(Op::AddStep(format!("Step {}", step_count + 1))),
        KeyCode::Char('d') => KeyAction::Op(Op::RemoveStep),
        KeyCode::Char('k') | KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::Char('/') => {
            composer.insert_char('/');
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, composer: &mut CommandComposer) -> KeyAction {
        handle_keyboard_event(KeyEvent::from(code), composer, 3)
    }

    #[test]
    fn test_global_bindings() {
        let mut composer = CommandComposer::new();
        assert_eq!(press(KeyCode::Right, &mut composer), KeyAction::Op(Op::Next));
        assert_eq!(press(KeyCode::Char('h'), &mut composer), KeyAction::Op(Op::Previous));
        assert_eq!(
            press(KeyCode::Char('a'), &mut composer),
            KeyAction::Op(Op::AddStep("Step 4".to_string()))
        );
        assert_eq!(press(KeyCode::Char('d'), &mut composer), KeyAction::Op(Op::RemoveStep));
        assert_eq!(press(KeyCode::Char('j'), &mut composer), KeyAction::ScrollDown);
        assert_eq!(press(KeyCode::Char('q'), &mut composer), KeyAction::Op(Op::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_even_while_composing() {
        let mut composer = CommandComposer::new();
        press(KeyCode::Char('/'), &mut composer);
        let action = handle_keyboard_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut composer,
            0,
        );
        assert_eq!(action, KeyAction::Op(Op::Quit));
    }

    #[test]
    fn test_slash_opens_composer_and_captures_keys() {
        let mut composer = CommandComposer::new();
        assert_eq!(press(KeyCode::Char('/'), &mut composer), KeyAction::None);
        assert!(composer.is_open());

        // 'q' is text while composing, not quit.
        for c in "step q".chars() {
            assert_eq!(press(KeyCode::Char(c), &mut composer), KeyAction::None);
        }
        assert_eq!(composer.input(), "/step q");

        assert_eq!(
            press(KeyCode::Enter, &mut composer),
            KeyAction::Op(Op::SetStep("q".to_string()))
        );
        assert!(!composer.is_open());
    }

    #[test]
    fn test_invalid_command_reports_error() {
        let mut composer = CommandComposer::new();
        press(KeyCode::Char('/'), &mut composer);
        for c in "jump".chars() {
            press(KeyCode::Char(c), &mut composer);
        }
        assert_eq!(
            press(KeyCode::Enter, &mut composer),
            KeyAction::Error("Unknown command: /jump".to_string())
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut composer = CommandComposer::new();
        let mut event = KeyEvent::from(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_keyboard_event(event, &mut composer, 0), KeyAction::None);
    }
}
