use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::game_loop::{Action, InputSource};

/// Blocking keyboard reader. Expects raw mode to be enabled already.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn next_action(&mut self) -> io::Result<Action> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = decode_key(key) {
                    return Ok(action);
                }
            }
        }
    }
}

/// Escape quits, Enter fires, `e` interacts and any other character is a
/// movement key. Arrow keys are folded onto WASD.
pub fn decode_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Fire),
        KeyCode::Char('e') => Some(Action::Interact),
        KeyCode::Char(ch) => Some(Action::Move(ch)),
        KeyCode::Up => Some(Action::Move('w')),
        KeyCode::Left => Some(Action::Move('a')),
        KeyCode::Down => Some(Action::Move('s')),
        KeyCode::Right => Some(Action::Move('d')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn decodes_the_control_keys() {
        assert_eq!(decode_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(decode_key(press(KeyCode::Enter)), Some(Action::Fire));
        assert_eq!(decode_key(press(KeyCode::Char('e'))), Some(Action::Interact));
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn other_characters_pass_through_as_moves() {
        assert_eq!(decode_key(press(KeyCode::Char('w'))), Some(Action::Move('w')));
        assert_eq!(decode_key(press(KeyCode::Char('q'))), Some(Action::Move('q')));
        assert_eq!(decode_key(press(KeyCode::Char('c'))), Some(Action::Move('c')));
    }

    #[test]
    fn arrows_map_to_wasd() {
        assert_eq!(decode_key(press(KeyCode::Up)), Some(Action::Move('w')));
        assert_eq!(decode_key(press(KeyCode::Right)), Some(Action::Move('d')));
    }

    #[test]
    fn releases_and_unmapped_keys_are_skipped() {
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(decode_key(release), None);
        assert_eq!(decode_key(press(KeyCode::Tab)), None);
    }
}
