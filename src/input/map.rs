//! Key mapping from terminal events to engine commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a key event to an engine command. Unmapped keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),
        _ => None,
    }
}

/// Whether the key starts (or restarts) a run.
pub fn is_start_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')
    )
}

/// Whether the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_commands() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Command::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Command::Rotate));
    }

    #[test]
    fn letter_aliases_map_to_commands() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('a'))), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('D'))), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(Command::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(Command::Rotate));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn start_and_quit_keys() {
        assert!(is_start_key(KeyEvent::from(KeyCode::Enter)));
        assert!(is_start_key(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!is_start_key(KeyEvent::from(KeyCode::Char('x'))));

        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
