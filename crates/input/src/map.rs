//! Key mapping from terminal events to intents.
//!
//! Movement is shared between the two games. They differ on space: the
//! falling-piece game hard-drops, the cluster game pauses.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys every game understands.
fn common_intent(key: &KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Intent::Rotate),

        // Lifecycle
        KeyCode::Enter => Some(Intent::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),

        _ => None,
    }
}

/// Map keyboard input for the falling-piece game.
pub fn tetris_intent(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(Intent::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),
        _ => common_intent(&key),
    }
}

/// Map keyboard input for the cluster-matching game.
pub fn puyo_intent(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::HardDrop),
        _ => common_intent(&key),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        for map in [tetris_intent, puyo_intent] {
            assert_eq!(map(key(KeyCode::Left)), Some(Intent::MoveLeft));
            assert_eq!(map(key(KeyCode::Right)), Some(Intent::MoveRight));
            assert_eq!(map(key(KeyCode::Down)), Some(Intent::SoftDrop));
            assert_eq!(map(key(KeyCode::Char('H'))), Some(Intent::MoveLeft));
            assert_eq!(map(key(KeyCode::Char('d'))), Some(Intent::MoveRight));
            assert_eq!(map(key(KeyCode::Char('j'))), Some(Intent::SoftDrop));
        }
    }

    #[test]
    fn test_rotation_keys() {
        for map in [tetris_intent, puyo_intent] {
            assert_eq!(map(key(KeyCode::Up)), Some(Intent::Rotate));
            assert_eq!(map(key(KeyCode::Char('k'))), Some(Intent::Rotate));
            assert_eq!(map(key(KeyCode::Char('W'))), Some(Intent::Rotate));
        }
    }

    #[test]
    fn test_lifecycle_keys() {
        for map in [tetris_intent, puyo_intent] {
            assert_eq!(map(key(KeyCode::Enter)), Some(Intent::Start));
            assert_eq!(map(key(KeyCode::Char('r'))), Some(Intent::Reset));
            assert_eq!(map(key(KeyCode::Char('p'))), Some(Intent::Pause));
        }
    }

    #[test]
    fn test_space_differs_per_game() {
        assert_eq!(tetris_intent(key(KeyCode::Char(' '))), Some(Intent::HardDrop));
        assert_eq!(puyo_intent(key(KeyCode::Char(' '))), Some(Intent::Pause));
        assert_eq!(puyo_intent(key(KeyCode::Char('x'))), Some(Intent::HardDrop));
        assert_eq!(tetris_intent(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(tetris_intent(release), None);
        assert_eq!(puyo_intent(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Char('x'))));
    }
}
