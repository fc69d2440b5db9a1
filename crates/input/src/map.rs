//! Key bindings.
//!
//! | Keys                    | Intent      |
//! |-------------------------|-------------|
//! | Left, h, a              | MoveLeft    |
//! | Right, l, d             | MoveRight   |
//! | Down, j, s              | SoftDrop    |
//! | Up, k, w, x             | Rotate      |
//! | Space                   | HardDrop    |
//! | c, Shift                | Hold        |
//! | Enter, r                | StartGame   |

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game intent.
///
/// Release events (reported by terminals with keyboard enhancement) map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let intent = match key.code {
        KeyCode::Left => Intent::MoveLeft,
        KeyCode::Right => Intent::MoveRight,
        KeyCode::Down => Intent::SoftDrop,
        KeyCode::Up => Intent::Rotate,
        KeyCode::Enter => Intent::StartGame,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => Intent::MoveLeft,
            'l' | 'd' => Intent::MoveRight,
            'j' | 's' => Intent::SoftDrop,
            'k' | 'w' | 'x' => Intent::Rotate,
            ' ' => Intent::HardDrop,
            'c' => Intent::Hold,
            'r' => Intent::StartGame,
            _ => return None,
        },
        KeyCode::Modifier(_) if key.modifiers.contains(KeyModifiers::SHIFT) => Intent::Hold,
        _ => return None,
    };
    Some(intent)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
