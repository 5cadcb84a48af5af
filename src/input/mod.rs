//! Keyboard input mapping for the terminal driver.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key event to a game action, if any.
pub fn handle_key_event(event: KeyEvent) -> Option<GameAction> {
    match event.code {
        KeyCode::Left | KeyCode::Char('h') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(GameAction::CursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Select),
        KeyCode::Char('b') => Some(GameAction::BotMove),
        KeyCode::Char('a') => Some(GameAction::ToggleAutoplay),
        KeyCode::Char('r') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Quit keys are handled separately so they work even mid-game-over.
pub fn should_quit(event: KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
