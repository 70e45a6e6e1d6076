//! Key mapping from terminal events to simulation input.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which simulation key a terminal key stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Jump,
    Left,
    Right,
    Pause,
    Escape,
}

/// Commands for the host loop rather than the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// Start a run unless one is in progress
    Start,
    /// Abandon the current run and begin a new one
    Restart,
    Quit,
}

pub fn game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(GameKey::Jump)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameKey::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameKey::Pause),
        KeyCode::Esc => Some(GameKey::Escape),
        _ => None,
    }
}

/// Map a key event to a simulation event.
///
/// Presses (and terminal auto-repeat) map to jump / move-press / pause /
/// escape. Releases only matter for horizontal movement.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    let game_key = game_key(key.code)?;
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(match game_key {
            GameKey::Jump => InputEvent::Jump,
            GameKey::Left => InputEvent::MoveLeftPress,
            GameKey::Right => InputEvent::MoveRightPress,
            GameKey::Pause => InputEvent::Pause,
            GameKey::Escape => InputEvent::Escape,
        }),
        KeyEventKind::Release => match game_key {
            GameKey::Left => Some(InputEvent::MoveLeftRelease),
            GameKey::Right => Some(InputEvent::MoveRightRelease),
            _ => None,
        },
    }
}

/// Map a key press to a host command.
pub fn host_command(key: KeyEvent) -> Option<HostCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(HostCommand::Quit);
    }
    match key.code {
        KeyCode::Enter => Some(HostCommand::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostCommand::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
